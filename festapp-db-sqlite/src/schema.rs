///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (id) {
        id -> BigInt,
        user_id -> BigInt,
        name -> Text,
        token -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    projects (id) {
        id -> BigInt,
        event_id -> BigInt,
        name -> Text,
        kind -> Text,
        position -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Project contents
///////////////////////////////////////////////////////////////////////

table! {
    pindrops (id) {
        id -> BigInt,
        project_id -> BigInt,
        event_id -> BigInt,
        title -> Text,
        lat -> Double,
        lng -> Double,
    }
}

table! {
    directories (id) {
        id -> BigInt,
        project_id -> BigInt,
        event_id -> BigInt,
        // 0 for root directories
        parent_id -> BigInt,
        // pindrop or 0
        map_id -> BigInt,
        name -> Text,
        position -> BigInt,
    }
}

table! {
    directory_entries (id) {
        id -> BigInt,
        directory_id -> BigInt,
        event_id -> BigInt,
        // 0 for root entries
        parent_entry_id -> BigInt,
        title -> Text,
        body -> Nullable<Text>,
        image_url -> Nullable<Text>,
    }
}

table! {
    hunts (id) {
        id -> BigInt,
        project_id -> BigInt,
        event_id -> BigInt,
        title -> Text,
    }
}

table! {
    hunt_items (id) {
        id -> BigInt,
        hunt_id -> BigInt,
        event_id -> BigInt,
        title -> Text,
        code -> Text,
        points -> BigInt,
    }
}

table! {
    news (id) {
        id -> BigInt,
        project_id -> BigInt,
        event_id -> BigInt,
        title -> Text,
    }
}

table! {
    news_items (id) {
        id -> BigInt,
        news_id -> BigInt,
        event_id -> BigInt,
        project_id -> BigInt,
        // directory entry or 0
        directory_entry_id -> BigInt,
        title -> Text,
        body -> Nullable<Text>,
        published_at -> BigInt,
    }
}

table! {
    polls (id) {
        id -> BigInt,
        project_id -> BigInt,
        event_id -> BigInt,
        question -> Text,
    }
}

table! {
    poll_items (id) {
        id -> BigInt,
        poll_id -> BigInt,
        event_id -> BigInt,
        answer -> Text,
        votes -> BigInt,
    }
}

table! {
    shops (id) {
        id -> BigInt,
        project_id -> BigInt,
        event_id -> BigInt,
        name -> Text,
    }
}

table! {
    shop_items (id) {
        id -> BigInt,
        shop_id -> BigInt,
        event_id -> BigInt,
        name -> Text,
        price_cents -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Event contents
///////////////////////////////////////////////////////////////////////

table! {
    schedules (id) {
        id -> BigInt,
        event_id -> BigInt,
        // project or 0
        project_id -> BigInt,
        title -> Text,
        starts_at -> BigInt,
        ends_at -> Nullable<BigInt>,
    }
}

table! {
    guests (id) {
        id -> BigInt,
        event_id -> BigInt,
        first_name -> Text,
        last_name -> Nullable<Text>,
        email -> Text,
        token -> Text,
    }
}

table! {
    installs (id) {
        id -> BigInt,
        event_id -> BigInt,
        count -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    lookups (id, event_id) {
        id -> Text,
        event_id -> BigInt,
        value -> Text,
    }
}
