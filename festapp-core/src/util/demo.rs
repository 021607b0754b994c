//! Marking of copied rows as demo data.

use rand::{distributions::Alphanumeric, Rng};

/// Appended to the names of copied events and guests.
pub const DEMO_NAME_SUFFIX: &str = " Demo";

/// Appended to the local part of copied e-mail addresses.
pub const DEMO_EMAIL_MARKER: &str = "-demo";

pub fn demo_name(name: &str) -> String {
    format!("{name}{DEMO_NAME_SUFFIX}")
}

/// Inserts the demo marker in front of the first `@`.
///
/// Strings without an `@` get the marker appended.
pub fn demo_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}{DEMO_EMAIL_MARKER}@{domain}"),
        None => format!("{email}{DEMO_EMAIL_MARKER}"),
    }
}

/// Generates a fresh random token with the same number of
/// characters as `token`, drawn from `[A-Za-z0-9]`.
pub fn similar_token<R>(rng: &mut R, token: &str) -> String
where
    R: Rng + ?Sized,
{
    let len = token.chars().count();
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
