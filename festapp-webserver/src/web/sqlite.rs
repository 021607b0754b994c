use festapp_db_sqlite::Connections as Pool;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use std::ops::Deref;

/// The store of the running server, handed out to every request.
#[derive(Clone)]
pub struct Connections(Pool);

impl From<Pool> for Connections {
    fn from(pool: Pool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = Pool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                log::error!("No database connections are managed by this instance");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
