pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub mod entities {
    pub use festapp_entities::{
        directory::*, event::*, family::*, guest::*, hunt::*, id::*, install::*, lookup::*,
        news::*, pindrop::*, poll::*, project::*, schedule::*, shop::*, user::*,
    };
}
