pub mod demo;
pub mod time;
