mod config;
pub use self::config::{Config, Host};

pub mod actions;

mod start;
pub use self::start::start;

mod commands;
mod dispatch;
mod matches;
