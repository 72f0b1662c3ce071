pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod menu;
pub mod model;
pub mod mute;
pub mod timefmt;
pub mod units;
pub mod widgets;

pub use error::{Error, Result};
