//! This crate checks Wyndham City Council's collection page for the bins due this week
//! and pushes a summary note through Pushbullet.
//!
//! The dates are read from <https://digital.wyndham.vic.gov.au/myWyndham/init-map-data.asp>.

pub use chrono;

pub mod config;
pub mod council_client;
pub mod date;
pub mod error;
pub mod logging;
pub mod model;
pub mod notifier;
pub mod secret;
pub mod service;
pub mod week;

pub use error::{Error, ErrorKind};
