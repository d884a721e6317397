mod config;


pub use config::{AccountConfig, DEFAULT_CHECKIN_ENDPOINT};
