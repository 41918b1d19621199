pub mod config;
pub mod input;
pub mod observable;
pub mod types;
