pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod image_file;
pub mod interactive;
pub mod logging;
pub mod session;
