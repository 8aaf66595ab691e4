pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod geocoder;
pub mod logging;
pub mod pipeline;
pub mod reader;
