#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod macros;
pub mod selectors;
pub mod services;
pub mod tools;
pub mod types;

pub use api::Pipeline;
pub use config::ScraperConfig;
pub use services::*;
pub use types::*;
