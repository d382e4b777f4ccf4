pub mod commands;
pub mod config;
pub mod css;
pub mod error;
pub mod loader;
pub mod logger;
pub mod validation;
