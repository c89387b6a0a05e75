pub mod config;
pub mod error;
pub mod protocol;
pub mod serde_utils;
pub mod services;
