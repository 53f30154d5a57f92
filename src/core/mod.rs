//! Core translation pipeline

pub mod client;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod languages;
pub mod models;
pub mod response;
pub mod session;
pub mod validation;
