//! different utility modules used throughout the project
/// tiny module to initialize terminal/file logging
pub mod logger;
