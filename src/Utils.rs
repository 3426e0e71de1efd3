//! different utility modules used throughout the project

/// tiny module to set up console logging via simplelog
pub mod logging;
