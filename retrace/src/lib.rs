pub mod aggregate;
pub mod app;
pub mod config;
pub mod report;
pub mod service;
pub mod taps;
