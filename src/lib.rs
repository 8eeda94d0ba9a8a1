pub mod app;
pub mod config;
pub mod modules;
pub mod shared;
pub mod utils;
