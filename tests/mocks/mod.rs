pub mod backend;
pub mod models;
