pub mod data;
pub mod engine;
pub mod models;
pub mod session;
