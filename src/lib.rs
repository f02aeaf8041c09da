// Library entry so integration tests can reference internal modules.
// The binary (`main.rs`) only wires settings, services and the HTTP server together.
pub mod commands;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod interactions;
pub mod model;
pub mod server;
pub mod services;
pub mod ui;

pub use model::AppState;
