pub mod assets;
pub mod cli;
pub mod config;
pub mod content;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;
pub mod visitor;

pub use routes::{AppState, router};
