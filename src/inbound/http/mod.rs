//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod projects;
pub mod settings;
pub mod state;
pub mod tasks;
pub mod users;
pub mod validation;

pub use error::ApiResult;
