//! TubeScope REST API Library
//!
//! Provides handlers and router configuration for the keyword and
//! competitor analytics API.

pub mod auth;
pub mod handlers;
pub mod router;


pub use self::auth::AuthConfig;
pub use self::handlers::*;
pub use self::router::create_router;
