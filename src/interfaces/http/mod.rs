//! HTTP REST API interfaces
//!
//! - `common`: error mapping, JSON extraction and response helpers
//! - `dto`: request/response bodies
//! - `handlers`: one function per method+path
//! - `request_id`: correlation-id middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod dto;
pub mod handlers;
pub mod request_id;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
