//! API Module
//!
//! HTTP server side of the proxy tier: keeps the service credential off the
//! client and relays prompts to the completion service.
//!
//! # Endpoints
//! - `POST /api/deepseek` - Relay a `{prompt, options}` completion request
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod mock;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
