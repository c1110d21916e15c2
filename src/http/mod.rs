//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing)
//!     → handlers.rs (/evaluate envelope, /healthz)
//!     → statics.rs (asset resolution, SPA fallback)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;
pub mod statics;

pub use handlers::{EvalRequest, EvalResponse};
pub use server::HttpServer;
