//! JEXL Playground Service Library
//!
//! A thin HTTP wrapper around the jexl-eval expression evaluator, plus
//! a static file server with SPA fallback for the prebuilt playground
//! frontend.

pub mod config;
pub mod engine;
pub mod http;
pub mod observability;

pub use config::ServiceConfig;
pub use engine::JexlEngine;
pub use http::HttpServer;
