//! Expression evaluation subsystem.
//!
//! # Data Flow
//! ```text
//! /evaluate handler
//!     → evaluator.rs (JexlEngine wrapper, shared via Arc)
//!         → jexl-eval crate (grammar, parsing, evaluation)
//!         → transforms.rs (extended transform set, registered per call)
//!     → Result<Value, EngineError> (every library failure converted to data)
//! ```
//!
//! # Design Decisions
//! - Grammar and evaluation semantics live entirely in the jexl-eval crate
//! - The wrapper is Send + Sync so one engine serves all requests
//! - Failures never cross this boundary as panics; callers get EngineError

pub mod evaluator;
pub mod transforms;

pub use evaluator::{EngineError, JexlEngine};
