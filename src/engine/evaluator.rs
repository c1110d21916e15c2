//! Thread-safe wrapper around the third-party JEXL evaluator.

use jexl_eval::Evaluator;
use serde_json::Value;
use thiserror::Error;

use crate::engine::transforms;

/// Failure raised while evaluating an expression.
///
/// The underlying library distinguishes parse, type, and reference
/// errors; the service contract only needs their string form, so the
/// categories are collapsed here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Evaluation(String),
}

/// Shared evaluation engine.
///
/// `jexl_eval::Evaluator` boxes its transform closures without a `Sync`
/// bound, so the value itself cannot be stored in shared state. The
/// engine instead holds the transform registry (plain fn pointers) and
/// materializes an `Evaluator` per call; registration is a handful of
/// map inserts while the expensive part, the grammar, stays in the
/// library. One engine is constructed at startup and shared via `Arc`.
pub struct JexlEngine {
    transforms: &'static [(&'static str, transforms::TransformFn)],
}

impl JexlEngine {
    pub fn new() -> Self {
        Self {
            transforms: transforms::EXTENDED,
        }
    }

    /// Evaluate an expression against a JSON context.
    ///
    /// Any failure the evaluator raises (parse error, type error,
    /// unresolved reference, transform error) is converted to an
    /// `EngineError` at this boundary.
    pub fn evaluate(&self, expression: &str, context: &Value) -> Result<Value, EngineError> {
        let mut evaluator = Evaluator::new();
        for (name, transform) in self.transforms {
            evaluator = evaluator.with_transform(name, *transform);
        }
        evaluator
            .eval_in_context(expression, context)
            .map_err(|e| EngineError::Evaluation(e.to_string()))
    }
}

impl Default for JexlEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn evaluates_arithmetic() {
        let engine = JexlEngine::new();
        let result = engine.evaluate("1 + 2", &json!({})).unwrap();
        assert_eq!(result.as_f64(), Some(3.0));
    }

    #[test]
    fn resolves_context_references() {
        let engine = JexlEngine::new();
        let result = engine
            .evaluate("foo.bar", &json!({"foo": {"bar": 42}}))
            .unwrap();
        assert_eq!(result.as_f64(), Some(42.0));
    }

    #[test]
    fn parse_error_becomes_engine_error() {
        let engine = JexlEngine::new();
        let err = engine.evaluate("1 +", &json!({})).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn applies_extended_transforms() {
        let engine = JexlEngine::new();
        let result = engine
            .evaluate("name|upper", &json!({"name": "ada"}))
            .unwrap();
        assert_eq!(result, json!("ADA"));
    }

    #[test]
    fn transform_failure_becomes_engine_error() {
        let engine = JexlEngine::new();
        let err = engine
            .evaluate("count|upper", &json!({"count": 3}))
            .unwrap_err();
        assert!(err.to_string().contains("upper"));
    }
}
