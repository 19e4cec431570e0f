//! Transport adapter: rendering canonical outcomes into responses
//!
//! Pure rendering only; no business logic. The routing layer forwards the
//! rendered status and body unchanged.
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::outcome::CanonicalOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape hint describing the operation a handler performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    /// Created a resource reachable at `location`
    Creation { location: String },
    /// Read one or more resources
    Query,
    /// Changed an existing resource
    Mutation,
    /// Removed a resource
    Deletion,
}

/// A fully rendered transport response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: u16,
    pub body: Option<Value>,
    pub location: Option<String>,
}

/// Error body emitted for every failure outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

/// Render a canonical outcome into a concrete response
///
/// Success rendering depends on the operation kind: creation carries the
/// value plus a location reference under 201, queries and mutations carry
/// the value under 200, deletion is an empty 204. Every failure renders a
/// structured `{code, message}` body with the transport status equal to the
/// failure's code.
pub fn render<T: Serialize>(outcome: CanonicalOutcome<T>, op: OperationKind) -> Result<Rendered> {
    match outcome {
        CanonicalOutcome::Success(value) => match op {
            OperationKind::Creation { location } => Ok(Rendered {
                status: 201,
                body: Some(serde_json::to_value(&value)?),
                location: Some(location),
            }),
            OperationKind::Query | OperationKind::Mutation => Ok(Rendered {
                status: 200,
                body: Some(serde_json::to_value(&value)?),
                location: None,
            }),
            OperationKind::Deletion => Ok(Rendered {
                status: 204,
                body: None,
                location: None,
            }),
        },
        CanonicalOutcome::Failure { code, message } => Ok(Rendered {
            status: code,
            body: Some(serde_json::to_value(ErrorBody { code, message })?),
            location: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_creation() {
        let rendered = render(
            CanonicalOutcome::Success(json!({"id": 1})),
            OperationKind::Creation {
                location: "/styles/1".to_string(),
            },
        )
        .unwrap();
        assert_eq!(rendered.status, 201);
        assert_eq!(rendered.body, Some(json!({"id": 1})));
        assert_eq!(rendered.location.as_deref(), Some("/styles/1"));
    }

    #[test]
    fn test_render_query_and_mutation() {
        let rendered = render(CanonicalOutcome::Success(vec![1, 2]), OperationKind::Query).unwrap();
        assert_eq!(rendered.status, 200);
        assert_eq!(rendered.body, Some(json!([1, 2])));

        let rendered = render(CanonicalOutcome::Success(3), OperationKind::Mutation).unwrap();
        assert_eq!(rendered.status, 200);
        assert_eq!(rendered.body, Some(json!(3)));
    }

    #[test]
    fn test_render_deletion_has_no_body() {
        let rendered = render(CanonicalOutcome::Success(()), OperationKind::Deletion).unwrap();
        assert_eq!(rendered.status, 204);
        assert_eq!(rendered.body, None);
        assert_eq!(rendered.location, None);
    }

    #[test]
    fn test_render_failure_body() {
        let rendered = render(
            CanonicalOutcome::<()>::Failure {
                code: 404,
                message: "style does not exist".to_string(),
            },
            OperationKind::Query,
        )
        .unwrap();
        assert_eq!(rendered.status, 404);
        assert_eq!(
            rendered.body,
            Some(json!({"code": 404, "message": "style does not exist"}))
        );
    }
}
