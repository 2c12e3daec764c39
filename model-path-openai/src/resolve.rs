//! Resolution of requested model names.

use model_path::ModelPath;

use crate::error::ErrorResponse;

/// Resolves the `model` field of a request against registry defaults.
///
/// Empty components of the requested reference are filled from `defaults`.
///
/// # Errors
///
/// Returns a 400 `invalid_request_error` if `requested` is empty, and a
/// 404 `not_found_error` if it is not a well-formed model reference.
///
/// # Examples
///
/// ```
/// use model_path::ModelPath;
/// use model_path_openai::resolve_model;
///
/// let defaults = ModelPath::parse("registry.example.com/library/_:latest");
/// let resolved = resolve_model("mistral", &defaults).unwrap();
/// assert_eq!(resolved.to_string(), "registry.example.com/library/mistral:latest");
///
/// let err = resolve_model("x/y/z/foo", &defaults).unwrap_err();
/// assert_eq!(err.status(), 404);
/// ```
pub fn resolve_model(requested: &str, defaults: &ModelPath) -> Result<ModelPath, ErrorResponse> {
    if requested.is_empty() {
        let err = ErrorResponse::bad_request("model is required");
        return Err(err.with_param("model"));
    }

    match ModelPath::try_parse(requested) {
        Ok(path) => {
            let resolved = path.merge(defaults);
            tracing::debug!(requested, %resolved, "resolved model reference");
            Ok(resolved)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejecting model reference");
            Err(
                ErrorResponse::not_found(format!("model '{requested}' not found"))
                    .with_param("model"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    #[test]
    fn fills_missing_components() {
        let defaults = ModelPath::parse("registry.example.com/library/XXXXX:latest+Q4_0");
        let resolved = resolve_model("mistral", &defaults).unwrap();
        assert_eq!(
            resolved.to_string(),
            "registry.example.com/library/mistral:latest+Q4_0"
        );
    }

    #[test]
    fn requested_components_win() {
        let defaults = ModelPath::parse("registry.example.com/library/XXXXX:latest");
        let resolved = resolve_model("jdoe/mistral:7b+q8_0", &defaults).unwrap();
        assert_eq!(
            resolved.parts(),
            ["registry.example.com", "jdoe", "mistral", "7b", "Q8_0"]
        );
    }

    #[test]
    fn scheme_prefix_is_accepted() {
        let resolved = resolve_model("https://mistral:7b", &ModelPath::default()).unwrap();
        assert_eq!(resolved.to_string(), "mistral:7b");
    }

    #[test]
    fn empty_is_bad_request() {
        let err = resolve_model("", &ModelPath::default()).unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.error.kind, ErrorType::InvalidRequestError);
        assert_eq!(err.error.param.as_deref(), Some("model"));
    }

    #[test]
    fn malformed_is_not_found() {
        for requested in ["mistral:7b+Q4_0:latest", "file:///etc/passwd", "mi tral"] {
            let err = resolve_model(requested, &ModelPath::default()).unwrap_err();
            assert_eq!(err.status(), 404);
            assert_eq!(err.error.kind, ErrorType::NotFoundError);
            assert_eq!(err.error.message, format!("model '{requested}' not found"));
        }
    }
}
