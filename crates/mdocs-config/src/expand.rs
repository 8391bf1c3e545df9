//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Only braced `${...}` segments are expanded; everything between them,
/// including bare `$VAR`, is copied unchanged. An unterminated `${` is
/// left as-is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        out.push_str(&rest[..start]);
        out.push_str(&expand_braced(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Expand a single `${VAR}` or `${VAR:-default}` segment.
fn expand_braced(segment: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(segment, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("MDOCS_TEST_ROOT", "/srv/docs");
        }
        let result = expand_env("${MDOCS_TEST_ROOT}", "content.root").unwrap();
        assert_eq!(result, "/srv/docs");
        unsafe {
            std::env::remove_var("MDOCS_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("MDOCS_TEST_UNSET");
        }
        let result = expand_env("${MDOCS_TEST_UNSET:-content}", "content.root").unwrap();
        assert_eq!(result, "content");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("MDOCS_TEST_PREFIX", "framework");
        }
        let result = expand_env("${MDOCS_TEST_PREFIX}/doc/content", "content.root").unwrap();
        assert_eq!(result, "framework/doc/content");
        unsafe {
            std::env::remove_var("MDOCS_TEST_PREFIX");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("MDOCS_TEST_MISSING");
        }
        let err = expand_env("${MDOCS_TEST_MISSING}", "content.root").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MDOCS_TEST_MISSING"));
        assert!(err.to_string().contains("content.root"));
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_var() {
        // SAFETY: each test uses its own variable names
        unsafe {
            std::env::set_var("MDOCS_TEST_MIXED_X", "x");
            std::env::set_var("MDOCS_TEST_MIXED_Y", "yy");
        }
        let result =
            expand_env("${MDOCS_TEST_MIXED_X}/$MDOCS_TEST_MIXED_Y", "content.root").unwrap();
        assert_eq!(result, "x/$MDOCS_TEST_MIXED_Y");
        unsafe {
            std::env::remove_var("MDOCS_TEST_MIXED_X");
            std::env::remove_var("MDOCS_TEST_MIXED_Y");
        }
    }

    #[test]
    fn test_unterminated_brace_kept() {
        let result = expand_env("docs/${UNTERMINATED", "content.root").unwrap();
        assert_eq!(result, "docs/${UNTERMINATED");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$HOME/docs", "content.root").unwrap();
        assert_eq!(result, "$HOME/docs");
    }
}
