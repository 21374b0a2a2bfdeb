//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if a referenced variable without default
/// is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("docs", "docs.source_dir").unwrap(), "docs");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${DSTNAV_TEST_SURELY_UNSET:-fallback}", "docs.source_dir").unwrap();

        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_missing_variable_errors() {
        let err = expand_env("${DSTNAV_TEST_SURELY_UNSET}", "docs.source_dir").unwrap_err();

        assert!(
            matches!(&err, ConfigError::EnvVar { field, message }
                if field == "docs.source_dir" && message.contains("DSTNAV_TEST_SURELY_UNSET")),
            "got {err:?}"
        );
    }
}
