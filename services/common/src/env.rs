use std::{env, str::FromStr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("{0} is required")]
    Missing(String),
}

pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

/// Parses an optional raw value, falling back when it is absent or unparsable.
pub fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Blank values count as missing.
pub fn require_var(key: &str, value: Option<String>) -> Result<String, EnvError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EnvError::Missing(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("9090".to_string()), 8080u16), 9090);
        assert_eq!(parse_or(Some(" 9090 ".to_string()), 8080u16), 9090);
        assert_eq!(parse_or(Some("port".to_string()), 8080u16), 8080);
        assert_eq!(parse_or(None, 8080u16), 8080);
    }

    #[test]
    fn require_var_rejects_blank() {
        assert_eq!(
            require_var("API_KEY", Some("secret".to_string())),
            Ok("secret".to_string())
        );
        assert_eq!(
            require_var("API_KEY", Some("  ".to_string())),
            Err(EnvError::Missing("API_KEY".to_string()))
        );
        assert_eq!(
            require_var("API_KEY", None),
            Err(EnvError::Missing("API_KEY".to_string()))
        );
    }

    #[test]
    fn missing_error_names_the_variable() {
        let err = require_var("TOPIC_NAME", None).unwrap_err();
        assert_eq!(err.to_string(), "TOPIC_NAME is required");
    }
}
