use gateway_common::{parse_or, require_var, EnvError};

/// Axum's own default request body cap.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct GatewayConfig {
    pub project_id: String,
    pub api_key: String,
    pub topic_name: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &"<redacted>")
            .field("topic_name", &self.topic_name)
            .field("port", &self.port)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            project_id: require_var("PROJECT_ID", lookup("PROJECT_ID"))?,
            api_key: require_var("API_KEY", lookup("API_KEY"))?,
            topic_name: require_var("TOPIC_NAME", lookup("TOPIC_NAME"))?,
            port: parse_or(lookup("PORT"), 8080u16),
            max_body_bytes: parse_or(lookup("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn loads_required_values_with_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("PROJECT_ID", "demo-project"),
            ("API_KEY", "secret"),
            ("TOPIC_NAME", "events"),
        ]))
        .unwrap();
        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.topic_name, "events");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn optional_values_override_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("PROJECT_ID", "demo-project"),
            ("API_KEY", "secret"),
            ("TOPIC_NAME", "events"),
            ("PORT", "9000"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup(&[
            ("PROJECT_ID", "demo-project"),
            ("API_KEY", ""),
            ("TOPIC_NAME", "events"),
        ]))
        .unwrap_err();
        assert_eq!(err, EnvError::Missing("API_KEY".to_string()));
    }

    #[test]
    fn missing_topic_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup(&[
            ("PROJECT_ID", "demo-project"),
            ("API_KEY", "secret"),
        ]))
        .unwrap_err();
        assert_eq!(err, EnvError::Missing("TOPIC_NAME".to_string()));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("PROJECT_ID", "demo-project"),
            ("API_KEY", "top-secret"),
            ("TOPIC_NAME", "events"),
        ]))
        .unwrap();
        assert!(!format!("{config:?}").contains("top-secret"));
    }
}
