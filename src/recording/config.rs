use serde::Deserialize;

use super::service::INTERNAL_SERVICE_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Service names starting with this are bridge plumbing.
    pub internal_service_prefix: String,
    /// Initial capacity of the log.
    pub capacity_hint: usize,
    /// Emit a `tracing` debug event for every appended entry.
    pub trace_entries: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            internal_service_prefix: INTERNAL_SERVICE_PREFIX.to_string(),
            capacity_hint: 64,
            trace_entries: true,
        }
    }
}

impl RecorderConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RecorderConfig::from_json(r#"{ "trace_entries": false }"#).unwrap();
        assert!(!config.trace_entries);
        assert_eq!(config.internal_service_prefix, "zipline/");
        assert_eq!(config.capacity_hint, 64);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(RecorderConfig::from_json(r#"{ "capacity_hint": "lots" }"#).is_err());
    }
}
