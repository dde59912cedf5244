use thiserror::Error;

/// Failure to build a [`WorldConfig`](super::config::WorldConfig).
///
/// The simulation itself has no error paths: out-of-range reads return air,
/// out-of-range writes are dropped. Only configuration loading can fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::Invalid { field, reason }
    }
}
