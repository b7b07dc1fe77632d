use thiserror::Error;

#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub const CONFIG_HINT: &str =
    "Set API_KEY, API_URL and MASKS in the environment or pass them as flags";

impl PurgeError {
    /// 給操作者的一行處理建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check network connectivity and that API_URL is reachable",
            Self::HttpStatusError { status, .. } if status.as_u16() == 401 => {
                "Check that API_KEY is valid for this account"
            }
            Self::HttpStatusError { .. } => "The alias service rejected the request; retry later",
            Self::IoError(_) => "Check that OUTPUT_PATH is writable",
            Self::SerializationError(_) => "The summary could not be encoded; report this as a bug",
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => CONFIG_HINT,
        }
    }
}

pub type Result<T> = std::result::Result<T, PurgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_point_at_environment() {
        let err = PurgeError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required configuration: api_key");
        assert!(err.recovery_suggestion().contains("MASKS"));

        let err = PurgeError::IoError(std::io::Error::other("disk full"));
        assert!(err.recovery_suggestion().contains("OUTPUT_PATH"));
    }

    #[test]
    fn test_unauthorized_status_points_at_api_key() {
        let err = PurgeError::HttpStatusError {
            status: reqwest::StatusCode::UNAUTHORIZED,
            url: "https://app.example.com/api/v2/aliases".to_string(),
        };
        assert!(err.recovery_suggestion().contains("API_KEY"));
        assert!(err.to_string().contains("401"));
    }
}
