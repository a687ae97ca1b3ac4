use thiserror::Error;

/// 請求參數驗證失敗的原因，訊息會直接回給呼叫端
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("regionid, from_date, and to_date are required parameters")]
    MissingParameter,

    #[error("Invalid regionid")]
    UnknownRegion,

    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    MalformedDate,

    #[error("Start and end date cannot be the same.")]
    DegenerateRange,

    #[error("End date cannot be before start date.")]
    InvertedRange,

    #[error("Dates cannot be more than 59 days apart.")]
    RangeTooWide,
}

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{provider} responded with status {status}")]
    UpstreamError {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AggregatorError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, AggregatorError::Validation(_))
    }

    /// 回給呼叫端的訊息；上游的原始內容只寫進日誌
    pub fn user_friendly_message(&self) -> String {
        match self {
            AggregatorError::Validation(reason) => reason.to_string(),
            AggregatorError::ApiError(_)
            | AggregatorError::UpstreamError { .. }
            | AggregatorError::SerializationError(_) => {
                "Failed to fetch Carbon Intensity data".to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
