use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{source_name} responded with HTTP {status} for {url}")]
    HttpStatusError {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("Request to {url} still failing after {attempts} attempts: {last_error}")]
    RetryExhaustedError {
        url: String,
        attempts: u32,
        last_error: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程式退出碼：Low 視為成功
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::ApiError(_)
            | StatsError::HttpStatusError { .. }
            | StatsError::RetryExhaustedError { .. } => ErrorCategory::Network,
            StatsError::UrlError(_)
            | StatsError::ConfigError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. }
            | StatsError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            StatsError::SerializationError(_) | StatsError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            StatsError::CsvError(_) | StatsError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 是否值得重試 (網路暫時性錯誤)
    pub fn is_retryable(&self) -> bool {
        match self {
            StatsError::ApiError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            StatsError::HttpStatusError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::ApiError(_) | StatsError::RetryExhaustedError { .. } => {
                "Could not reach the job board API".to_string()
            }
            StatsError::HttpStatusError {
                source_name,
                status,
                ..
            } => format!("{} rejected the request (HTTP {})", source_name, status),
            StatsError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            StatsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            StatsError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "檢查網路連線或稍後重試 (--retry-attempts)",
            ErrorCategory::Configuration => "檢查命令列參數、.env 或 TOML 設定檔",
            ErrorCategory::Data => "API 回應格式可能已變更，請以 --verbose 檢查",
            ErrorCategory::Output => "確認輸出目錄存在且可寫入",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
