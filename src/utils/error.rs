use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Model '{model}' failed: {message}")]
    CompletionFailed { model: String, message: String },

    #[error("All {attempts} model candidates failed, last error: {last_error}")]
    AllModelsExhausted { attempts: usize, last_error: String },

    #[error("No model candidates configured")]
    NoModelConfigured,

    #[error("Document rendering failed: {message}")]
    DocumentError { message: String },

    #[error("Lead store request failed: {message}")]
    LeadStoreError { message: String },
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GuardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuardError::ConfigError { .. }
            | GuardError::InvalidConfigValueError { .. }
            | GuardError::MissingConfigError { .. }
            | GuardError::NoModelConfigured => ErrorCategory::Configuration,
            GuardError::ApiError(_)
            | GuardError::CompletionFailed { .. }
            | GuardError::AllModelsExhausted { .. }
            | GuardError::LeadStoreError { .. } => ErrorCategory::Transport,
            GuardError::DocumentError { .. } | GuardError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            GuardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 缺少憑證只降級功能，不中斷流程
            GuardError::MissingConfigError { .. } | GuardError::NoModelConfigured => {
                ErrorSeverity::Low
            }
            GuardError::ApiError(_)
            | GuardError::CompletionFailed { .. }
            | GuardError::AllModelsExhausted { .. }
            | GuardError::LeadStoreError { .. } => ErrorSeverity::Medium,
            GuardError::ConfigError { .. }
            | GuardError::InvalidConfigValueError { .. }
            | GuardError::DocumentError { .. }
            | GuardError::SerializationError(_) => ErrorSeverity::High,
            GuardError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 轉成給最終用戶看的訊息（俄語介面）
    pub fn user_friendly_message(&self) -> String {
        match self {
            GuardError::MissingConfigError { field } => {
                format!("⚠️ Функция недоступна: не настроен параметр '{}'.", field)
            }
            GuardError::NoModelConfigured => {
                "⚠️ Ошибка: список моделей пуст, проверьте настройки ai_service.".to_string()
            }
            GuardError::AllModelsExhausted { last_error, .. } => {
                format!("Сервис недоступен, последняя ошибка: {}", last_error)
            }
            GuardError::CompletionFailed { .. } | GuardError::ApiError(_) => {
                format!("Ошибка AI: {}", self)
            }
            GuardError::LeadStoreError { message } => {
                format!("Не удалось отправить заявку: {}", message)
            }
            GuardError::DocumentError { message } => {
                format!("Не удалось сформировать документ: {}", message)
            }
            GuardError::ConfigError { .. }
            | GuardError::InvalidConfigValueError { .. }
            | GuardError::SerializationError(_)
            | GuardError::IoError(_) => format!("Ошибка: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Проверьте sellerguard.toml и переменные окружения с ключами".to_string()
            }
            ErrorCategory::Transport => {
                "Проверьте сеть, ключ API и лимиты выбранных моделей".to_string()
            }
            ErrorCategory::Processing => "Проверьте введённые данные формы".to_string(),
            ErrorCategory::System => "Проверьте права доступа к файлам и диску".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_never_fatal() {
        let err = GuardError::MissingConfigError {
            field: "lead_store".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("lead_store"));
    }

    #[test]
    fn test_exhausted_error_keeps_last_cause() {
        let err = GuardError::AllModelsExhausted {
            attempts: 3,
            last_error: "HTTP 429: rate limited".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert!(err.to_string().contains("HTTP 429: rate limited"));
        assert!(err
            .user_friendly_message()
            .contains("последняя ошибка: HTTP 429"));
    }
}
