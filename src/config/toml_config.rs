use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GuardError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
// 沒設定超時也要有上限，fallback 鏈才保證會終止
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    pub ai_service: AiServiceConfig,
    pub knowledge: Option<KnowledgeConfig>,
    pub lead_store: Option<LeadStoreConfig>,
    pub admin: Option<AdminConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiServiceConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    /// 候選模型，依偏好排序；路由器照這個順序做 fallback
    pub models: Vec<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_delay_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadStoreConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl GuardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENROUTER_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("ai_service.base_url", self.api_base_url())?;
        validation::validate_non_empty_string("ai_service.api_key", &self.ai_service.api_key)?;

        for (index, model) in self.ai_service.models.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("ai_service.models[{}]", index),
                model,
            )?;
        }

        if let Some(timeout) = self.ai_service.timeout_seconds {
            validation::validate_positive_number("ai_service.timeout_seconds", timeout, 1)?;
        }

        if let Some(lead_store) = &self.lead_store {
            validation::validate_url("lead_store.url", &lead_store.url)?;
            validation::validate_non_empty_string("lead_store.key", &lead_store.key)?;
        }

        validation::validate_path("output.path", self.output_path())?;

        Ok(())
    }
}

impl ConfigProvider for GuardConfig {
    fn api_base_url(&self) -> &str {
        self.ai_service.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn api_key(&self) -> &str {
        &self.ai_service.api_key
    }

    fn model_candidates(&self) -> &[String] {
        &self.ai_service.models
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.ai_service
            .timeout_seconds
            .or(Some(DEFAULT_TIMEOUT_SECONDS))
    }

    fn retry_delay_seconds(&self) -> Option<u64> {
        self.ai_service.retry_delay_seconds
    }

    fn knowledge_path(&self) -> &str {
        self.knowledge
            .as_ref()
            .map(|k| k.path.as_str())
            .unwrap_or(DEFAULT_KNOWLEDGE_PATH)
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.path.as_str())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn lead_store(&self) -> Option<(&str, &str)> {
        self.lead_store
            .as_ref()
            .map(|l| (l.url.as_str(), l.key.as_str()))
    }

    fn admin_password(&self) -> Option<&str> {
        self.admin.as_ref().map(|a| a.password.as_str())
    }
}

impl Validate for GuardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
