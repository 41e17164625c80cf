use crate::domain::model::{ChatMessage, CompletionReply};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GuardError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 固定的 system 指令，只插入知識庫內容
pub fn system_prompt(context: &str) -> String {
    format!(
        "Ты юрист SellerGuard. Контекст: {}. Отвечай кратко и по делу.",
        context
    )
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// 依偏好順序嘗試候選模型，回傳第一個成功的回答
pub struct CompletionRouter<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> CompletionRouter<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// 用配置裡的候選清單回答問題
    pub async fn ask(&self, question: &str, context: &str) -> Result<CompletionReply> {
        self.complete(question, context, self.config.model_candidates())
            .await
    }

    /// 逐一嘗試 candidates，第一個合法回應就立刻返回；
    /// 全部失敗時只保留最後一個錯誤
    pub async fn complete(
        &self,
        question: &str,
        context: &str,
        candidates: &[String],
    ) -> Result<CompletionReply> {
        if candidates.is_empty() {
            return Err(GuardError::NoModelConfigured);
        }

        let messages = vec![
            ChatMessage::system(system_prompt(context)),
            ChatMessage::user(question),
        ];

        let mut last_error: Option<GuardError> = None;

        for (attempt, model) in candidates.iter().enumerate() {
            if attempt > 0 {
                if let Some(delay) = self.config.retry_delay_seconds() {
                    if delay > 0 {
                        tokio::time::sleep(Duration::from_secs(delay)).await;
                    }
                }
            }

            tracing::debug!(
                "Trying model {} ({}/{})",
                model,
                attempt + 1,
                candidates.len()
            );

            match self.request_model(model, &messages).await {
                Ok(text) => {
                    tracing::info!("✅ Model {} answered", model);
                    return Ok(CompletionReply {
                        text,
                        model: model.clone(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Model {} failed: {}", model, e);
                    last_error = Some(e);
                }
            }
        }

        Err(GuardError::AllModelsExhausted {
            attempts: candidates.len(),
            last_error: last_error.map(|e| e.to_string()).unwrap_or_default(),
        })
    }

    /// 對單一模型發一次 chat/completions 請求
    async fn request_model(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.api_base_url());

        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&ChatRequest { model, messages });

        if let Some(timeout) = self.config.request_timeout_seconds() {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await.map_err(|e| GuardError::CompletionFailed {
            model: model.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GuardError::CompletionFailed {
                model: model.to_string(),
                message: format!("HTTP {}: {}", status.as_u16(), body),
            });
        }

        let reply: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| GuardError::CompletionFailed {
                    model: model.to_string(),
                    message: format!("Malformed response: {}", e),
                })?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GuardError::CompletionFailed {
                model: model.to_string(),
                message: "Response contained no choices".to_string(),
            })
    }
}
