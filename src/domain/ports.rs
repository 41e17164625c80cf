use crate::domain::model::Lead;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 設定的讀取介面：所有憑證與候選模型清單都從這裡取得，不碰全域狀態
pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    /// 候選模型，依偏好排序（最優先在前）
    fn model_candidates(&self) -> &[String];
    fn request_timeout_seconds(&self) -> Option<u64>;
    fn retry_delay_seconds(&self) -> Option<u64>;
    fn knowledge_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn lead_store(&self) -> Option<(&str, &str)>;
    fn admin_password(&self) -> Option<&str>;
}

pub trait KnowledgeSource: Send + Sync {
    fn load(&self) -> Result<String>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn submit(&self, lead: &Lead) -> Result<()>;
    async fn fetch_all(&self) -> Result<Vec<Lead>>;
}
