use crate::core::router::CompletionRouter;
use crate::domain::model::CompletionReply;
use crate::domain::ports::{ConfigProvider, KnowledgeSource};
use crate::utils::error::Result;

/// 知識庫讀不到時替代的固定文字
pub const KNOWLEDGE_PLACEHOLDER: &str = "База знаний временно недоступна.";

/// 把知識庫和模型路由接在一起的問答入口
pub struct Assistant<C: ConfigProvider, K: KnowledgeSource> {
    router: CompletionRouter<C>,
    knowledge: K,
}

impl<C: ConfigProvider, K: KnowledgeSource> Assistant<C, K> {
    pub fn new(config: C, knowledge: K) -> Self {
        Self {
            router: CompletionRouter::new(config),
            knowledge,
        }
    }

    pub async fn answer(&self, question: &str) -> Result<CompletionReply> {
        // 知識庫缺席不致命，換成固定占位文字
        let context = match self.knowledge.load() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Knowledge base unavailable: {}", e);
                KNOWLEDGE_PLACEHOLDER.to_string()
            }
        };

        self.router.ask(question, &context).await
    }
}
