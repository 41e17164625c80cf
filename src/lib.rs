pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileKnowledge, LocalStorage, SupabaseLeads};
pub use config::GuardConfig;
pub use crate::core::assistant::{Assistant, KNOWLEDGE_PLACEHOLDER};
pub use crate::core::router::CompletionRouter;
pub use domain::model::{ChatHistory, ChatMessage, Complaint, CompletionReply, Lead, Role};
pub use domain::ports::{ConfigProvider, KnowledgeSource, LeadStore, Storage};
pub use utils::error::{GuardError, Result};
