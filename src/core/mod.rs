pub mod assembler;
pub mod assistant;
pub mod router;

pub use crate::domain::model::{ChatHistory, ChatMessage, Complaint, CompletionReply, Lead, Role};
pub use crate::domain::ports::{ConfigProvider, KnowledgeSource, LeadStore, Storage};
pub use crate::utils::error::Result;
