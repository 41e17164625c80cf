use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// 一條對話訊息，結構與 chat/completions 的 wire 格式一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// 對話歷史：呼叫端持有的 append-only 序列，核心不保存任何 session 狀態
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    turns: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.turns.push(message);
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// 第一個成功回答的模型與其文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReply {
    pub text: String,
    pub model: String,
}

/// 投訴書表單欄位，只活在單次渲染呼叫內
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub seller: String,
    pub inn: String,
    pub act: String,
    pub money: i64,
    pub problem: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub contact: String,
    pub problem_type: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Lead {
    pub fn new(contact: impl Into<String>, problem_type: impl Into<String>, amount: i64) -> Self {
        Self {
            contact: contact.into(),
            problem_type: problem_type.into(),
            amount,
            id: None,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_roles_serialize_lowercase() {
        let msg = ChatMessage::system("context");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "context");

        let msg = ChatMessage::user("question");
        assert_eq!(serde_json::to_value(&msg).unwrap()["role"], "user");
    }

    #[test]
    fn test_chat_history_preserves_order() {
        let mut history = ChatHistory::new();
        history.push(ChatMessage::user("q1"));
        history.push(ChatMessage::assistant("a1"));
        history.push(ChatMessage::user("q2"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.turns()[0].content, "q1");
        assert_eq!(history.turns()[1].role, Role::Assistant);
        assert_eq!(history.turns()[2].content, "q2");
    }

    #[test]
    fn test_new_lead_serializes_without_server_fields() {
        let lead = Lead::new("@ivan", "Потеря товара", 5000);
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contact": "@ivan", "problem_type": "Потеря товара", "amount": 5000})
        );
    }
}
