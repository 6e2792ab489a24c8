use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod store;

pub const DEFAULT_SUMMARY: &str = "이곳에 상담 요약을 작성하세요.";

/// One counseling session, persisted as `history<stamp>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub counselor_name: String,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub messages: Vec<Turn>,
}

impl Session {
    /// True for an assistant turn directly answering a user turn.
    pub fn is_promotable(&self, index: usize) -> bool {
        index > 0
            && self.messages.get(index).map(|turn| turn.role) == Some(Role::Assistant)
            && self.messages[index - 1].role == Role::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
}

impl Turn {
    pub fn user(content: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            source: None,
            timestamp: Some(timestamp),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        source: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            source: Some(source.into()),
            timestamp: Some(timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, Session};

    #[test]
    fn legacy_user_turn_without_timestamp_loads() {
        let data = r#"{
  "title": "새 상담 (20240102_030405)",
  "summary": "이곳에 상담 요약을 작성하세요.",
  "counselor_name": "담당자A",
  "start_time": "2024-01-02T03:04:05.123456",
  "end_time": null,
  "messages": [
    { "role": "user", "content": "비밀번호를 잊었어요" },
    {
      "role": "assistant",
      "content": "답변",
      "source": "https://docs.example.com",
      "timestamp": "2024-01-02T03:05:00.000001"
    }
  ]
}"#;
        let session: Session = serde_json::from_str(data).expect("legacy session should parse");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, Role::User);
        assert!(session.messages[0].timestamp.is_none());
        assert!(session.is_promotable(1));
        assert!(!session.is_promotable(0));
    }

    #[test]
    fn rewriting_legacy_turns_adds_no_null_fields() {
        let data = r#"{
  "title": "상담",
  "start_time": "2024-01-02T03:04:05",
  "messages": [{ "role": "user", "content": "질문" }]
}"#;
        let session: Session = serde_json::from_str(data).expect("legacy session should parse");
        let written = serde_json::to_value(&session).expect("session serializes");

        let turn = written["messages"][0]
            .as_object()
            .expect("turn is an object");
        assert!(!turn.contains_key("timestamp"));
        assert!(!turn.contains_key("source"));
    }
}
