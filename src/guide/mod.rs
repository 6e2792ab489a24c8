use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

pub mod store;

pub const MANUAL_COUNSELOR: &str = "수동 추가";
pub const MANUAL_SOURCE: &str = "수동 입력";
pub const UNKNOWN_SOURCE: &str = "출처 없음";
pub const EMPTY_CUSTOM_CAUSE: &str = "기타 (내용 없음)";

// Namespace for ids derived from records written before guides carried an id.
const LEGACY_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_3f5e_2b7a_4d0e_9a51_84c2_d7e9_0b13);

/// A curated question/answer entry in the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(default)]
    pub id: Uuid,
    pub prompt: String,
    pub response: String,
    pub cause: Cause,
    #[serde(default)]
    pub attachment_path: Option<PathBuf>,
    #[serde(default)]
    pub counselor_name: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub original_source: String,
}

impl Guide {
    /// Assigns the stable legacy id when the record was stored without one.
    /// `position` is the record's index in the file, so duplicated legacy
    /// records still get distinct ids. Any write persists the ids, and the
    /// positions cannot shift before one.
    pub(crate) fn ensure_id(&mut self, position: usize) {
        if self.id.is_nil() {
            let key = format!("{position}\u{1f}{}\u{1f}{}", self.created_at, self.prompt);
            self.id = Uuid::new_v5(&LEGACY_ID_NAMESPACE, key.as_bytes());
        }
    }

    /// Case-insensitive substring match over prompt, response and cause.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        format!("{} {} {}", self.prompt, self.response, self.cause)
            .to_lowercase()
            .contains(&term)
    }
}

pub fn search<'a>(guides: &'a [Guide], term: &str) -> Vec<&'a Guide> {
    guides.iter().filter(|guide| guide.matches(term)).collect()
}

/// Why a guide entry was needed. Persisted as its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cause {
    SimpleInquiry,
    HowToUse,
    BugReport,
    AccountAccess,
    PolicyInquiry,
    Suggestion,
    Misc,
    Other(String),
}

impl Cause {
    pub const PRESETS: [Cause; 7] = [
        Cause::SimpleInquiry,
        Cause::HowToUse,
        Cause::BugReport,
        Cause::AccountAccess,
        Cause::PolicyInquiry,
        Cause::Suggestion,
        Cause::Misc,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::SimpleInquiry => "단순 문의",
            Self::HowToUse => "기능 사용법 문의",
            Self::BugReport => "오류/버그 리포트",
            Self::AccountAccess => "계정/인증 문제",
            Self::PolicyInquiry => "정책/규정 문의",
            Self::Suggestion => "개선 제안",
            Self::Misc => "기타",
            Self::Other(text) => text,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.label() == label)
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }

    pub fn is_preset(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Cause {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Cause> for String {
    fn from(cause: Cause) -> Self {
        match cause {
            Cause::Other(text) => text,
            preset => preset.label().to_string(),
        }
    }
}
