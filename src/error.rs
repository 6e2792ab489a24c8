use std::io;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but its contents do not decode.
    #[error("{} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid attachment name: {0:?}")]
    InvalidAttachmentName(String),

    #[error("guide {0} no longer exists")]
    GuideMissing(Uuid),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Why a guide editor could not be saved. Validation failures keep the editor open.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no guide editor is open")]
    NotEditing,

    #[error("원인/분석 분류를 선택해주세요.")]
    CauseRequired,

    #[error("질문과 답변은 필수 입력 항목입니다.")]
    PromptAndResponseRequired,

    #[error("첨부 파일을 읽을 수 없습니다 ({}): {source}", path.display())]
    AttachmentUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::CauseRequired | Self::PromptAndResponseRequired)
    }
}
