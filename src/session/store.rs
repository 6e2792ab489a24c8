use crate::error::StoreError;
use crate::persist::{read_json, write_json};
use crate::session::{Session, Turn, DEFAULT_SUMMARY};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FILE_PREFIX: &str = "history";
const FILE_SUFFIX: &str = ".json";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory of `history<YYYYMMDD_HHMMSS>.json` files, one per session.
///
/// Session ids are the file stems, so lexicographic order on ids is
/// chronological order on creation.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| StoreError::io(&dir, err))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn session_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}{FILE_SUFFIX}"))
    }

    /// Session ids, newest first.
    pub fn list_sessions(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|err| StoreError::io(&self.dir, err))?;

        let mut ids: Vec<String> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if !name.starts_with(FILE_PREFIX) {
                    return None;
                }
                name.strip_suffix(FILE_SUFFIX).map(str::to_string)
            })
            .collect();

        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    pub fn load(&self, id: &str) -> Result<Session, StoreError> {
        read_json(&self.session_path(id))
    }

    pub fn save(&self, id: &str, session: &Session) -> Result<(), StoreError> {
        write_json(&self.session_path(id), session)
    }

    pub fn create(&self, counselor_name: &str) -> Result<(String, Session), StoreError> {
        self.create_at(counselor_name, Local::now().naive_local())
    }

    pub fn create_at(
        &self,
        counselor_name: &str,
        now: NaiveDateTime,
    ) -> Result<(String, Session), StoreError> {
        let stamp = now.format(STAMP_FORMAT).to_string();
        let id = self.free_id(&stamp);
        let session = Session {
            title: format!("새 상담 ({stamp})"),
            summary: DEFAULT_SUMMARY.to_string(),
            counselor_name: counselor_name.to_string(),
            start_time: now,
            end_time: None,
            messages: Vec::new(),
        };

        self.save(&id, &session)?;
        info!(session = %id, counselor = counselor_name, "created session");
        Ok((id, session))
    }

    // Sessions opened within the same second get `_001`, `_002`, ... so the
    // ids keep sorting in creation order.
    fn free_id(&self, stamp: &str) -> String {
        let base = format!("{FILE_PREFIX}{stamp}");
        if !self.session_path(&base).exists() {
            return base;
        }
        (1..)
            .map(|n| format!("{base}_{n:03}"))
            .find(|candidate| !self.session_path(candidate).exists())
            .unwrap_or(base)
    }

    /// Loads, mutates and rewrites one session file.
    pub fn modify(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut Session),
    ) -> Result<Session, StoreError> {
        let mut session = self.load(id)?;
        mutate(&mut session);
        self.save(id, &session)?;
        Ok(session)
    }

    /// Appends turns in order within a single rewrite.
    pub fn append_turns(
        &self,
        id: &str,
        turns: impl IntoIterator<Item = Turn>,
    ) -> Result<Session, StoreError> {
        debug!(session = %id, "appending turns");
        self.modify(id, |session| session.messages.extend(turns))
    }

    pub fn rename(&self, id: &str, new_title: &str) -> Result<Session, StoreError> {
        info!(session = %id, title = new_title, "renaming session");
        self.modify(id, |session| session.title = new_title.to_string())
    }

    pub fn update_summary(&self, id: &str, summary: &str) -> Result<Session, StoreError> {
        self.modify(id, |session| session.summary = summary.to_string())
    }

    /// Stamps `end_time` the first time a session is closed; later calls keep it.
    pub fn end(&self, id: &str) -> Result<Session, StoreError> {
        let now = Local::now().naive_local();
        self.modify(id, |session| {
            session.end_time.get_or_insert(now);
        })
    }
}
