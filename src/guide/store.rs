use crate::error::StoreError;
use crate::guide::Guide;
use crate::persist::{read_json, write_json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// The whole knowledge base lives in one JSON array; every mutation rewrites it.
#[derive(Debug, Clone)]
pub struct GuideStore {
    path: PathBuf,
    attachment_dir: PathBuf,
}

impl GuideStore {
    pub fn open(
        path: impl Into<PathBuf>,
        attachment_dir: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let attachment_dir = attachment_dir.into();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|err| StoreError::io(dir, err))?;
        }
        fs::create_dir_all(&attachment_dir).map_err(|err| StoreError::io(&attachment_dir, err))?;
        Ok(Self {
            path,
            attachment_dir,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in file order. A missing file is an empty knowledge base;
    /// a corrupt one is an error so it is never overwritten by accident.
    fn load(&self) -> Result<Vec<Guide>, StoreError> {
        let mut guides: Vec<Guide> = match read_json(&self.path) {
            Ok(guides) => guides,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err),
        };
        for (position, guide) in guides.iter_mut().enumerate() {
            guide.ensure_id(position);
        }
        Ok(guides)
    }

    fn save(&self, guides: &[Guide]) -> Result<(), StoreError> {
        write_json(&self.path, &guides)
    }

    /// Newest first by `created_at`.
    pub fn list_guides(&self) -> Result<Vec<Guide>, StoreError> {
        let mut guides = self.load()?;
        guides.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(guides)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Guide>, StoreError> {
        Ok(self.load()?.into_iter().find(|guide| guide.id == id))
    }

    pub fn append(&self, mut guide: Guide) -> Result<Guide, StoreError> {
        let mut guides = self.load()?;
        guide.ensure_id(guides.len());
        guides.push(guide.clone());
        self.save(&guides)?;
        info!(guide = %guide.id, cause = %guide.cause, "appended guide");
        Ok(guide)
    }

    pub fn update(
        &self,
        id: Uuid,
        mutate: impl FnOnce(&mut Guide),
    ) -> Result<Guide, StoreError> {
        let mut guides = self.load()?;
        let guide = guides
            .iter_mut()
            .find(|guide| guide.id == id)
            .ok_or(StoreError::GuideMissing(id))?;
        mutate(guide);
        let updated = guide.clone();
        self.save(&guides)?;
        info!(guide = %id, "updated guide");
        Ok(updated)
    }

    /// Returns whether a record was removed. Unknown ids leave the file untouched.
    pub fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut guides = self.load()?;
        let before = guides.len();
        guides.retain(|guide| guide.id != id);
        if guides.len() == before {
            warn!(guide = %id, "delete requested for unknown guide");
            return Ok(false);
        }
        self.save(&guides)?;
        info!(guide = %id, "deleted guide");
        Ok(true)
    }

    /// Stores an uploaded file under its base name. An existing attachment
    /// with the same name is replaced.
    pub fn store_attachment(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let name = Path::new(file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StoreError::InvalidAttachmentName(file_name.to_string()))?;

        let target = self.attachment_dir.join(name);
        if target.exists() {
            warn!(path = %target.display(), "overwriting existing attachment");
        }
        fs::write(&target, bytes).map_err(|err| StoreError::io(&target, err))?;
        Ok(target)
    }

    /// Copies an attachment into `dir`, keeping its file name.
    pub fn export_attachment(&self, attachment: &Path, dir: &Path) -> Result<PathBuf, StoreError> {
        let name = attachment
            .file_name()
            .ok_or_else(|| StoreError::InvalidAttachmentName(attachment.display().to_string()))?;
        fs::create_dir_all(dir).map_err(|err| StoreError::io(dir, err))?;
        let target = dir.join(name);
        fs::copy(attachment, &target).map_err(|err| StoreError::io(attachment, err))?;
        info!(from = %attachment.display(), to = %target.display(), "exported attachment");
        Ok(target)
    }
}
