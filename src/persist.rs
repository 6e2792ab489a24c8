use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(StoreError::io(path, err)),
    };

    serde_json::from_slice(&data).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `value` next to `path` and renames it into place.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|err| StoreError::io(dir, err))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, bytes).map_err(|err| StoreError::io(&tmp_path, err))?;
    match fs::rename(&tmp_path, path) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            // Some platforms refuse to rename over an existing file.
            if path.exists() {
                fs::remove_file(path).map_err(|err| StoreError::io(path, err))?;
                fs::rename(&tmp_path, path).map_err(|err| StoreError::io(path, err))
            } else {
                Err(StoreError::io(path, rename_err))
            }
        }
    }
}
