use std::{io::ErrorKind, path::PathBuf};

use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{entities::PantryItem, ports::PantryRepository},
};

/// Pantry collection stored as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonPantryRepository {
    path: PathBuf,
}

impl JsonPantryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "pantry.json".into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl PantryRepository for JsonPantryRepository {
    async fn load(&self) -> Result<Vec<PantryItem>, CoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                error!("Failed to read pantry file {}: {}", self.path.display(), e);
                return Err(CoreError::StorageError(format!(
                    "failed to read pantry file: {}",
                    e
                )));
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            error!("Pantry file {} is not valid: {}", self.path.display(), e);
            CoreError::PantryStoreCorrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, items: Vec<PantryItem>) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(&items).map_err(|e| {
            error!("Failed to serialize pantry: {}", e);
            CoreError::InternalServerError
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create pantry directory: {}", e);
                CoreError::StorageError(format!("failed to create pantry directory: {}", e))
            })?;
        }

        // Write then rename so readers never observe a half-written file.
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, content).await.map_err(|e| {
            error!("Failed to write pantry file {}: {}", temp_path.display(), e);
            CoreError::StorageError(format!("failed to write pantry file: {}", e))
        })?;
        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            error!("Failed to replace pantry file {}: {}", self.path.display(), e);
            CoreError::StorageError(format!("failed to replace pantry file: {}", e))
        })?;

        Ok(())
    }
}
