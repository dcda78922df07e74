//! File-based fallback storage for generated client URLs.
//!
//! Used when the base has no URL column to write to. Best-effort by
//! contract: read paths degrade to an empty map, they never fail a command.

use crate::errors::AppResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub struct UrlStore {
    path: PathBuf,
}

impl UrlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full `client id → url` map; missing or unreadable file → empty.
    pub fn load_all(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        }
    }

    pub fn get(&self, client_id: &str) -> Option<String> {
        self.load_all().get(client_id).cloned()
    }

    /// Upsert one mapping and rewrite the file.
    pub fn save(&self, client_id: &str, url: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let mut urls = self.load_all();
        urls.insert(client_id.to_string(), url.to_string());

        let json = serde_json::to_string_pretty(&urls)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
