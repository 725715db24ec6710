//! Хранилище документов: один JSON-документ под фиксированным ключом.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait Storage {
    /// `Ok(None)` — документа ещё нет; это не ошибка.
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, doc: &str) -> Result<()>;
}

/// Файловое хранилище: `<dir>/<key>.json`, документ пишется целиком.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&self, key: &str, doc: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        // через временный файл, чтобы читатель не увидел полудокумент
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, doc)?;
        fs::rename(tmp, self.path(key))?;
        Ok(())
    }
}

/// Хранилище в памяти — для тестов и примеров.
#[derive(Default)]
pub struct MemoryStorage {
    docs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let docs = self.docs.lock().expect("storage mutex poisoned");
        Ok(docs.get(key).cloned())
    }

    fn save(&self, key: &str, doc: &str) -> Result<()> {
        let mut docs = self.docs.lock().expect("storage mutex poisoned");
        docs.insert(key.to_string(), doc.to_string());
        Ok(())
    }
}
