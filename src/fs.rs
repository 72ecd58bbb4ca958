//! File system abstraction
//!
//! The deploy engine talks to the filesystem through the `FileSystem`
//! trait so it can be tested against an in-memory mock. The real
//! implementation writes atomically (tempfile + rename) and hashes
//! content with SHA-256.

use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::ShipkitResult;

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content
    fn read_to_string(&self, path: &Path) -> ShipkitResult<String>;

    /// Write file content atomically
    fn write_atomic(&self, path: &Path, content: &str) -> ShipkitResult<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> ShipkitResult<()>;

    /// Mark a file executable (0o755 on unix, no-op elsewhere)
    fn set_executable(&self, path: &Path) -> ShipkitResult<()>;

    /// Compute SHA-256 hash of file content
    fn hash_file(&self, path: &Path) -> ShipkitResult<String>;

    /// Expand a leading ~ to the home directory
    fn expand_home(&self, path: &Path) -> PathBuf;
}

/// Compute the `sha256:`-prefixed hash of a byte string
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Local disk implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn read_to_string(&self, path: &Path) -> ShipkitResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> ShipkitResult<()> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent)?;
        }

        let mut tmp = tempfile::NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ShipkitResult<()> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn set_executable(&self, path: &Path) -> ShipkitResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
        }
        #[cfg(not(unix))]
        {
            let _ = path;
        }
        Ok(())
    }

    fn hash_file(&self, path: &Path) -> ShipkitResult<String> {
        let content = std::fs::read(path)?;
        Ok(hash_content(&content))
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        let p = path.to_string_lossy();
        if let Some(rest) = p.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        } else if p == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
        path.to_path_buf()
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, String>>>,
    pub executable: std::sync::Arc<std::sync::Mutex<std::collections::HashSet<PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.executable.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> ShipkitResult<String> {
        self.get(path).ok_or_else(|| {
            crate::error::ShipkitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            ))
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> ShipkitResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> ShipkitResult<()> {
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> ShipkitResult<()> {
        self.executable.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn hash_file(&self, path: &Path) -> ShipkitResult<String> {
        let content = self.read_to_string(path)?;
        Ok(hash_content(content.as_bytes()))
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        let p = path.to_string_lossy();
        if let Some(rest) = p.strip_prefix("~/") {
            PathBuf::from("/mock/home").join(rest)
        } else if p == "~" {
            PathBuf::from("/mock/home")
        } else {
            path.to_path_buf()
        }
    }
}
