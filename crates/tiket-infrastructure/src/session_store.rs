//! File-backed session persistence.
//!
//! The bearer token and the user record persist together as one JSON file
//! under the config directory. Loading never fails: a missing or
//! unreadable file reads as "not logged in".

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tiket_core::error::Result;
use tiket_core::session::{AuthSession, SessionStore};

use crate::paths::TiketPaths;

/// Session store backed by `auth.json`.
///
/// Writes are atomic (temp file + rename) and guarded by an advisory file
/// lock so concurrent invocations cannot interleave a save and a clear.
/// The file is created with 600 permissions on Unix since it holds a
/// bearer token.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default path (`~/.config/tiket/auth.json`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: TiketPaths::session_file()?,
        })
    }

    /// Creates a store with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "auth.json".to_string());
        let tmp_path = self
            .path
            .parent()
            .map(|parent| parent.join(format!(".{file_name}.tmp")))
            .unwrap_or_else(|| self.path.with_extension("tmp"));

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn acquire_lock(&self) -> Result<FileLock> {
        FileLock::acquire(&self.path)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<AuthSession> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "discarding unreadable session file");
                None
            }
        }
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        let _lock = self.acquire_lock()?;
        let content = serde_json::to_string_pretty(session)?;
        self.write_atomic(&content)
    }

    fn clear(&self) -> Result<()> {
        let _lock = self.acquire_lock()?;
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself is left in place: unlinking it would let a new
/// locker open a fresh inode while a waiter still blocks on the old one,
/// so the two would no longer exclude each other.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|err| tiket_core::TiketError::io(format!("Failed to acquire lock: {err}")))?;
        }

        // Unlock happens when the handle closes on drop
        Ok(FileLock { file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tiket_core::user::{Role, User};

    fn sample_session() -> AuthSession {
        AuthSession {
            token: "tok-abc".to_string(),
            user: User {
                id: 1,
                username: "admin".to_string(),
                name: "Administrator".to_string(),
                role: Role::Admin,
                created_at: "2024-01-01T00:00:00Z".to_string(),
                updated_at: "2024-01-01T00:00:00Z".to_string(),
            },
        }
    }

    #[test]
    fn test_save_load_clear_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("auth.json"));

        assert!(store.load().is_none());

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok-abc");
        assert_eq!(loaded.user.username, "admin");

        // Token and user clear together
        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_load_never_fails_on_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("auth.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileSessionStore::with_path(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("auth.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_lock_file_is_kept_across_operations() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("auth.json"));

        store.save(&sample_session()).unwrap();
        let lock_path = temp_dir.path().join("auth.lock");
        assert!(lock_path.exists());

        // Relocking the same file must keep working
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        assert!(lock_path.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("auth.json"));
        store.save(&sample_session()).unwrap();

        assert!(!temp_dir.path().join(".auth.json.tmp").exists());
        assert!(temp_dir.path().join("auth.json").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_permissions_are_restricted() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("auth.json"));
        store.save(&sample_session()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
