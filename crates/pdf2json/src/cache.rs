//! Bounded binary buffer cache.
//!
//! Caches raw file bytes keyed by `(absolute path, mtime millis)` so that
//! repeated parses of an unchanged file skip the read, and a touched file is
//! re-read. The cache is a cloneable handle, shared explicitly between
//! parser instances rather than living in a module global; it also hands out
//! the per-instance parser ids used for eviction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::UNIX_EPOCH;

use tracing::debug;

/// Default bound on cached buffers.
pub const DEFAULT_MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    path: PathBuf,
    mtime_ms: u128,
}

#[derive(Debug)]
struct CacheEntry {
    key: CacheKey,
    bytes: Arc<[u8]>,
}

#[derive(Debug)]
struct CacheInner {
    slots: Vec<CacheEntry>,
    max_entries: usize,
    next_parser_id: usize,
}

/// Shared handle to the buffer cache.
///
/// Cloning shares the underlying table. Cached byte buffers are immutable
/// after insertion, so two parsers hitting the same key observe identical
/// bytes; an evicted entry is simply re-read on the next miss.
#[derive(Debug, Clone)]
pub struct BufferCache {
    inner: Arc<Mutex<CacheInner>>,
}

impl Default for BufferCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl BufferCache {
    /// Create a cache bounded to `max_entries` buffers.
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner {
                slots: Vec::new(),
                max_entries: max_entries.max(1),
                next_parser_id: 0,
            })),
        }
    }

    /// Allocate the next parser instance id. Ids are monotonic and never
    /// reused within a cache's lifetime.
    pub fn allocate_parser_id(&self) -> usize {
        let mut inner = self.lock();
        let id = inner.next_parser_id;
        inner.next_parser_id += 1;
        id
    }

    /// Fetch the file's bytes, reading from disk only when the
    /// `(path, mtime)` key is absent.
    ///
    /// On a miss the bytes are stored; if the table is full, the entry at
    /// slot `parser_id % max_entries` is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized, stat'ed, or
    /// read.
    pub fn get_or_load(&self, parser_id: usize, path: &Path) -> io::Result<Arc<[u8]>> {
        let abs = fs::canonicalize(path)?;
        let mtime_ms = mtime_millis(&abs)?;
        let key = CacheKey {
            path: abs,
            mtime_ms,
        };

        let mut inner = self.lock();
        if let Some(entry) = inner.slots.iter().find(|e| e.key == key) {
            debug!(path = %key.path.display(), "buffer cache hit");
            return Ok(Arc::clone(&entry.bytes));
        }

        let bytes: Arc<[u8]> = fs::read(&key.path)?.into();
        debug!(
            path = %key.path.display(),
            len = bytes.len(),
            "buffer cache miss, file read"
        );

        let entry = CacheEntry {
            key,
            bytes: Arc::clone(&bytes),
        };
        if inner.slots.len() < inner.max_entries {
            inner.slots.push(entry);
        } else {
            let slot = parser_id % inner.max_entries;
            inner.slots[slot] = entry;
        }
        Ok(bytes)
    }

    /// Number of buffers currently held.
    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached buffer. Outstanding `Arc` handles stay valid.
    pub fn clear(&self) {
        self.lock().slots.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // A poisoned lock means another thread panicked mid-insert; the
        // table itself is still structurally sound.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn mtime_millis(path: &Path) -> io::Result<u128> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0))
}
