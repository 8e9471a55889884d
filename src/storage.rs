use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io;
use std::thread::{self, ThreadId};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::warn;

use crate::error::{Result, ToolboxError};
use crate::output::OutputSink;
use crate::strings::pretty_type_name;

/// Heterogeneous key-value storage shared by a process.
///
/// Values of any `'static + Send` type are stored under string keys and
/// checked against the requested type on every lookup. Storage is split into
/// two partitions chosen by [`Flags`]:
///
/// * [`Flags::UnifiedStorage`]: one map shared by every thread. A single
///   mutex serialises access, so get-or-create is race free.
/// * [`Flags::PerThread`]: one map per thread id. Threads never see each
///   other's values.
///
/// # Examples
///
/// ```
/// # use sxs_toolbox::storage::GlobalStorage;
/// let storage = GlobalStorage::new();
/// assert!(!storage.has_key("x"));
///
/// storage.store("x", 5i32);
/// assert_eq!(storage.get::<i32>("x").unwrap(), 5);
/// assert!(storage.get::<f64>("x").is_err());
///
/// *storage.get_or_default::<u32>("hits").unwrap() += 1;
/// assert_eq!(storage.get::<u32>("hits").unwrap(), 1);
/// ```
pub struct GlobalStorage {
    inner: Mutex<Partitions>,
}

/// Selects which storage partition an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flags {
    PerThread,
    UnifiedStorage,
}

pub const DEFAULT_STORAGE_FLAG: Flags = Flags::UnifiedStorage;

impl Flags {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Flags::PerThread => "per_thread",
            Flags::UnifiedStorage => "unified_storage",
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Entry {
    value: Box<dyn Any + Send>,
    type_name: String,
}

impl Entry {
    fn new<T: Any + Send>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: pretty_type_name::<T>(),
        }
    }
}

type Partition = BTreeMap<String, Entry>;

#[derive(Default)]
struct Partitions {
    unified: Partition,
    per_thread: HashMap<ThreadId, Partition>,
}

impl Partitions {
    fn partition(&self, flag: Flags, thread: ThreadId) -> Option<&Partition> {
        match flag {
            Flags::UnifiedStorage => Some(&self.unified),
            Flags::PerThread => self.per_thread.get(&thread),
        }
    }

    fn existing_mut(&mut self, flag: Flags, thread: ThreadId) -> Option<&mut Partition> {
        match flag {
            Flags::UnifiedStorage => Some(&mut self.unified),
            Flags::PerThread => self.per_thread.get_mut(&thread),
        }
    }

    fn partition_mut(&mut self, flag: Flags, thread: ThreadId) -> &mut Partition {
        match flag {
            Flags::UnifiedStorage => &mut self.unified,
            Flags::PerThread => self.per_thread.entry(thread).or_default(),
        }
    }

    fn clear_all(&mut self) {
        self.unified.clear();
        self.per_thread.clear();
    }

    /// Explains why `key` could not be read as `T`.
    fn lookup_error<T: Any>(&self, flag: Flags, thread: ThreadId, key: &str) -> ToolboxError {
        match self.partition(flag, thread).and_then(|p| p.get(key)) {
            Some(entry) => ToolboxError::TypeMismatch {
                key: key.to_string(),
                expected: pretty_type_name::<T>(),
                found: entry.type_name.clone(),
            },
            None => {
                let stored: Vec<&str> = self
                    .partition(flag, thread)
                    .map(|p| p.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                warn!(key, flag = %flag, stored = ?stored, "global storage key does not exist");
                ToolboxError::KeyNotFound {
                    key: key.to_string(),
                }
            }
        }
    }
}

impl GlobalStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Partitions::default()),
        }
    }

    /// A view of one partition.
    pub fn partition(&self, flag: Flags) -> StoragePartition<'_> {
        StoragePartition {
            storage: self,
            flag,
        }
    }

    fn default_partition(&self) -> StoragePartition<'_> {
        self.partition(DEFAULT_STORAGE_FLAG)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.default_partition().has_key(key)
    }

    pub fn get<T: Any + Clone>(&self, key: &str) -> Result<T> {
        self.default_partition().get(key)
    }

    pub fn get_mut<T: Any>(&self, key: &str) -> Result<MappedMutexGuard<'_, T>> {
        self.default_partition().get_mut(key)
    }

    pub fn store<T: Any + Send>(&self, key: impl Into<String>, value: T) {
        self.default_partition().store(key, value)
    }

    pub fn initialise_if_not_exists<T, F>(&self, key: &str, init: F)
    where
        T: Any + Send,
        F: FnOnce() -> T,
    {
        self.default_partition().initialise_if_not_exists(key, init)
    }

    pub fn get_or_initialise<T, F>(&self, key: &str, init: F) -> Result<MappedMutexGuard<'_, T>>
    where
        T: Any + Send,
        F: FnOnce() -> T,
    {
        self.default_partition().get_or_initialise(key, init)
    }

    pub fn get_or_default<T: Any + Send + Default>(
        &self,
        key: &str,
    ) -> Result<MappedMutexGuard<'_, T>> {
        self.default_partition().get_or_initialise(key, T::default)
    }

    pub fn keys(&self) -> Vec<String> {
        self.default_partition().keys()
    }

    pub fn clear(&self) {
        self.default_partition().clear()
    }

    /// Empties the unified partition and every thread's partition at once.
    pub fn clear_all(&self) {
        self.inner.lock().clear_all();
    }

    pub fn print_stored_info(&self, sink: &OutputSink) -> io::Result<()> {
        self.default_partition().print_stored_info(sink)
    }
}

impl Default for GlobalStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Operations on one partition of a [`GlobalStorage`].
///
/// Every call takes the storage lock for its whole duration; guards returned
/// by `get_mut` and `get_or_initialise` hold it until dropped.
#[derive(Clone, Copy)]
pub struct StoragePartition<'a> {
    storage: &'a GlobalStorage,
    flag: Flags,
}

impl<'a> StoragePartition<'a> {
    pub fn flag(&self) -> Flags {
        self.flag
    }

    pub fn has_key(&self, key: &str) -> bool {
        let parts = self.storage.inner.lock();
        parts
            .partition(self.flag, thread::current().id())
            .is_some_and(|p| p.contains_key(key))
    }

    /// A copy of the value stored under `key`.
    pub fn get<T: Any + Clone>(&self, key: &str) -> Result<T> {
        let thread = thread::current().id();
        let parts = self.storage.inner.lock();
        parts
            .partition(self.flag, thread)
            .and_then(|p| p.get(key))
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
            .ok_or_else(|| parts.lookup_error::<T>(self.flag, thread, key))
    }

    /// Mutable access to the value under `key`, holding the storage lock.
    pub fn get_mut<T: Any>(&self, key: &str) -> Result<MappedMutexGuard<'a, T>> {
        let flag = self.flag;
        let thread = thread::current().id();
        let guard = self.storage.inner.lock();
        MutexGuard::try_map(guard, |parts| {
            parts
                .existing_mut(flag, thread)
                .and_then(|p| p.get_mut(key))
                .and_then(|entry| entry.value.downcast_mut::<T>())
        })
        .map_err(|guard| guard.lookup_error::<T>(flag, thread, key))
    }

    /// Stores `value` under `key`, replacing any previous value of any type.
    pub fn store<T: Any + Send>(&self, key: impl Into<String>, value: T) {
        let thread = thread::current().id();
        self.storage
            .inner
            .lock()
            .partition_mut(self.flag, thread)
            .insert(key.into(), Entry::new(value));
    }

    /// Stores `init()` under `key` unless the key exists. Like
    /// [`get_or_initialise`](StoragePartition::get_or_initialise), `init`
    /// runs under the storage lock.
    pub fn initialise_if_not_exists<T, F>(&self, key: &str, init: F)
    where
        T: Any + Send,
        F: FnOnce() -> T,
    {
        let thread = thread::current().id();
        self.storage
            .inner
            .lock()
            .partition_mut(self.flag, thread)
            .entry(key.to_string())
            .or_insert_with(|| Entry::new(init()));
    }

    /// Returns the value under `key`, creating it with `init` when absent.
    ///
    /// Check and insert happen under one lock, so concurrent callers agree
    /// on a single value. An existing value of another type is an error.
    ///
    /// `init` runs with the storage lock held. It must not touch this
    /// storage, or the calling thread deadlocks.
    pub fn get_or_initialise<T, F>(&self, key: &str, init: F) -> Result<MappedMutexGuard<'a, T>>
    where
        T: Any + Send,
        F: FnOnce() -> T,
    {
        let flag = self.flag;
        let thread = thread::current().id();
        let guard = self.storage.inner.lock();
        MutexGuard::try_map(guard, |parts| {
            parts
                .partition_mut(flag, thread)
                .entry(key.to_string())
                .or_insert_with(|| Entry::new(init()))
                .value
                .downcast_mut::<T>()
        })
        .map_err(|guard| guard.lookup_error::<T>(flag, thread, key))
    }

    pub fn keys(&self) -> Vec<String> {
        let parts = self.storage.inner.lock();
        parts
            .partition(self.flag, thread::current().id())
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    fn thread_maps(&self) -> usize {
        self.storage.inner.lock().per_thread.len()
    }

    /// Removes every value in this partition. For [`Flags::PerThread`] that
    /// is the calling thread's map only.
    pub fn clear(&self) {
        let thread = thread::current().id();
        let mut parts = self.storage.inner.lock();
        match self.flag {
            Flags::UnifiedStorage => parts.unified.clear(),
            Flags::PerThread => {
                parts.per_thread.remove(&thread);
            }
        }
    }

    /// Prints each key with the name of its stored type.
    pub fn print_stored_info(&self, sink: &OutputSink) -> io::Result<()> {
        let lines: Vec<String> = {
            let parts = self.storage.inner.lock();
            parts
                .partition(self.flag, thread::current().id())
                .map(|p| {
                    p.iter()
                        .map(|(key, entry)| format!("{}: [type] = {}", key, entry.type_name))
                        .collect()
                })
                .unwrap_or_default()
        };
        sink.write_line(&format!(
            "========== Static Storage (flag={}) ==========",
            self.flag
        ))?;
        for line in lines {
            sink.write_line(&line)?;
        }
        sink.write_line("====================================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_are_recorded() {
        let storage = GlobalStorage::new();
        storage.store("v", vec![1u8, 2, 3]);
        let sink = OutputSink::buffer();
        storage.print_stored_info(&sink).unwrap();
        assert!(sink.contents().contains("v: [type] = Vec<u8>"));
    }

    #[test]
    fn test_failed_lookup_creates_no_thread_map() {
        let storage = GlobalStorage::new();
        let local = storage.partition(Flags::PerThread);
        assert!(local.get_mut::<i32>("missing").is_err());
        assert_eq!(local.thread_maps(), 0, "A failed lookup should not allocate a map");

        local.store("x", 1i32);
        assert!(local.get_mut::<f64>("x").is_err());
        assert_eq!(local.thread_maps(), 1);
    }

    #[test]
    fn test_mismatch_reports_both_types() {
        let storage = GlobalStorage::new();
        storage.store("x", 5i32);
        match storage.get::<f64>("x") {
            Err(ToolboxError::TypeMismatch { expected, found, .. }) => {
                assert_eq!(expected, "f64");
                assert_eq!(found, "i32");
            }
            other => panic!("expected a type mismatch, got {:?}", other),
        }
    }
}
