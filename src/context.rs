use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;
use tracing::debug;

use crate::counters::Counters;
use crate::dict::MappingDict;
use crate::output::OutputSink;
use crate::storage::GlobalStorage;

/// Process-wide toolbox state, constructed once and passed to whoever needs it.
///
/// Holds the key-value [`GlobalStorage`], the default [`OutputSink`] for
/// reports, named [`MappingDict`]s and one [`Counters`] instance per thread.
/// Dictionaries and counters are created on first use; [`clear`](Context::clear)
/// drops all of them.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use sxs_toolbox::Context;
/// let ctx = Arc::new(Context::new());
/// ctx.dict("visits").increment("home");
/// assert_eq!(ctx.dict("visits").get("home"), Some(1.0));
///
/// ctx.thread_counters().increment("steps").unwrap();
/// let worker = {
///     let ctx = Arc::clone(&ctx);
///     std::thread::spawn(move || ctx.thread_counters().is_empty())
/// };
/// assert!(worker.join().unwrap());
/// ```
pub struct Context {
    storage: GlobalStorage,
    output: OutputSink,
    dicts: Mutex<HashMap<String, Arc<MappingDict>>>,
    thread_counters: Mutex<HashMap<ThreadId, Arc<Counters>>>,
}

impl Context {
    pub fn new() -> Self {
        Self::with_output(OutputSink::stdout())
    }

    pub fn with_output(output: OutputSink) -> Self {
        Self {
            storage: GlobalStorage::new(),
            output,
            dicts: Mutex::new(HashMap::new()),
            thread_counters: Mutex::new(HashMap::new()),
        }
    }

    pub fn storage(&self) -> &GlobalStorage {
        &self.storage
    }

    pub fn output(&self) -> &OutputSink {
        &self.output
    }

    /// The dictionary for `tag`, created on first request.
    pub fn dict(&self, tag: &str) -> Arc<MappingDict> {
        let mut dicts = self.dicts.lock();
        if let Some(dict) = dicts.get(tag) {
            return Arc::clone(dict);
        }
        debug!(tag, "creating mapping dict");
        let dict = Arc::new(MappingDict::new(tag));
        dicts.insert(tag.to_string(), Arc::clone(&dict));
        dict
    }

    /// The calling thread's counters, created on first request.
    pub fn thread_counters(&self) -> Arc<Counters> {
        let id = thread::current().id();
        Arc::clone(
            self.thread_counters
                .lock()
                .entry(id)
                .or_insert_with(|| Arc::new(Counters::new())),
        )
    }

    /// Every thread's counters that exist so far.
    pub fn all_thread_counters(&self) -> Vec<Arc<Counters>> {
        self.thread_counters.lock().values().cloned().collect()
    }

    /// Drops stored values of every partition, dictionaries and counters.
    pub fn clear(&self) {
        self.storage.clear_all();
        self.dicts.lock().clear();
        self.thread_counters.lock().clear();
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Flags;

    #[test]
    fn test_dict_is_shared_per_tag() {
        let ctx = Context::with_output(OutputSink::buffer());
        ctx.dict("a").set("k", 3.0);
        assert_eq!(ctx.dict("a").get("k"), Some(3.0));
        assert_eq!(ctx.dict("b").get("k"), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let ctx = Context::with_output(OutputSink::buffer());
        ctx.storage().store("x", 1u8);
        ctx.storage().partition(Flags::PerThread).store("y", 2u8);
        ctx.dict("a").increment("k");
        ctx.thread_counters().increment("n").unwrap();
        ctx.clear();
        assert!(!ctx.storage().has_key("x"));
        assert!(!ctx.storage().partition(Flags::PerThread).has_key("y"));
        assert!(ctx.dict("a").keys().is_empty());
        assert!(ctx.thread_counters().is_empty());
    }
}
