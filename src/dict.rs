use std::fmt;

use parking_lot::Mutex;

use crate::format::format_readable;

/// A tagged dictionary of numeric values, safe to share between threads.
///
/// Reading a missing key with [`of`](MappingDict::of) creates it as zero.
/// Keys keep the order in which they were first touched.
///
/// ```
/// # use sxs_toolbox::dict::MappingDict;
/// let dict = MappingDict::new("hits");
/// dict.increment("a");
/// dict.add("b", 2.5);
/// dict.increment("a");
/// assert_eq!(dict.get("a"), Some(2.0));
/// assert_eq!(dict.keys(), vec!["a", "b"]);
/// ```
pub struct MappingDict {
    tag: String,
    values: Mutex<Vec<(String, f64)>>,
}

impl MappingDict {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            values: Mutex::new(Vec::new()),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn update<R>(&self, key: &str, f: impl FnOnce(&mut f64) -> R) -> R {
        let mut values = self.values.lock();
        let index = match values.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                values.push((key.to_string(), 0.0));
                values.len() - 1
            }
        };
        f(&mut values[index].1)
    }

    /// The value under `key`, created as zero when absent.
    pub fn of(&self, key: &str) -> f64 {
        self.update(key, |v| *v)
    }

    pub fn set(&self, key: &str, value: f64) {
        self.update(key, |v| *v = value)
    }

    /// Adds `amount` and returns the new value.
    pub fn add(&self, key: &str, amount: f64) -> f64 {
        self.update(key, |v| {
            *v += amount;
            *v
        })
    }

    pub fn increment(&self, key: &str) -> f64 {
        self.add(key, 1.0)
    }

    /// The value under `key` without creating it.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values
            .lock()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.lock().iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn clear(&self) {
        self.values.lock().clear();
    }

    /// `tag: {key: value, ...}` with values in readable SI form.
    pub fn render(&self) -> String {
        let values = self.values.lock();
        let body = values
            .iter()
            .map(|(k, v)| format!("{}: {}", k, format_readable(*v, 3)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {{{}}}", self.tag, body)
    }
}

impl fmt::Display for MappingDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for MappingDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingDict")
            .field("tag", &self.tag)
            .field("values", &*self.values.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_creates_zero() {
        let dict = MappingDict::new("t");
        assert_eq!(dict.get("k"), None);
        assert_eq!(dict.of("k"), 0.0);
        assert_eq!(dict.get("k"), Some(0.0));
    }

    #[test]
    fn test_set_overwrites() {
        let dict = MappingDict::new("t");
        dict.add("k", 4.0);
        dict.set("k", 1.0);
        assert_eq!(dict.increment("k"), 2.0);
    }
}
