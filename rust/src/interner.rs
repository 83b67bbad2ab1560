//! Task-id interning for the scheduler.
//!
//! Maps string task ids to dense integers so heap buckets stay `Copy` and
//! the simulation can still resolve names for log lines.

use rustc_hash::FxHashMap;

/// Interned task id (u32 for compact storage and fast hashing).
pub type TaskIdInt = u32;

/// Interner mapping task-id strings to dense integer ids.
#[derive(Debug, Clone, Default)]
pub struct TaskInterner {
    lookup: FxHashMap<String, TaskIdInt>,
    names: Vec<String>,
}

impl TaskInterner {
    /// Create an interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern a task id, returning its dense integer id. Interning the same
    /// string again returns the existing id.
    pub fn intern(&mut self, id: &str) -> TaskIdInt {
        if let Some(&interned) = self.lookup.get(id) {
            return interned;
        }
        let interned = self.names.len() as TaskIdInt;
        self.lookup.insert(id.to_owned(), interned);
        self.names.push(id.to_owned());
        interned
    }

    /// Resolve an integer id back to the task-id string.
    #[inline]
    pub fn resolve(&self, interned: TaskIdInt) -> Option<&str> {
        self.names.get(interned as usize).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_resolve_round_trip() {
        let mut interner = TaskInterner::with_capacity(4);

        let a = interner.intern("compile");
        let b = interner.intern("link");
        let a_again = interner.intern("compile");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), Some("compile"));
        assert_eq!(interner.resolve(b), Some("link"));
        assert_eq!(interner.resolve(99), None);
    }
}
