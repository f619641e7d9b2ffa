//! Opaque identifiers for projects, pages, and sections.
//!
//! Nothing in the crate parses an id; they only need to be unique. The store
//! takes its generator as a boxed trait object so tests can swap in
//! [`SequentialIds`] and get reproducible trees.

/// Source of fresh entity ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids. The default for real stores.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-N` ids, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    counter: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_ids_are_unique() {
        let mut ids = RandomIds;
        let set: HashSet<String> = (0..200).map(|_| ids.next_id()).collect();
        assert_eq!(set.len(), 200);
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("p");
        assert_eq!(ids.next_id(), "p-1");
        assert_eq!(ids.next_id(), "p-2");
        assert_eq!(ids.next_id(), "p-3");
    }
}
