//! Tag based query cache
//!
//! The cache only tracks a generation counter per tag. Readers include the
//! generation of the tags they depend on in their fetch key, so bumping a
//! generation makes them refetch.

use std::cell::RefCell;
use std::collections::HashMap;

/// Tag of the image listing
pub const IMAGES_TAG: &str = "images";

/// Something that can mark cached data as stale
pub trait QueryInvalidator {
    fn invalidate(&self, tag: &str);
}

impl<T: QueryInvalidator + ?Sized> QueryInvalidator for &T {
    fn invalidate(&self, tag: &str) {
        (**self).invalidate(tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCache {
    generations: HashMap<String, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of `tag`, 0 if it was never invalidated
    pub fn generation(&self, tag: &str) -> u64 {
        self.generations.get(tag).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, tag: &str) {
        let generation = self.generations.entry(tag.to_string()).or_insert(0);
        *generation = generation.wrapping_add(1);
        log::debug!("Invalidated query tag '{}' (generation {})", tag, generation);
    }
}

impl QueryInvalidator for RefCell<QueryCache> {
    fn invalidate(&self, tag: &str) {
        self.borrow_mut().invalidate(tag);
    }
}
