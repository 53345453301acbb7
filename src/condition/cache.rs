//! Requirement parsing cache
//!
//! Many courses share the same requirement sentence, so parse outcomes are
//! memoized by text for the duration of a load.

use crate::condition::ast::Condition;
use crate::condition::parser;
use crate::config::ParseOptions;
use crate::error::ParseFailure;
use ahash::AHashMap;
use parking_lot::RwLock;

/// Parse outcome cache keyed by trimmed requirement text
#[derive(Debug, Default)]
pub struct ParseCache {
    options: ParseOptions,
    entries: RwLock<AHashMap<String, Result<Condition, ParseFailure>>>,
}

impl ParseCache {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            entries: RwLock::new(AHashMap::with_capacity(256)),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get or parse a requirement string
    #[inline]
    pub fn get_or_parse(&self, text: &str) -> Result<Condition, ParseFailure> {
        let key = text.trim();

        // Fast path: check read lock first
        {
            let cache = self.entries.read();
            if let Some(outcome) = cache.get(key) {
                return outcome.clone();
            }
        }

        let outcome = parser::parse_with(key, &self.options);

        {
            let mut cache = self.entries.write();
            cache.insert(key.to_string(), outcome.clone());
        }

        outcome
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
