//! Session-local word→gloss memo with in-flight de-duplication.
//!
//! The first hover of an untranslated word marks its key pending and asks
//! the host to fetch; hovers that land while the fetch is outstanding see
//! `InFlight` and issue nothing. The cache grows for the lifetime of one
//! story and is discarded wholesale when a new story starts.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::language::clean_word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// Gloss already known; show it immediately, no network.
    Hit(String),
    /// A fetch for this key is already outstanding.
    InFlight,
    /// Unknown key, now marked pending; the host must fetch it.
    Fetch(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationCache {
    glosses: HashMap<String, String>,
    pending: HashSet<String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache contents with the translation map that came back
    /// with a freshly generated story.
    pub fn seed(&mut self, glosses: HashMap<String, String>) {
        self.glosses = glosses;
        self.pending.clear();
    }

    /// Looks up a hovered word. Returns `None` when the cleaned key is
    /// empty (a token that was all strippable punctuation).
    pub fn lookup(&mut self, raw_word: &str) -> Option<CacheLookup> {
        let key = clean_word(raw_word);
        if key.is_empty() {
            return None;
        }
        if let Some(gloss) = self.glosses.get(&key) {
            return Some(CacheLookup::Hit(gloss.clone()));
        }
        if self.pending.contains(&key) {
            return Some(CacheLookup::InFlight);
        }
        self.pending.insert(key.clone());
        Some(CacheLookup::Fetch(key))
    }

    /// Records a fetched gloss and clears the pending mark.
    pub fn insert(&mut self, key: &str, gloss: String) {
        self.pending.remove(key);
        self.glosses.insert(key.to_string(), gloss);
    }

    /// Clears the pending mark after a failed fetch so a later hover
    /// retries.
    pub fn fail(&mut self, key: &str) {
        self.pending.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.glosses.get(key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.glosses.clear();
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_lookup_of_cached_word_is_a_hit() {
        let mut cache = TranslationCache::new();
        assert_eq!(
            cache.lookup("¡Hola!"),
            Some(CacheLookup::Fetch("hola".into()))
        );
        cache.insert("hola", "hello".into());
        assert_eq!(cache.lookup("Hola"), Some(CacheLookup::Hit("hello".into())));
    }

    #[test]
    fn concurrent_hovers_issue_one_fetch() {
        let mut cache = TranslationCache::new();
        assert_eq!(
            cache.lookup("mundo"),
            Some(CacheLookup::Fetch("mundo".into()))
        );
        // Hover again before the fetch resolves: no second fetch.
        assert_eq!(cache.lookup("mundo,"), Some(CacheLookup::InFlight));
    }

    #[test]
    fn failed_fetch_allows_retry() {
        let mut cache = TranslationCache::new();
        cache.lookup("casa");
        cache.fail("casa");
        assert_eq!(cache.lookup("casa"), Some(CacheLookup::Fetch("casa".into())));
    }

    #[test]
    fn seed_replaces_previous_contents() {
        let mut cache = TranslationCache::new();
        cache.insert("viejo", "old".into());
        cache.lookup("pendiente");
        cache.seed(HashMap::from([("nuevo".to_string(), "new".to_string())]));
        assert_eq!(cache.get("viejo"), None);
        assert_eq!(cache.get("nuevo"), Some("new"));
        // Pending marks from the old story are gone too.
        assert_eq!(
            cache.lookup("pendiente"),
            Some(CacheLookup::Fetch("pendiente".into()))
        );
    }

    #[test]
    fn all_punctuation_token_is_skipped() {
        let mut cache = TranslationCache::new();
        assert_eq!(cache.lookup("¡¿?!"), None);
    }
}
