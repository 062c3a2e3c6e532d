//! Word to sign index.
//!
//! Looks up gloss words against the dictionary. Lookup order:
//! 1. Exact word
//! 2. Simple plural (`apples` → `apple`)
//! 3. `-ing` form (`eating` → `eat`, `making` → `make`)
//! 4. `-ed` form (`played` → `play`, `stopped` → `stop`)
//! 5. First indexed word that starts with the word
//!
//! [`SignIndex::search`] is the looser dictionary search: every indexed word
//! containing the query.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::record::{SignId, SignRecord};

/// Outcome of looking up one gloss word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignMatch<'a> {
    /// A sign was found.
    Found {
        /// The gloss word.
        word: String,
        /// The first matching sign.
        sign_id: SignId,
        /// Its record.
        sign: &'a SignRecord,
    },
    /// No sign matched.
    Missing {
        /// The gloss word.
        word: String,
    },
}

impl SignMatch<'_> {
    /// The gloss word this match is for.
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Found { word, .. } | Self::Missing { word } => word,
        }
    }

    /// True if a sign was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Default cap on [`SignIndex::search`] results.
pub const SEARCH_LIMIT: usize = 20;

/// Shortest query, in characters, that [`SignIndex::search`] answers.
pub const MIN_SEARCH_LEN: usize = 2;

/// Sign records plus an English word index over them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignIndex {
    signs: BTreeMap<SignId, SignRecord>,
    index: BTreeMap<String, Vec<SignId>>,
    generated_at: Option<String>,
}

impl SignIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from records.
    ///
    /// Each primary and secondary English gloss maps to the ids of the signs
    /// carrying it, in record order, without duplicates. A later record with
    /// a repeated id replaces the earlier one.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = SignRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Reassembles an index from stored parts.
    #[must_use]
    pub fn from_parts(
        signs: BTreeMap<SignId, SignRecord>,
        index: BTreeMap<String, Vec<SignId>>,
        generated_at: Option<String>,
    ) -> Self {
        Self {
            signs,
            index,
            generated_at,
        }
    }

    /// Adds one record and indexes its English glosses.
    pub fn insert(&mut self, record: SignRecord) {
        let id = record.nzsl_id;
        for word in record.index_words() {
            let ids = self.index.entry(word).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.signs.insert(id, record);
    }

    /// Number of signs.
    #[must_use]
    pub fn sign_count(&self) -> usize {
        self.signs.len()
    }

    /// Number of indexed words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    /// Generation timestamp carried by a stored index, if any.
    #[must_use]
    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }

    /// Sets the generation timestamp.
    pub fn set_generated_at(&mut self, stamp: impl Into<String>) {
        self.generated_at = Some(stamp.into());
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn sign(&self, id: SignId) -> Option<&SignRecord> {
        self.signs.get(&id)
    }

    /// All records, ordered by id.
    #[must_use]
    pub fn signs(&self) -> &BTreeMap<SignId, SignRecord> {
        &self.signs
    }

    /// The word index.
    #[must_use]
    pub fn words(&self) -> &BTreeMap<String, Vec<SignId>> {
        &self.index
    }

    /// Exact lookup of an already-normalized word.
    #[must_use]
    pub fn exact(&self, word: &str) -> Option<&[SignId]> {
        self.index.get(word).map(Vec::as_slice)
    }

    /// Finds the signs for a gloss word, trying suffix variants and then a
    /// prefix match. Returns an empty slice if nothing matches.
    #[must_use]
    pub fn find_signs(&self, word: &str) -> &[SignId] {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return &[];
        }
        let len = word.chars().count();

        if let Some(ids) = self.exact(&word) {
            return ids;
        }

        if len > 2 {
            if let Some(ids) = word.strip_suffix('s').and_then(|w| self.exact(w)) {
                return ids;
            }
        }

        if len > 4 {
            if let Some(base) = word.strip_suffix("ing") {
                if let Some(ids) = self.exact(base).or_else(|| self.exact(&format!("{base}e"))) {
                    return ids;
                }
            }
        }

        if len > 3 {
            if let Some(base) = word.strip_suffix("ed") {
                let shorter = drop_last_char(base);
                if let Some(ids) = self.exact(base).or_else(|| self.exact(shorter)) {
                    return ids;
                }
            }
        }

        self.prefix_match(&word).unwrap_or(&[])
    }

    /// Resolves each gloss word to its first matching sign.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, gloss: &[S]) -> Vec<SignMatch<'_>> {
        gloss
            .iter()
            .map(|word| {
                let word = word.as_ref().to_string();
                let found = self
                    .find_signs(&word)
                    .first()
                    .and_then(|&id| match self.sign(id) {
                        Some(sign) => Some((id, sign)),
                        None => {
                            warn!(%id, word = %word, "sign id in index but not in sign data");
                            None
                        }
                    });
                match found {
                    Some((sign_id, sign)) => SignMatch::Found {
                        word,
                        sign_id,
                        sign,
                    },
                    None => SignMatch::Missing { word },
                }
            })
            .collect()
    }

    /// Searches for signs whose indexed words contain `query`.
    ///
    /// The query is trimmed and lowercased; shorter than [`MIN_SEARCH_LEN`]
    /// characters gives nothing. Words are scanned in index order and each
    /// sign appears once, paired with the first word that reached it. Ids
    /// without a record are skipped. At most `limit` results.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<(String, SignId)> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }

        let mut seen = BTreeSet::new();
        let mut results = Vec::new();
        for (word, ids) in self.index.iter().filter(|(word, _)| word.contains(&query)) {
            for &id in ids {
                if results.len() == limit {
                    return results;
                }
                if self.signs.contains_key(&id) && seen.insert(id) {
                    results.push((word.clone(), id));
                }
            }
        }
        results
    }

    fn prefix_match(&self, word: &str) -> Option<&[SignId]> {
        self.index
            .range::<str, _>((std::ops::Bound::Included(word), std::ops::Bound::Unbounded))
            .next()
            .filter(|(key, _)| key.starts_with(word))
            .map(|(_, ids)| ids.as_slice())
    }
}

fn drop_last_char(s: &str) -> &str {
    s.char_indices().last().map_or(s, |(i, _)| &s[..i])
}
