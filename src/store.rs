use crate::error::{AppError, AppResult};
use dashmap::DashMap;
use regex::Regex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Identifier tokens are pure decimal digit strings: no sign, no
/// whitespace, no surrounding characters.
static ID_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// In-memory mapping between short identifiers and original URLs.
///
/// Identifiers are sequential positive integers starting at 1 and are
/// never reused. The same URL string always maps back to the same
/// identifier; equality is exact, so URLs differing only in case,
/// trailing slash, or query order count as distinct entries.
#[derive(Debug)]
pub struct MappingStore {
    /// identifier -> original URL
    urls: DashMap<u64, String>,

    /// original URL -> identifier, for deduplicated inserts
    index: DashMap<String, u64>,

    /// next identifier to hand out
    next_id: AtomicU64,
}

impl MappingStore {
    /// Create an empty store. The first identifier handed out is 1.
    pub fn new() -> Self {
        Self {
            urls: DashMap::new(),
            index: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Return the identifier for `url`, allocating the next one on first
    /// sight.
    ///
    /// The caller is expected to have validated `url` already; the store
    /// performs no validation of its own. Concurrent calls with the same
    /// new URL settle on a single entry: the index entry for a URL is
    /// taken under its shard lock, so exactly one caller runs the
    /// allocation closure and the rest observe its identifier.
    pub fn insert_or_find(&self, url: &str) -> u64 {
        if let Some(id) = self.index.get(url) {
            return *id;
        }

        *self.index.entry(url.to_owned()).or_insert_with(|| {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            self.urls.insert(id, url.to_owned());
            id
        })
    }

    /// Look up a raw path token and return the stored URL.
    ///
    /// Tokens that are not pure digit strings are rejected before any
    /// lookup. Well-formed tokens with no entry report `NotFound`; that
    /// includes digit strings too large to be an identifier, which cannot
    /// name a stored entry.
    pub fn resolve(&self, token: &str) -> AppResult<String> {
        if !ID_TOKEN.is_match(token) {
            return Err(AppError::InvalidIdentifier(token.to_owned()));
        }

        let id: u64 = token
            .parse()
            .map_err(|_| AppError::NotFound(token.to_owned()))?;

        self.urls
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::NotFound(token.to_owned()))
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the store holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Default for MappingStore {
    fn default() -> Self {
        Self::new()
    }
}
