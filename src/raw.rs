//! The flat string-to-string map a tokenizer hands to set construction
//!
//! Every source loader reduces its medium to a [`RawArgMap`] with one split
//! rule: a token is cut at the first `=`; the left side is the key, the
//! right side (with any further `=` preserved verbatim) is the value, and a
//! token without `=` is a bare flag with an empty value. The map is
//! ephemeral — it lives only for a single loader construction call.

use std::collections::HashMap;

/// Raw key-to-value mapping produced by a source tokenizer.
#[derive(Debug, Clone, Default)]
pub struct RawArgMap {
    entries: HashMap<String, String>,
}

impl RawArgMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one token, split at the first `=`.
    ///
    /// Tokens with an empty key part (an empty token, or one starting with
    /// `=`) are ignored: they can never match a declared parameter name,
    /// which is non-empty by construction. When the same key appears twice
    /// the first occurrence wins.
    pub fn insert_token(&mut self, token: &str) {
        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key, value),
            None => (token, ""),
        };
        if key.is_empty() {
            return;
        }
        self.entries.entry(key.to_string()).or_insert_with(|| value.to_string());
    }

    /// Insert an already-split entry, re-applying the token rule so a key
    /// with an embedded `=` folds its remainder back into the value.
    pub fn insert_entry(&mut self, key: &str, value: &str) {
        self.insert_token(&format!("{key}={value}"));
    }

    /// Raw value for `name`, if present. A populated bare flag yields `""`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
