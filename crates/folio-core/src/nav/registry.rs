use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of a page section that navigation links can target
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Section id to anchor target lookup
#[derive(Debug)]
pub struct SectionAnchorRegistry<T> {
    anchors: HashMap<SectionId, T>,
}

impl<T> Default for SectionAnchorRegistry<T> {
    fn default() -> Self {
        Self {
            anchors: HashMap::new(),
        }
    }
}

impl<T> SectionAnchorRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the anchor for `id`, returning the old one
    pub fn register(&mut self, id: impl Into<SectionId>, target: T) -> Option<T> {
        self.anchors.insert(id.into(), target)
    }

    /// Look up the anchor for `id`
    pub fn resolve(&self, id: &str) -> Result<&T> {
        self.anchors
            .get(id)
            .ok_or_else(|| Error::SectionNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.anchors.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&SectionId> {
        let mut ids: Vec<_> = self.anchors.keys().collect();
        ids.sort();
        ids
    }
}
