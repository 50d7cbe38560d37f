use crate::error::NotFound;
use crate::part::{Part, PartEntry};

/// Find the first part whose id equals `requested_id` exactly.
///
/// No normalisation is applied: an empty or malformed id is just a miss.
pub fn resolve<'a>(catalog: &'a [Part], requested_id: &str) -> Result<&'a Part, NotFound> {
    catalog
        .iter()
        .find(|p| p.id == requested_id)
        .ok_or(NotFound)
}

/// Project every part to its id, in catalog order.
pub fn enumerate_ids(catalog: &[Part]) -> Vec<PartEntry> {
    catalog
        .iter()
        .map(|p| PartEntry { id: p.id.clone() })
        .collect()
}

/// Catalog — the ordered, read-only set of parts served by the process.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    parts: Vec<Part>,
}

impl Catalog {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn resolve(&self, requested_id: &str) -> Result<&Part, NotFound> {
        resolve(&self.parts, requested_id)
    }

    pub fn enumerate_ids(&self) -> Vec<PartEntry> {
        enumerate_ids(&self.parts)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
