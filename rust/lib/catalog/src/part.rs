use serde::{Deserialize, Serialize};

/// Part — one sellable catalog record.
/// Primary key is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Lookup key. Expected to be unique across the catalog.
    pub id: String,

    pub name: String,

    /// Non-negative amount; the currency unit is decided by the site.
    pub price: f64,

    pub category: String,

    /// Free-form, e.g. "used" or "new".
    pub condition: String,

    /// Vehicle or equipment model the part belongs to.
    pub model: String,

    /// Model year, kept as text.
    pub year: String,

    pub mileage: u64,

    pub short_description: String,

    pub full_description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Path or URL of the image asset.
    pub image: String,
}

/// Identifier-only view of a part, one per statically rendered route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartEntry {
    pub id: String,
}

impl Part {
    /// Check the value constraints that the type system does not carry.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("id must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price must be a non-negative number, got {}", self.price));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str) -> Part {
    Part {
        id: id.into(),
        name: format!("Part {}", id),
        price: 120.0,
        category: "engine".into(),
        condition: "used".into(),
        model: "Hilux".into(),
        year: "2004".into(),
        mileage: 182_000,
        short_description: "Short".into(),
        full_description: "Full".into(),
        tags: vec!["diesel".into()],
        image: format!("/images/{}.jpg", id),
    }
}
