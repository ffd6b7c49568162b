use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use bokfinder_core::{DomainError, DomainResult, Entity};

use crate::keywords::extract_keywords;

/// Affiliate links of a product, keyed by platform label.
///
/// Labels are unique. Iteration follows the order in which each label was
/// first inserted, so rendered replies and button rows are stable across runs.
/// Serialized as a JSON object whose key order matches that iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(String, String)>);

impl Links {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace the url for `label`.
    ///
    /// Replacing keeps the label at its original position.
    pub fn insert(&mut self, label: impl Into<String>, url: impl Into<String>) {
        let label = label.into();
        let url = url.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = url,
            None => self.0.push((label, url)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, url)| url.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, u)| (l.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L, U> FromIterator<(L, U)> for Links
where
    L: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, U)>>(iter: I) -> Self {
        let mut links = Links::new();
        for (label, url) in iter {
            links.insert(label, url);
        }
        links
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, url) in &self.0 {
            map.serialize_entry(label, url)?;
        }
        map.end()
    }
}

struct LinksVisitor;

impl<'de> Visitor<'de> for LinksVisitor {
    type Value = Links;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of platform label to url")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut links = Links::new();
        while let Some((label, url)) = access.next_entry::<String, String>()? {
            links.insert(label, url);
        }
        Ok(links)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LinksVisitor)
    }
}

/// Serialized form of a product, before validation.
///
/// Decoders read this shape and convert with `Product::try_from`, which
/// rejects empty names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(default, deserialize_with = "nullable_links")]
    pub links: Links,
}

fn nullable_links<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Links, D::Error> {
    Ok(Option::<Links>::deserialize(deserializer)?.unwrap_or_default())
}

/// A catalogue entry: display name plus labeled purchase links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    links: Links,
}

impl Product {
    /// Build a product, rejecting empty or whitespace-only names.
    pub fn try_new(name: impl Into<String>, links: Links) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self { name, links })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Search keywords of this product, derived from the name on every call.
    pub fn keywords(&self) -> Vec<String> {
        extract_keywords(&self.name)
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::try_new(record.name, record.links)
    }
}
