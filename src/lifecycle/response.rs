//! Wire types for the two endoflife.date API generations.
//!
//! The v1 endpoint returns `{"result": {"label", "category", "releases": [...]}}`.
//! The legacy endpoint returns either a bare array of releases or an object
//! with `result.releases`. Both are decoded into [`ReleaseFeed`] at the
//! boundary so that nothing downstream inspects raw JSON structure.

use crate::error::ApiErrorKind;
use serde::Deserialize;
use std::fmt;

// ============================================================================
// Scalar field values
// ============================================================================

/// A release field as published by the API.
///
/// The same key can carry a string, a number or a boolean depending on the
/// product (`"cycle": "12"` vs `"cycle": 12`, `"eol": "2025-04-30"` vs
/// `"eol": true`). JSON `null` is decoded as an absent field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A string value
    Text(String),
    /// A numeric value, rendered exactly as received
    Number(serde_json::Number),
    /// A boolean value
    Flag(bool),
    /// Arrays or objects, rendered as compact JSON
    Other(serde_json::Value),
}

impl FieldValue {
    /// The value as display text, or `None` when it is an empty string.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let rendered = self.to_string();
        (!rendered.is_empty()).then_some(rendered)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

// ============================================================================
// Release records
// ============================================================================

/// One entry of a product's release list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseRecord {
    /// Release series identifier (e.g. "12", "24.04")
    pub cycle: Option<FieldValue>,
    /// Release name (v1 API), e.g. "24.04 LTS"
    pub name: Option<FieldValue>,
    /// Human-readable release label (legacy API)
    pub release_label: Option<FieldValue>,
    /// Human-readable release label (v1 API)
    pub label: Option<FieldValue>,
    /// End of life
    pub eol: Option<FieldValue>,
    /// End of life (v1 API)
    pub eol_from: Option<FieldValue>,
    /// End of active support (v1 API)
    pub eoas_from: Option<FieldValue>,
    /// End of extended support (v1 API)
    pub eoes_from: Option<FieldValue>,
}

impl ReleaseRecord {
    /// `cycle` as text, if present and non-empty.
    #[must_use]
    pub fn cycle_text(&self) -> Option<String> {
        self.cycle.as_ref().and_then(FieldValue::text)
    }

    /// `name` as text, if present and non-empty.
    #[must_use]
    pub fn name_text(&self) -> Option<String> {
        self.name.as_ref().and_then(FieldValue::text)
    }

    /// Display label: `releaseLabel`, then `label`, then `cycle`, then `name`.
    #[must_use]
    pub fn display_label(&self) -> Option<String> {
        [&self.release_label, &self.label, &self.cycle, &self.name]
            .into_iter()
            .flatten()
            .find_map(FieldValue::text)
    }

    /// First published EOL value among `eol`, `eolFrom`, `eoasFrom`, `eoesFrom`.
    ///
    /// A `null` or empty field is skipped, not taken as the answer.
    #[must_use]
    pub fn eol_text(&self) -> Option<String> {
        [&self.eol, &self.eol_from, &self.eoas_from, &self.eoes_from]
            .into_iter()
            .flatten()
            .find_map(FieldValue::text)
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    result: Option<ProductResult>,
}

#[derive(Debug, Deserialize)]
struct ProductResult {
    #[serde(default)]
    label: Option<FieldValue>,
    #[serde(default)]
    category: Option<FieldValue>,
    #[serde(default)]
    releases: Option<Vec<ReleaseRecord>>,
}

/// Metadata a product endpoint declares about itself.
///
/// Fields are `None` when the endpoint did not publish them; the row
/// formatter decides what to print in their place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductMetadata {
    /// Product display name (e.g. "Debian")
    pub label: Option<String>,
    /// Product category (e.g. "os", "app")
    pub category: Option<String>,
}

/// A decoded product response in one of its two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseFeed {
    /// Legacy bare array of releases
    Array(Vec<ReleaseRecord>),
    /// Object with `result.releases`, optionally carrying product metadata
    Object {
        metadata: ProductMetadata,
        releases: Vec<ReleaseRecord>,
    },
}

impl ReleaseFeed {
    /// Decode a response body, dispatching on its first significant character.
    pub fn parse(body: &str) -> Result<Self, ApiErrorKind> {
        match body.trim_start().chars().next() {
            Some('[') => {
                let releases: Vec<ReleaseRecord> = serde_json::from_str(body)
                    .map_err(|e| ApiErrorKind::InvalidJson(e.to_string()))?;
                Ok(Self::Array(releases))
            }
            Some('{') => {
                let envelope: ProductEnvelope = serde_json::from_str(body)
                    .map_err(|e| ApiErrorKind::InvalidJson(e.to_string()))?;
                let result = envelope.result.ok_or_else(|| {
                    ApiErrorKind::UnexpectedShape("object has no `result`".to_string())
                })?;
                let releases = result.releases.ok_or_else(|| {
                    ApiErrorKind::UnexpectedShape("object has no `result.releases`".to_string())
                })?;
                Ok(Self::Object {
                    metadata: ProductMetadata {
                        label: result.label.as_ref().and_then(FieldValue::text),
                        category: result.category.as_ref().and_then(FieldValue::text),
                    },
                    releases,
                })
            }
            Some(c) => Err(ApiErrorKind::InvalidJson(format!(
                "expected `[` or `{{`, found `{c}`"
            ))),
            None => Err(ApiErrorKind::InvalidJson("empty response body".to_string())),
        }
    }

    /// Releases in the API's native order.
    #[must_use]
    pub fn releases(&self) -> &[ReleaseRecord] {
        match self {
            Self::Array(releases) | Self::Object { releases, .. } => releases,
        }
    }

    /// Product metadata, empty for the bare-array shape.
    #[must_use]
    pub fn metadata(&self) -> ProductMetadata {
        match self {
            Self::Array(_) => ProductMetadata::default(),
            Self::Object { metadata, .. } => metadata.clone(),
        }
    }
}
