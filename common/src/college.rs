//! Catalog item model.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::facets::FacetName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Hash, Eq, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct CollegeId(pub String);

impl From<&str> for CollegeId {
    fn from(value: &str) -> Self {
        CollegeId(value.to_string())
    }
}

impl From<String> for CollegeId {
    fn from(value: String) -> Self {
        CollegeId(value)
    }
}

impl Display for CollegeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry. Immutable once loaded into a [`crate::catalog::Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct College {
    pub id: CollegeId,
    pub name: String,
    pub location: String,
    pub country: String,
    pub college_type: String,
    /// Display string, e.g. "4.5 Lakhs / year".
    pub fees: String,
    /// Fee band label; a facet value, never parsed as a number.
    pub fee_range: String,
    pub ranking: Option<u32>,
    pub rating: Option<f32>,
    pub cutoff_score: Option<u32>,
    pub established: Option<u16>,
    pub courses: Vec<String>,
    pub facilities: Vec<String>,
}

impl College {
    /// Case-insensitive substring match against name or location.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.location.to_lowercase().contains(needle)
    }

    /// Attribute values a facet filters on, or `None` when the facet has no
    /// evaluation predicate.
    pub fn facet_values(&self, facet: FacetName) -> Option<Vec<&str>> {
        match facet {
            FacetName::Country => Some(vec![self.country.as_str()]),
            FacetName::CollegeType => Some(vec![self.college_type.as_str()]),
            FacetName::Course => Some(self.courses.iter().map(|c| c.as_str()).collect()),
            FacetName::FeeRange => None,
        }
    }

    /// Values checked against the facet registry at load time. Unlike
    /// [`College::facet_values`] this covers facets without a predicate too.
    pub(crate) fn declared_facet_values(&self, facet: FacetName) -> Vec<&str> {
        match facet {
            FacetName::FeeRange => {
                if self.fee_range.is_empty() { vec![] } else { vec![self.fee_range.as_str()] }
            }
            other => self.facet_values(other).unwrap_or_default(),
        }
    }
}
