//! Facet definitions and the registry they are validated into.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Closed set of filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetName {
    Country,
    CollegeType,
    FeeRange,
    Course,
}

impl FacetName {
    pub const ALL: [FacetName; 4] = [FacetName::Country, FacetName::CollegeType, FacetName::FeeRange, FacetName::Course];

    /// Whether selections on this facet narrow the result list. Fee range is
    /// declared and selectable but has no predicate over item attributes.
    pub fn is_evaluated(&self) -> bool {
        !matches!(self, FacetName::FeeRange)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetName::Country => "Country",
            FacetName::CollegeType => "Type",
            FacetName::FeeRange => "Fee Range",
            FacetName::Course => "Course",
        }
    }
}

/// A facet paired with its ordered legal values, as supplied by configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub name: FacetName,
    pub values: Vec<String>,
}

impl FacetDefinition {
    pub fn new(name: FacetName, values: Vec<impl Into<String>>) -> Self {
        Self { name, values: values.into_iter().map(|s| s.into()).collect() }
    }

    pub fn is_legal(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Validated set of facet definitions, immutable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct FacetRegistry {
    definitions: Vec<FacetDefinition>,
}

impl FacetRegistry {
    pub fn new(definitions: Vec<FacetDefinition>) -> anyhow::Result<Self> {
        let mut seen = BTreeSet::new();
        for definition in &definitions {
            if !seen.insert(definition.name) {
                anyhow::bail!("Facet {:?} is defined more than once", definition.name);
            }
            let mut values = BTreeSet::new();
            for value in &definition.values {
                if !values.insert(value.as_str()) {
                    anyhow::bail!("Facet {:?} lists value {:?} more than once", definition.name, value);
                }
            }
        }
        Ok(Self { definitions })
    }

    /// Definitions in configuration order.
    pub fn definitions(&self) -> &[FacetDefinition] {
        &self.definitions
    }

    pub fn get(&self, facet: FacetName) -> Option<&FacetDefinition> {
        self.definitions.iter().find(|d| d.name == facet)
    }

    /// False for unregistered facets.
    pub fn is_legal(&self, facet: FacetName, value: &str) -> bool {
        self.get(facet).map(|d| d.is_legal(value)).unwrap_or(false)
    }
}

/// One row of a facet's checkbox list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValueCount {
    pub value: String,
    /// `None` when the facet is never evaluated against items.
    pub count: Option<u64>,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_duplicate_facets() {
        let result = FacetRegistry::new(vec![
            FacetDefinition::new(FacetName::Country, vec!["Russia"]),
            FacetDefinition::new(FacetName::Country, vec!["China"]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn registry_rejects_duplicate_values() {
        let result = FacetRegistry::new(vec![FacetDefinition::new(FacetName::Course, vec!["MBBS", "MBBS"])]);
        assert!(result.is_err());
    }

    #[test]
    fn unregistered_facet_has_no_legal_values() {
        let registry = FacetRegistry::new(vec![FacetDefinition::new(FacetName::Country, vec!["Russia"])]).unwrap();
        assert!(registry.is_legal(FacetName::Country, "Russia"));
        assert!(!registry.is_legal(FacetName::Country, "russia"));
        assert!(!registry.is_legal(FacetName::Course, "Russia"));
    }

    #[test]
    fn facet_names_serialize_snake_case() {
        let json = serde_json::to_string(&FacetName::CollegeType).unwrap();
        assert_eq!(json, "\"college_type\"");
    }
}
