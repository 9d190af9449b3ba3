//! The read-only catalog store and its inbound snapshot format.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::college::{College, CollegeId};
use crate::facets::{FacetDefinition, FacetName, FacetRegistry};

/// Wire shape handed over by the persistence layer at page initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub facets: Vec<FacetDefinition>,
    pub colleges: Vec<College>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    colleges: Vec<College>,
    facets: FacetRegistry,
}

impl Catalog {
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> anyhow::Result<Self> {
        let facets = FacetRegistry::new(snapshot.facets)?;
        Self::new(facets, snapshot.colleges)
    }

    pub fn new(facets: FacetRegistry, colleges: Vec<College>) -> anyhow::Result<Self> {
        let mut ids = HashSet::new();
        for college in &colleges {
            if college.id.0.is_empty() {
                anyhow::bail!("College {:?} has an empty identifier", college.name);
            }
            if !ids.insert(&college.id) {
                anyhow::bail!("Duplicate college identifier: {}", college.id);
            }
            for facet in FacetName::ALL {
                if facets.get(facet).is_none() {
                    continue;
                }
                for value in college.declared_facet_values(facet) {
                    if !facets.is_legal(facet, value) {
                        anyhow::bail!(
                            "College {} has value {:?} for facet {:?}, which is not a legal value",
                            college.id, value, facet,
                        );
                    }
                }
            }
        }
        tracing::info!("Catalog loaded: {} colleges, {} facets", colleges.len(), facets.definitions().len());
        Ok(Self { colleges, facets })
    }

    /// Colleges in catalog order.
    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    pub fn facets(&self) -> &FacetRegistry {
        &self.facets
    }

    pub fn get(&self, id: &CollegeId) -> Option<&College> {
        self.colleges.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CollegeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }

    /// A copy of this catalog without the given college. Models removal by
    /// the persistence layer; `self` stays untouched.
    pub fn without(&self, id: &CollegeId) -> Self {
        Self {
            colleges: self.colleges.iter().filter(|c| &c.id != id).cloned().collect(),
            facets: self.facets.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_catalog::{college, registry};

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(registry(), vec![
            college("a", "Apex", "Russia"),
            college("a", "Beta", "China"),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Duplicate college identifier"));
    }

    #[test]
    fn rejects_illegal_facet_value() {
        let result = Catalog::new(registry(), vec![college("a", "Apex", "Atlantis")]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_illegal_course_and_fee_band() {
        let mut bad_course = college("a", "Apex", "Russia");
        bad_course.courses.push("Astrology".to_string());
        assert!(Catalog::new(registry(), vec![bad_course]).is_err());

        let mut bad_fee = college("b", "Beta", "China");
        bad_fee.fee_range = "Free".to_string();
        assert!(Catalog::new(registry(), vec![bad_fee]).is_err());
    }

    #[test]
    fn unregistered_facets_are_not_validated() {
        let facets = FacetRegistry::new(vec![FacetDefinition::new(FacetName::Country, vec!["Russia"])]).unwrap();
        let mut item = college("a", "Apex", "Russia");
        item.college_type = "Anything".to_string();
        assert!(Catalog::new(facets, vec![item]).is_ok());
    }

    #[test]
    fn snapshot_deserializes_from_json() {
        let json = r#"{
            "facets": [{"name": "country", "values": ["Russia", "China"]}],
            "colleges": [{"id": "kazan", "name": "Kazan Federal University", "location": "Kazan", "country": "Russia"}]
        }"#;
        let snapshot: CatalogSnapshot = serde_json::from_str(json).unwrap();
        let catalog = Catalog::from_snapshot(snapshot).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&"kazan".into()).map(|c| c.location.as_str()), Some("Kazan"));
    }

    #[test]
    fn without_drops_only_the_given_college() {
        let catalog = Catalog::new(registry(), vec![
            college("a", "Apex", "Russia"),
            college("b", "Beta", "China"),
        ]).unwrap();
        let smaller = catalog.without(&"a".into());
        assert_eq!(smaller.len(), 1);
        assert!(!smaller.contains(&"a".into()));
        assert_eq!(catalog.len(), 2);
    }
}
