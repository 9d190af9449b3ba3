//! Fixtures shared by the unit tests.

use crate::catalog::Catalog;
use crate::college::College;
use crate::facets::{FacetDefinition, FacetName, FacetRegistry};

pub fn registry() -> FacetRegistry {
    FacetRegistry::new(vec![
        FacetDefinition::new(FacetName::Country, vec!["Russia", "China", "Kazakhstan", "Georgia"]),
        FacetDefinition::new(FacetName::CollegeType, vec!["Government", "Private"]),
        FacetDefinition::new(FacetName::FeeRange, vec!["Under 3 Lakhs", "3-5 Lakhs", "Above 5 Lakhs"]),
        FacetDefinition::new(FacetName::Course, vec!["MBBS", "BDS", "Nursing"]),
    ])
    .unwrap()
}

pub fn college(id: &str, name: &str, country: &str) -> College {
    College {
        id: id.into(),
        name: name.to_string(),
        location: format!("{name} City"),
        country: country.to_string(),
        college_type: "Government".to_string(),
        courses: vec!["MBBS".to_string()],
        ..Default::default()
    }
}

/// A(Russia), B(China), C(Russia) named Apex, Beta, Crest.
pub fn abc_catalog() -> Catalog {
    Catalog::new(registry(), vec![
        college("a", "Apex", "Russia"),
        college("b", "Beta", "China"),
        college("c", "Crest", "Russia"),
    ])
    .unwrap()
}

/// A richer catalog exercising every facet.
pub fn mixed_catalog() -> Catalog {
    let mut kazan = college("kazan", "Kazan Federal University", "Russia");
    kazan.location = "Kazan".to_string();
    kazan.courses = vec!["MBBS".to_string(), "BDS".to_string()];
    kazan.fee_range = "3-5 Lakhs".to_string();

    let mut harbin = college("harbin", "Harbin Medical University", "China");
    harbin.location = "Harbin".to_string();
    harbin.fee_range = "Under 3 Lakhs".to_string();

    let mut tbilisi = college("tbilisi", "Tbilisi State Medical University", "Georgia");
    tbilisi.location = "Tbilisi".to_string();
    tbilisi.college_type = "Private".to_string();
    tbilisi.courses = vec!["Nursing".to_string()];
    tbilisi.fee_range = "Above 5 Lakhs".to_string();

    let mut astana = college("astana", "Astana Medical University", "Kazakhstan");
    astana.location = "Astana".to_string();
    astana.courses = vec!["MBBS".to_string(), "Nursing".to_string()];

    let mut bashkir = college("bashkir", "Bashkir State Medical University", "Russia");
    bashkir.location = "Ufa".to_string();
    bashkir.college_type = "Private".to_string();

    Catalog::new(registry(), vec![kazan, harbin, tbilisi, astana, bashkir]).unwrap()
}
