//! Side-by-side comparison matrix for the resolved comparison set.

use serde::{Deserialize, Serialize};

use crate::catalog_const::{LIST_DELIMITER, MAX_COMPARE_ITEMS, MISSING_VALUE};
use crate::college::{College, CollegeId};

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonValue {
    Text(String),
    List(Vec<String>),
    Missing,
}

impl ComparisonValue {
    fn optional<T: ToString>(value: Option<T>) -> Self {
        match value {
            Some(v) => ComparisonValue::Text(v.to_string()),
            None => ComparisonValue::Missing,
        }
    }

    fn text(value: &str) -> Self {
        if value.is_empty() { ComparisonValue::Missing } else { ComparisonValue::Text(value.to_string()) }
    }

    /// Lists are joined into a single delimited string.
    pub fn render(&self) -> String {
        match self {
            ComparisonValue::Text(text) => text.clone(),
            ComparisonValue::List(items) if items.is_empty() => MISSING_VALUE.to_string(),
            ComparisonValue::List(items) => items.join(LIST_DELIMITER),
            ComparisonValue::Missing => MISSING_VALUE.to_string(),
        }
    }
}

/// A labelled accessor over a college's attributes.
#[derive(Clone, Copy)]
pub struct ComparisonParameter {
    pub label: &'static str,
    pub value: fn(&College) -> ComparisonValue,
}

impl std::fmt::Debug for ComparisonParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonParameter").field("label", &self.label).finish()
    }
}

pub fn default_parameters() -> Vec<ComparisonParameter> {
    vec![
        ComparisonParameter { label: "Location", value: |c| ComparisonValue::text(&c.location) },
        ComparisonParameter { label: "Country", value: |c| ComparisonValue::text(&c.country) },
        ComparisonParameter { label: "Type", value: |c| ComparisonValue::text(&c.college_type) },
        ComparisonParameter { label: "Fees", value: |c| ComparisonValue::text(&c.fees) },
        ComparisonParameter { label: "Ranking", value: |c| ComparisonValue::optional(c.ranking.map(|r| format!("#{r}"))) },
        ComparisonParameter { label: "Rating", value: |c| ComparisonValue::optional(c.rating.map(|r| format!("{r:.1} / 5"))) },
        ComparisonParameter { label: "Cutoff Score", value: |c| ComparisonValue::optional(c.cutoff_score) },
        ComparisonParameter { label: "Established", value: |c| ComparisonValue::optional(c.established) },
        ComparisonParameter { label: "Courses", value: |c| ComparisonValue::List(c.courses.clone()) },
        ComparisonParameter { label: "Facilities", value: |c| ComparisonValue::List(c.facilities.clone()) },
    ]
}

/// Header cell of a matrix column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonColumn {
    College { id: CollegeId, name: String },
    AddAnother,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonCell {
    Value(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub cells: Vec<ComparisonCell>,
}

/// Row-major matrix: `columns` is the header row, `rows` one per parameter.
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComparisonMatrix {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonMatrix {
    pub fn has_placeholder(&self) -> bool {
        self.columns.iter().any(|c| matches!(c, ComparisonColumn::AddAnother))
    }
}

/// Applies every parameter to every college. When fewer than
/// [`MAX_COMPARE_ITEMS`] colleges are given, one trailing "add another"
/// column is appended.
pub fn render_comparison(parameters: &[ComparisonParameter], colleges: &[&College]) -> ComparisonMatrix {
    let with_placeholder = colleges.len() < MAX_COMPARE_ITEMS;

    let mut columns = colleges
        .iter()
        .map(|college| ComparisonColumn::College { id: college.id.clone(), name: college.name.clone() })
        .collect::<Vec<_>>();
    if with_placeholder {
        columns.push(ComparisonColumn::AddAnother);
    }

    let rows = parameters
        .iter()
        .map(|parameter| {
            let mut cells = colleges
                .iter()
                .map(|college| ComparisonCell::Value((parameter.value)(college).render()))
                .collect::<Vec<_>>();
            if with_placeholder {
                cells.push(ComparisonCell::Placeholder);
            }
            ComparisonRow { label: parameter.label.to_string(), cells }
        })
        .collect();

    ComparisonMatrix { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_catalog::college;

    fn cell(matrix: &ComparisonMatrix, label: &str, column: usize) -> ComparisonCell {
        let row = matrix.rows.iter().find(|r| r.label == label);
        row.map(|r| r.cells[column].clone()).unwrap_or(ComparisonCell::Placeholder)
    }

    #[test]
    fn full_set_has_no_placeholder_column() {
        let a = college("a", "Apex", "Russia");
        let b = college("b", "Beta", "China");
        let c = college("c", "Crest", "Russia");
        let matrix = render_comparison(&default_parameters(), &[&a, &b, &c]);
        assert_eq!(matrix.columns.len(), 3);
        assert!(!matrix.has_placeholder());
        assert_eq!(matrix.rows.len(), default_parameters().len());
        assert!(matrix.rows.iter().all(|r| r.cells.len() == 3));
        assert_eq!(cell(&matrix, "Country", 1), ComparisonCell::Value("China".to_string()));
    }

    #[test]
    fn partial_set_gets_one_placeholder_column() {
        let a = college("a", "Apex", "Russia");
        let matrix = render_comparison(&default_parameters(), &[&a]);
        assert_eq!(matrix.columns, vec![
            ComparisonColumn::College { id: "a".into(), name: "Apex".to_string() },
            ComparisonColumn::AddAnother,
        ]);
        assert!(matrix.rows.iter().all(|r| r.cells.len() == 2 && r.cells[1] == ComparisonCell::Placeholder));
    }

    #[test]
    fn empty_set_renders_only_the_placeholder() {
        let matrix = render_comparison(&default_parameters(), &[]);
        assert_eq!(matrix.columns, vec![ComparisonColumn::AddAnother]);
        assert!(matrix.rows.iter().all(|r| r.cells == vec![ComparisonCell::Placeholder]));
    }

    #[test]
    fn lists_are_joined_and_missing_values_dashed() {
        let mut a = college("a", "Apex", "Russia");
        a.facilities = vec!["Hostel".to_string(), "Library".to_string(), "Lab".to_string()];
        a.rating = Some(4.3);
        let b = college("b", "Beta", "China");

        let matrix = render_comparison(&default_parameters(), &[&a, &b]);
        assert_eq!(cell(&matrix, "Facilities", 0), ComparisonCell::Value("Hostel, Library, Lab".to_string()));
        assert_eq!(cell(&matrix, "Facilities", 1), ComparisonCell::Value("-".to_string()));
        assert_eq!(cell(&matrix, "Ranking", 1), ComparisonCell::Value("-".to_string()));
        assert_eq!(cell(&matrix, "Fees", 0), ComparisonCell::Value("-".to_string()));
        assert_eq!(cell(&matrix, "Rating", 0), ComparisonCell::Value("4.3 / 5".to_string()));
    }

    #[test]
    fn custom_parameters_keep_their_order() {
        let a = college("a", "Apex", "Russia");
        let parameters = [
            ComparisonParameter { label: "Name", value: |c| ComparisonValue::Text(c.name.clone()) },
            ComparisonParameter { label: "Courses", value: |c| ComparisonValue::List(c.courses.clone()) },
        ];
        let matrix = render_comparison(&parameters, &[&a]);
        let labels = matrix.rows.iter().map(|r| r.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Name", "Courses"]);
        assert_eq!(cell(&matrix, "Courses", 0), ComparisonCell::Value("MBBS".to_string()));
    }
}
