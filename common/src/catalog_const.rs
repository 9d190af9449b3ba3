/// Maximum number of colleges held in the comparison set.
pub const MAX_COMPARE_ITEMS: usize = 3;

/// Rendered for scalar attributes that are not set, and for empty lists.
pub const MISSING_VALUE: &str = "-";

pub const LIST_DELIMITER: &str = ", ";

pub const ADD_ANOTHER_LABEL: &str = "Add another college";
