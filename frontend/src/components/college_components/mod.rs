pub mod search_input_top_bar;
pub mod facet_filters;
pub mod college_card;
pub mod compare_bar;
pub mod comparison_table;
