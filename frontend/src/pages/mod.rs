pub mod find_colleges_page;
pub mod compare_page;
