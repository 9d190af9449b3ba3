pub mod url_param;
pub mod finder_context;
