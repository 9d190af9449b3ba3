use common::college::CollegeId;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::compare_page::ComparePage;
use crate::pages::find_colleges_page::FindCollegesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    FindCollegesPage {},


    #[route("/compare/:colleges")]
    ComparePage { colleges: UrlParam<Vec<CollegeId>> },

}

impl Route {
    pub fn compare_page_from_ids(ids: Vec<CollegeId>) -> Self {
        Self::ComparePage { colleges: UrlParam::from(ids) }
    }
}
