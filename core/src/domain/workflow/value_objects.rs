use serde::Serialize;

/// What the results page shows: the stored photos and the (possibly edited)
/// ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub filenames: Vec<String>,
    pub ingredients: Vec<String>,
}
