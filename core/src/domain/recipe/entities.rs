use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub ingredients: Vec<String>,
    pub styles: Vec<String>,
    pub text: String,
}
