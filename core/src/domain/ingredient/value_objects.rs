#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientImage {
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}
