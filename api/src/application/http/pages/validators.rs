use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EditIngredientsForm {
    #[validate(length(max = 5000, message = "ingredients must be at most 5000 characters"))]
    pub ingredients: String,
}

/// Checkbox group: the browser repeats `recipe_type` once per ticked box and
/// omits it entirely when none are.
#[derive(Debug, Deserialize, Validate)]
pub struct StyleForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "select at least one recipe style"))]
    pub recipe_type: Vec<String>,
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
        http::header::CONTENT_TYPE,
    };

    use super::*;
    use crate::application::http::server::api_entities::api_error::{ApiError, ValidateForm};

    fn form_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/style")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn repeated_keys_are_collected_in_order() {
        let body = "recipe_type=%EA%B0%84%EC%8B%9D%EC%9A%A9&other=1&recipe_type=%EC%95%BC%EC%8B%9D%EC%9A%A9";

        let ValidateForm(form) = ValidateForm::<StyleForm>::from_request(form_request(body), &())
            .await
            .unwrap();

        assert_eq!(form.recipe_type, vec!["간식용", "야식용"]);
    }

    #[tokio::test]
    async fn missing_style_is_a_bad_request() {
        let result = ValidateForm::<StyleForm>::from_request(form_request("other=1"), &()).await;

        assert!(matches!(result, Err(ApiError::BadRequest(message)) if message.contains("recipe style")));
    }

    #[test]
    fn empty_ingredient_edit_is_allowed() {
        let form = EditIngredientsForm {
            ingredients: String::new(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn oversized_ingredient_edit_is_rejected() {
        let form = EditIngredientsForm {
            ingredients: "가".repeat(5001),
        };
        assert!(form.validate().is_err());
    }
}
