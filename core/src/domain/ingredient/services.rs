use std::future::Future;

use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        parser::parse_ingredient_reply,
        prompts::{
            EXTRACTION_MAX_TOKENS, EXTRACTION_SYSTEM_PROMPT, EXTRACTION_TEMPERATURE,
            EXTRACTION_USER_PROMPT,
        },
        value_objects::IngredientImage,
    },
    llm::{
        ports::LLMClient,
        value_objects::{ChatMessage, CompletionRequest, ContentPart},
    },
    session::ports::SessionRepository,
    upload::ports::UploadStore,
};

/// Service trait for reading ingredients off food photos
pub trait IngredientService: Send + Sync {
    /// One remote call for all images together
    fn extract_ingredients(
        &self,
        images: Vec<IngredientImage>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

pub fn build_extraction_request(images: &[IngredientImage]) -> CompletionRequest {
    let mut parts = Vec::with_capacity(images.len() + 1);
    parts.push(ContentPart::text(EXTRACTION_USER_PROMPT));
    parts.extend(
        images
            .iter()
            .map(|image| ContentPart::image(image.mime_type, &image.data)),
    );

    CompletionRequest {
        messages: vec![
            ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
            ChatMessage::user_parts(parts),
        ],
        max_tokens: EXTRACTION_MAX_TOKENS,
        temperature: Some(EXTRACTION_TEMPERATURE),
    }
}

impl<L, U, S> IngredientService for Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    #[instrument(skip(self, images), fields(images = images.len()))]
    async fn extract_ingredients(
        &self,
        images: Vec<IngredientImage>,
    ) -> Result<Vec<String>, CoreError> {
        let request = build_extraction_request(&images);
        let raw = self.llm_client.complete(request).await?;
        let ingredients = parse_ingredient_reply(&raw);

        tracing::info!(count = ingredients.len(), "Extracted ingredients");
        Ok(ingredients)
    }
}
