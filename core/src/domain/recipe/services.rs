use std::future::Future;

use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::{
        ports::LLMClient,
        value_objects::{ChatMessage, CompletionRequest},
    },
    recipe::{
        entities::Recipe,
        value_objects::{RECIPE_MAX_TOKENS, recipe_prompt},
    },
    session::ports::SessionRepository,
    upload::ports::UploadStore,
};

/// Service trait for recipe generation
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        ingredients: Vec<String>,
        styles: Vec<String>,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

impl<L, U, S> RecipeService for Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    #[instrument(skip(self))]
    async fn generate_recipe(
        &self,
        ingredients: Vec<String>,
        styles: Vec<String>,
    ) -> Result<Recipe, CoreError> {
        let request = CompletionRequest {
            messages: vec![ChatMessage::user(recipe_prompt(&ingredients, &styles))],
            max_tokens: RECIPE_MAX_TOKENS,
            temperature: None,
        };

        let text = self.llm_client.complete(request).await?.trim().to_string();

        Ok(Recipe {
            ingredients,
            styles,
            text,
        })
    }
}
