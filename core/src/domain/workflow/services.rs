use std::future::Future;

use tracing::{instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        parser::parse_ingredient_edit, services::IngredientService,
        value_objects::IngredientImage,
    },
    llm::ports::LLMClient,
    recipe::{entities::Recipe, services::RecipeService},
    session::{
        entities::{SessionId, SessionState},
        ports::SessionRepository,
    },
    upload::{
        entities::StoredImageName, ports::UploadStore, services::UploadService,
        value_objects::UploadedImage,
    },
    workflow::value_objects::ResultsView,
};

/// The five-step page flow: upload, results, edit, style, recipe.
pub trait WorkflowService: Send + Sync {
    /// Replaces everything the session knew with a fresh set of photos
    fn begin_upload(
        &self,
        session_id: SessionId,
        images: Vec<UploadedImage>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    /// `None` when the session has no photos yet. Extraction runs only when
    /// the session holds no ingredient list.
    fn load_results(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<Option<ResultsView>, CoreError>> + Send;

    fn edit_ingredients(
        &self,
        session_id: SessionId,
        text: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn choose_styles(
        &self,
        session_id: SessionId,
        labels: Vec<String>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    /// Generates a new recipe on every call; nothing is cached
    fn compose_recipe(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

impl<L, U, S> Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    async fn session_state(&self, session_id: SessionId) -> Result<SessionState, CoreError> {
        Ok(self
            .session_repository
            .load(session_id)
            .await?
            .unwrap_or_default())
    }

    async fn read_images(&self, filenames: &[String]) -> Result<Vec<IngredientImage>, CoreError> {
        let mut images = Vec::with_capacity(filenames.len());
        for filename in filenames {
            let name = StoredImageName::parse(filename)?;
            let data = self.upload_store.read(&name).await?;
            images.push(IngredientImage {
                mime_type: name.mime_type(),
                data,
            });
        }
        Ok(images)
    }
}

impl<L, U, S> WorkflowService for Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    #[instrument(skip(self, images), fields(session_id = %session_id, count = images.len()))]
    async fn begin_upload(
        &self,
        session_id: SessionId,
        images: Vec<UploadedImage>,
    ) -> Result<Vec<String>, CoreError> {
        if images.is_empty() {
            return Err(CoreError::Invalid("at least one image is required".to_string()));
        }

        let previous = self.session_state(session_id).await?;
        if previous.has_uploads() {
            self.discard_images(&previous.filenames).await;
        }
        self.session_repository.remove(session_id).await?;

        let filenames: Vec<String> = self
            .store_images(images)
            .await?
            .into_iter()
            .map(String::from)
            .collect();

        self.session_repository
            .store(session_id, SessionState::with_filenames(filenames.clone()))
            .await?;

        tracing::info!(count = filenames.len(), "Upload stored, session reset");
        Ok(filenames)
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn load_results(&self, session_id: SessionId) -> Result<Option<ResultsView>, CoreError> {
        let mut state = self.session_state(session_id).await?;
        if !state.has_uploads() {
            return Ok(None);
        }

        let ingredients = match state.ingredients.clone() {
            Some(ingredients) => ingredients,
            None => {
                let images = self.read_images(&state.filenames).await?;
                let ingredients = self.extract_ingredients(images).await?;
                state.ingredients = Some(ingredients.clone());
                self.session_repository
                    .store(session_id, state.clone())
                    .await?;
                ingredients
            }
        };

        Ok(Some(ResultsView {
            filenames: state.filenames,
            ingredients,
        }))
    }

    #[instrument(skip(self, text), fields(session_id = %session_id))]
    async fn edit_ingredients(
        &self,
        session_id: SessionId,
        text: String,
    ) -> Result<Vec<String>, CoreError> {
        let ingredients = parse_ingredient_edit(&text);
        let mut state = self.session_state(session_id).await?;
        state.ingredients = Some(ingredients.clone());
        self.session_repository.store(session_id, state).await?;
        Ok(ingredients)
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn choose_styles(
        &self,
        session_id: SessionId,
        labels: Vec<String>,
    ) -> Result<Vec<String>, CoreError> {
        let styles: Vec<String> = labels
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();

        if styles.is_empty() {
            return Err(CoreError::Invalid("select at least one recipe style".to_string()));
        }

        let mut state = self.session_state(session_id).await?;
        state.recipe_type = Some(styles.clone());
        self.session_repository.store(session_id, state).await?;
        Ok(styles)
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn compose_recipe(&self, session_id: SessionId) -> Result<Recipe, CoreError> {
        let state = self.session_state(session_id).await?;

        // The flow does not stop a visitor from opening the recipe page early;
        // defaults fill the gaps, but it is worth seeing in the logs.
        if state.ingredients.is_none() {
            warn!("Recipe requested before any ingredients were recorded");
        }
        if state.recipe_type.is_none() {
            warn!("Recipe requested before a style was chosen, using default");
        }

        self.generate_recipe(state.ingredients_or_default(), state.recipe_styles())
            .await
    }
}
