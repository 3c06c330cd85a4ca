use crate::{
    domain::common::{FridgeChefConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        llm::OpenAIChatClient, session::InMemorySessionRepository, storage::LocalUploadStore,
    },
};

pub type FridgeChefService =
    Service<OpenAIChatClient, LocalUploadStore, InMemorySessionRepository>;

pub async fn create_service(config: FridgeChefConfig) -> Result<FridgeChefService, CoreError> {
    let llm_client = OpenAIChatClient::new(
        config.llm.api_key,
        config.llm.model,
        config.llm.base_url,
    );
    let upload_store = LocalUploadStore::new(config.upload.directory).await?;
    let session_repository = InMemorySessionRepository::new(config.session.idle_ttl);

    Ok(Service::new(llm_client, upload_store, session_repository))
}
