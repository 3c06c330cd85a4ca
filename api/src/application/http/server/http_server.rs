use std::sync::Arc;

use axum::Router;
use fridgechef_core::{
    application::create_service,
    domain::{common::FridgeChefConfig, upload::services::UploadService},
};
use tracing::{info_span, warn};

use crate::application::http::{
    assets::router::asset_routes, pages::router::page_routes, server::app_state::AppState,
};
use crate::args::Args;

use super::templates::Templates;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let upload_url_prefix = args.upload_url_prefix()?;
    let config: FridgeChefConfig = FridgeChefConfig::from(args.as_ref().clone());
    let retention = config.upload.retention;
    let service = create_service(config).await?;

    if let Some(max_age) = retention
        && let Err(e) = service.sweep_stale_uploads(max_age).await
    {
        warn!(error = %e, "Startup sweep of stale uploads failed");
    }

    Ok(AppState::new(
        args,
        service,
        Templates::new()?,
        upload_url_prefix,
    ))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let router = Router::new()
        .merge(page_routes(state.clone()))
        .merge(asset_routes(state.clone()))
        .layer(trace_layer)
        .with_state(state);
    Ok(router)
}
