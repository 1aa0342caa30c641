//! GraphQL HTTP server.

use std::future::Future;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tracing::{debug, info};

use scout_core::ports::FantasyApi;

use crate::loader::BootstrapLoader;
use crate::schema::ScoutSchema;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            enable_playground: true,
        }
    }
}

/// Shared handler state: the compiled schema plus the upstream port handle
/// used to seed each request's bootstrap loader.
#[derive(Clone)]
struct AppState {
    schema: ScoutSchema,
    api: Arc<dyn FantasyApi>,
}

/// Start the GraphQL server.
pub async fn serve(
    schema: ScoutSchema,
    api: Arc<dyn FantasyApi>,
    config: ServerConfig,
) -> Result<(), std::io::Error> {
    let app = router(schema, api, config.enable_playground);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("⚡ GraphQL server listening on http://{}", addr);

    axum::serve(listener, app).await
}

/// Start the GraphQL server with graceful shutdown support.
pub async fn serve_with_shutdown<F>(
    schema: ScoutSchema,
    api: Arc<dyn FantasyApi>,
    config: ServerConfig,
    shutdown_signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema, api, config.enable_playground);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("⚡ GraphQL server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    debug!("Server stopped");
    Ok(())
}

fn router(schema: ScoutSchema, api: Arc<dyn FantasyApi>, enable_playground: bool) -> Router {
    let mut app = Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_check))
        .with_state(AppState { schema, api });

    if enable_playground {
        app = app.route("/", get(graphql_playground));
    }

    app
}

/// GraphQL query handler.
///
/// Every request gets a fresh [`BootstrapLoader`] so sibling resolvers
/// share one roster fetch and nothing outlives the response tree.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner().data(BootstrapLoader::new(state.api.clone()));
    state.schema.execute(request).await.into()
}

/// GraphiQL playground UI.
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
