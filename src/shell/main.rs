use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use shift_board::modules::shifts::adapters::outbound::shifts_in_memory::InMemoryShifts;
use shift_board::shell::config::AppConfig;
use shift_board::shell::graphql::{AppSchema, schema};
use shift_board::shell::http::router;
use shift_board::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryShifts::new());
    let state = AppState::in_memory(store, config.weeks);

    let gql = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())));

    let app = router(state)
        .merge(gql)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(
        board_week = %config.weeks.board,
        personal_week = %config.weeks.personal,
        "GraphQL endpoint: http://{}/gql",
        config.addr
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
