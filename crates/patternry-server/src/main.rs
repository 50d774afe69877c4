mod components;
mod pages;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use patternry::config::PathsConfig;
use patternry::{
    markdown_to_html, Catalog, ComponentRegistry, Config, DemoFn, DemoOutput, Resources,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
    config: Arc<Config>,
    resources: Resources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|err| {
        eprintln!("Failed to load config: {}, using defaults", err);
        Config::default()
    });

    let mut registry = ComponentRegistry::new();
    components::register_all(&mut registry);

    // Built once, before serving; endpoints registered later would not appear
    let catalog = Catalog::build(&registry, &config)?;
    info!("Catalog built: {} groups", catalog.groups().len());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = app(config, &registry, catalog);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Pattern library running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assembles the router: index and docs pages, one route per registered
/// demo endpoint, and the static asset directory.
fn app(config: Config, registry: &ComponentRegistry, catalog: Catalog) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
        resources: Resources::new(&config.paths.resource_root),
        config: Arc::new(config),
    };

    let mut app = Router::new()
        .route("/", get(index))
        .route("/docs", get(docs));

    for set in registry.sets() {
        for endpoint in &set.endpoints {
            let demo = endpoint.demo.clone();
            let resources = state.resources.clone();
            let paths = state.config.paths.clone();
            let handler = move || {
                let demo = demo.clone();
                let resources = resources.clone();
                let paths = paths.clone();
                async move { serve_demo(demo, resources, paths) }
            };
            app = app.route(&endpoint.route, get(handler));
        }
    }

    let static_dir = state.config.paths.static_dir.clone();
    app.nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct IndexQuery {
    uri: Option<String>,
}

/// `GET /?uri=...` — a component detail page when the catalog knows the
/// uri, the intro documentation page otherwise.
async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    if let Some(entry) = query
        .uri
        .as_deref()
        .and_then(|uri| state.catalog.find_entry_by_uri(uri))
    {
        return Html(pages::details(&state.config.app.name, &state.catalog, entry).into_string());
    }

    let intro_path = state.config.paths.doc_path("intro.md");
    let documentation = state
        .resources
        .read(&intro_path)
        .map(|markdown| markdown_to_html(&markdown));

    Html(
        pages::docs(
            &state.config.app.name,
            &state.catalog,
            &state.config.app.name,
            documentation,
        )
        .into_string(),
    )
}

#[derive(Debug, Deserialize)]
struct DocsQuery {
    #[serde(default = "default_docs_title")]
    title: String,
    doc_path: String,
}

fn default_docs_title() -> String {
    "Pattern Library".to_string()
}

/// `GET /docs?title=...&doc_path=...` — any Markdown page under the chrome.
async fn docs(State(state): State<AppState>, Query(query): Query<DocsQuery>) -> Html<String> {
    let documentation = state
        .resources
        .read(&query.doc_path)
        .map(|markdown| markdown_to_html(&markdown));

    Html(
        pages::docs(
            &state.config.app.name,
            &state.catalog,
            &query.title,
            documentation,
        )
        .into_string(),
    )
}

/// Serves one demo endpoint: the backing template's markup when the demo
/// output names a view, the raw markup otherwise.
fn serve_demo(demo: DemoFn, resources: Resources, paths: PathsConfig) -> Response {
    match demo() {
        DemoOutput::Html(markup) => Html(markup).into_response(),
        DemoOutput::View(view) | DemoOutput::Model { view, .. } => {
            let template_path = paths.template_path(&view);
            match resources.read(&template_path) {
                Some(markup) => Html(markup).into_response(),
                None => (
                    StatusCode::NOT_FOUND,
                    Html(format!("No template at '{}'", template_path)),
                )
                    .into_response(),
            }
        }
    }
}
