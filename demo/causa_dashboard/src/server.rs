// Dashboard HTTP server
//
// Serves the rendered page plus the table fragment that the search box swaps in.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use causa_core::{HtmlView, SearchListener};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
struct ServerState {
    view: Arc<HtmlView>,
    search: SearchListener,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

pub fn build_router(view: Arc<HtmlView>, search: SearchListener) -> Router {
    let state = ServerState { view, search };

    Router::new()
        .route("/", get(index_handler))
        .route("/fragments/table", get(table_handler))
        .route("/search", get(search_handler))
        .route("/health", get(health_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until `shutdown` resolves
pub async fn serve<F>(
    addr: &str,
    router: Router,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        target: "causa_dashboard",
        url = %format!("http://{}", addr),
        "Dashboard server ready"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn index_handler(State(state): State<ServerState>) -> Html<String> {
    Html(state.view.render_page())
}

async fn table_handler(State(state): State<ServerState>) -> Html<String> {
    Html(state.view.table_html())
}

/// Filtered table body for one client's search field. The shared page keeps the full table.
async fn search_handler(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    Html(HtmlView::render_table_body(&state.search.render(&query.q)))
}

async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use causa_core::api::ProcessRecord;
    use causa_core::view::table_body;
    use causa_core::{process_store, DashboardView, KpiSlot};
    use tower::ServiceExt;

    fn record(processo: &str, tipo: &str, responsavel: &str) -> ProcessRecord {
        ProcessRecord {
            processo: processo.to_string(),
            valor: Some(1000.0),
            tipo: tipo.to_string(),
            data: "2024-01-10".to_string(),
            responsavel: responsavel.to_string(),
        }
    }

    fn app_with(records: Vec<ProcessRecord>) -> (Router, Arc<HtmlView>) {
        let (writer, reader) = process_store();
        writer.replace(records);
        let view = Arc::new(HtmlView::new());
        let search = SearchListener::new(reader, view.clone());
        (build_router(view.clone(), search), view)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (app, _) = app_with(Vec::new());
        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn index_shows_current_kpis() {
        let (app, view) = app_with(Vec::new());
        view.set_kpi(KpiSlot::Saving, "R$ 2.500,00");
        let (status, body) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("R$ 2.500,00"));
    }

    #[tokio::test]
    async fn search_filters_the_table_fragment() {
        let (app, _) = app_with(vec![
            record("0001-23", "Trabalhista", "Ana"),
            record("0002-45", "Cível", "Bruno"),
        ]);
        let (status, body) = get_body(app, "/search?q=TRAB").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("0001-23"));
        assert!(!body.contains("0002-45"));
    }

    #[tokio::test]
    async fn search_without_term_shows_everything() {
        let (app, _) = app_with(vec![
            record("0001-23", "Trabalhista", "Ana"),
            record("0002-45", "Cível", "Bruno"),
        ]);
        let (_, body) = get_body(app, "/search").await;
        assert!(body.contains("0001-23"));
        assert!(body.contains("0002-45"));
    }

    #[tokio::test]
    async fn search_with_no_match_shows_message_row() {
        let (app, _) = app_with(vec![record("0001-23", "Trabalhista", "Ana")]);
        let (_, body) = get_body(app, "/search?q=zzz").await;
        assert!(body.contains("Nenhum processo encontrado"));
    }

    #[tokio::test]
    async fn search_leaves_shared_page_unfiltered() {
        let records = vec![
            record("0001-23", "Trabalhista", "Ana"),
            record("0002-45", "Cível", "Bruno"),
        ];
        let (app, view) = app_with(records.clone());
        view.render_table(&table_body(records.iter()));

        let (_, filtered) = get_body(app.clone(), "/search?q=trab").await;
        assert!(!filtered.contains("0002-45"));

        let (_, page) = get_body(app.clone(), "/").await;
        assert!(page.contains("0001-23"));
        assert!(page.contains("0002-45"));

        let (_, fragment) = get_body(app, "/fragments/table").await;
        assert!(fragment.contains("0002-45"));
        assert_eq!(view.table().map(|t| t.rows().len()), Some(2));
    }
}
