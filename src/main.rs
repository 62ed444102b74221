use anyhow::Context;
use hcp_network::{AppConfig, AppState, DetailView, HttpServer, ProfileStore, SelectionController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("HCP Network Explorer v{}", hcp_network::version());
    println!("==========================================");
    println!();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let store = match &config.data_path {
        Some(path) => ProfileStore::load(path)
            .with_context(|| format!("failed to load profiles from {:?}", path))?,
        None => ProfileStore::sample(),
    };

    demo_search(&store);

    let state = AppState::new(store, config.layout.clone(), config.camera.clone(), config.panel_width);
    let server = HttpServer::new(state, config.http.clone());

    println!("\n=== Visualizer API ===");
    println!("Listening on http://{}", config.bind_address());
    println!("  POST /api/search        {{\"term\": \"carter\"}}");
    println!("  GET  /api/graph");
    println!("  GET  /api/selection");
    println!();

    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))
}

fn demo_search(store: &ProfileStore) {
    let mut session = SelectionController::from_store(store.clone());
    let stats = session.graph().statistics();

    println!("=== Co-authorship Graph ===");
    println!("  Profiles: {}", stats.node_count);
    println!("  Edges:    {}", stats.edge_count);
    println!("  Isolated: {}", stats.isolated_count);

    let Some(first) = store.iter().next() else {
        return;
    };

    println!("\n=== Search: {:?} ===", first.name);
    session.on_search(&first.name);
    let view = session.visible_subgraph();
    println!("  -> {} nodes, {} edges visible", view.nodes.len(), view.edges.len());
    println!();
    println!("{}", DetailView::from_selection(session.current_selection(), session.store()));
}
