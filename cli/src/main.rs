//! HCP Network CLI: search profiles and inspect co-authorship networks
//!
//! Runs the session in-process against a profile file or the sample dataset.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use hcp_network::render::to_svg;
use hcp_network::{
    CameraConfig, DetailView, ForceLayout, LayoutConfig, ProfileStore, SearchOutcome,
    SelectionController,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hcp-cli", version, about = "HCP Network Explorer CLI")]
struct Cli {
    /// Profile file (JSON or YAML); defaults to the sample dataset
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List all profiles
    Profiles,
    /// List all co-authorship edges
    Edges,
    /// Show graph statistics
    Stats,
    /// Search by name and show the resulting network
    Search {
        /// Name or part of a name (case-insensitive)
        term: String,
    },
    /// Search by name and write the network as SVG
    Svg {
        term: String,

        /// Output file
        #[arg(long, short, default_value = "network.svg")]
        out: PathBuf,
    },
    /// Start an interactive session
    Shell,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

struct Session {
    controller: SelectionController,
    layout: Arc<ForceLayout>,
}

impl Session {
    fn new(store: ProfileStore) -> Self {
        let layout = Arc::new(ForceLayout::new(LayoutConfig::default()));
        let controller = SelectionController::from_store(store)
            .attach_renderer(layout.clone(), CameraConfig::default());
        Self { controller, layout }
    }

    async fn search(&mut self, term: &str) -> SearchOutcome {
        let outcome = self.controller.on_search(term);
        if let Some(camera) = self.controller.camera() {
            camera.wait_pending().await;
        }
        outcome
    }

    fn detail(&self) -> DetailView {
        DetailView::from_selection(self.controller.current_selection(), self.controller.store())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match load_store(cli.data.as_ref()) {
        Ok(store) => match cli.command {
            Commands::Profiles => run_profiles(&store, &cli.format),
            Commands::Edges => run_edges(&store, &cli.format),
            Commands::Stats => run_stats(&store, &cli.format),
            Commands::Search { term } => run_search(store, &term, &cli.format).await,
            Commands::Svg { term, out } => run_svg(store, &term, &out).await,
            Commands::Shell => run_shell(store, &cli.format).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_store(path: Option<&PathBuf>) -> Result<ProfileStore, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => ProfileStore::load(path)?,
        None => ProfileStore::sample(),
    })
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn run_profiles(store: &ProfileStore, format: &OutputFormat) -> CliResult {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store.profiles())?),
        OutputFormat::Table => {
            let mut table = new_table(&["id", "name", "education", "publications"]);
            for p in store.iter() {
                table.add_row(vec![
                    p.id.to_string(),
                    p.name.clone(),
                    p.education.clone(),
                    p.publications.len().to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} profile(s)", store.len());
        }
    }
    Ok(())
}

fn run_edges(store: &ProfileStore, format: &OutputFormat) -> CliResult {
    let controller = SelectionController::from_store(store.clone());
    let graph = controller.graph();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph.edges)?),
        OutputFormat::Table => {
            let mut table = new_table(&["source", "target", "shared publications"]);
            for e in &graph.edges {
                table.add_row(vec![
                    e.source.to_string(),
                    e.target.to_string(),
                    e.shared_publications.join("; "),
                ]);
            }
            println!("{}", table);
            println!("{} edge(s)", graph.edge_count());
        }
    }
    Ok(())
}

fn run_stats(store: &ProfileStore, format: &OutputFormat) -> CliResult {
    let controller = SelectionController::from_store(store.clone());
    let stats = controller.graph().statistics();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => {
            println!("Profiles:   {}", stats.node_count);
            println!("Edges:      {}", stats.edge_count);
            println!("Isolated:   {}", stats.isolated_count);
            println!("Max degree: {}", stats.max_degree);
            println!("Avg degree: {:.2}", stats.avg_degree);
        }
    }
    Ok(())
}


fn render_view(session: &Session, format: &OutputFormat) -> Result<String, serde_json::Error> {
    let view = session.controller.visible_subgraph();

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "view": view,
                "selection": session.detail(),
                "camera": session.layout.camera(),
            });
            serde_json::to_string_pretty(&body)
        }
        OutputFormat::Table => {
            if view.is_empty() {
                return Ok("(no network: search for an HCP to begin)".to_string());
            }

            let mut nodes = new_table(&["", "id", "name", "co-authors"]);
            for n in &view.nodes {
                let marker = if view.is_center(&n.id) { "*" } else { "" };
                nodes.add_row(vec![
                    marker.to_string(),
                    n.id.to_string(),
                    n.name.clone(),
                    session.controller.graph().degree(&n.id).to_string(),
                ]);
            }

            let mut links = new_table(&["source", "target", "label"]);
            for e in &view.edges {
                links.add_row(vec![e.source.to_string(), e.target.to_string(), e.label()]);
            }

            Ok(format!("{}\n{}\n\n{}", nodes, links, session.detail()))
        }
    }
}

async fn run_search(store: ProfileStore, term: &str, format: &OutputFormat) -> CliResult {
    let mut session = Session::new(store);
    session.search(term).await;
    println!("{}", render_view(&session, format)?);
    Ok(())
}

/// Search for `term` and write the resulting network to `out`
async fn write_svg(session: &mut Session, term: &str, out: &Path) -> CliResult {
    if let SearchOutcome::Cleared = session.search(term).await {
        return Err(format!("no profile matches {:?}", term).into());
    }

    let svg = to_svg(session.controller.visible_subgraph(), &session.layout.snapshot());
    std::fs::write(out, svg)?;
    Ok(())
}

async fn run_svg(store: ProfileStore, term: &str, out: &Path) -> CliResult {
    let mut session = Session::new(store);
    write_svg(&mut session, term, out).await?;
    println!("Saved {}", out.display());
    Ok(())
}

/// Result of one shell line
#[derive(Debug, PartialEq)]
enum LineOutcome {
    Output(String),
    Error(String),
    Quit,
    Nothing,
}

const SHELL_HELP: &str = "Commands:
  search <term>  Center the network on the first matching HCP
  node <id>      Show a visible profile
  edge <a> <b>   Show the connection between two visible profiles
  show           Print the current network and detail
  quit           Exit shell";

async fn handle_line(session: &mut Session, line: &str, format: &OutputFormat) -> LineOutcome {
    let trimmed = line.trim();
    let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let rest = rest.trim();

    match command {
        "" => LineOutcome::Nothing,
        "quit" | "exit" | "q" => LineOutcome::Quit,
        "help" | "h" => LineOutcome::Output(SHELL_HELP.to_string()),
        "search" => {
            session.search(rest).await;
            view_outcome(session, format)
        }
        "node" => {
            let found = session
                .controller
                .visible_subgraph()
                .node(&rest.into())
                .cloned();
            match found {
                Some(profile) => {
                    session.controller.on_node_clicked(profile);
                    LineOutcome::Output(session.detail().to_string())
                }
                None => LineOutcome::Error(format!("{} is not in the current network", rest)),
            }
        }
        "edge" => {
            let ids: Vec<&str> = rest.split_whitespace().collect();
            let [a, b] = ids.as_slice() else {
                return LineOutcome::Error("usage: edge <a> <b>".to_string());
            };
            let found = session
                .controller
                .visible_subgraph()
                .edges
                .iter()
                .find(|e| e.connects(&(*a).into(), &(*b).into()))
                .cloned();
            match found {
                Some(edge) => {
                    session.controller.on_edge_clicked(edge);
                    LineOutcome::Output(session.detail().to_string())
                }
                None => LineOutcome::Error(format!("no visible link between {} and {}", a, b)),
            }
        }
        "show" => view_outcome(session, format),
        other => LineOutcome::Error(format!("unknown command: {} (try help)", other)),
    }
}

fn view_outcome(session: &Session, format: &OutputFormat) -> LineOutcome {
    match render_view(session, format) {
        Ok(text) => LineOutcome::Output(text),
        Err(e) => LineOutcome::Error(e.to_string()),
    }
}

async fn run_shell(store: ProfileStore, format: &OutputFormat) -> CliResult {
    println!("HCP Network Interactive Shell");
    println!("Type help for commands, quit to exit.\n");

    let mut session = Session::new(store);
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("hcp> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match handle_line(&mut session, &line, format).await {
            LineOutcome::Output(text) => println!("{}", text),
            LineOutcome::Error(message) => eprintln!("{}", message),
            LineOutcome::Quit => break,
            LineOutcome::Nothing => {}
        }
    }

    println!("Bye!");
    Ok(())
}
