mod render;
mod shell;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine_client::{PreferenceMode, Recommender};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use server::{DetailLookup, EngineCache, KinetoApp, PageView, UserAction, connect_grpc};
use session::{DEFAULT_TOP_N, SessionState};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::shell::{HELP, ShellCommand, parse_line};

/// Kineto - describe a mood, get movies
#[derive(Parser)]
#[command(name = "kineto")]
#[command(
    about = "Free-text movie recommendations backed by a remote ranking engine",
    long_about = None
)]
struct Cli {
    /// Address of the recommendation engine
    #[arg(
        long,
        global = true,
        env = "KINETO_ENGINE_ADDR",
        default_value = "http://localhost:50051"
    )]
    engine_addr: String,

    /// Movie metadata catalog (JSON Lines)
    #[arg(long, global = true, env = "KINETO_CATALOG", default_value = "data/movies.jsonl")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one query and print the results
    Recommend {
        /// What you're looking for, in plain words
        #[arg(long)]
        query: String,

        /// balanced, accuracy or ratings
        #[arg(long, default_value = "balanced")]
        mode: PreferenceMode,

        /// Results per track (5-20)
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,

        /// Also show catalog details for the result at this rank
        #[arg(long)]
        details: Option<usize>,
    },

    /// Look a title up in the catalog
    Details {
        /// Title to resolve (exact match first, then substring)
        #[arg(long)]
        title: String,
    },

    /// Walk through the app page by page on stdin
    Session {
        /// Page to start on (unknown ids start at welcome)
        #[arg(long)]
        start_page: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let engines = EngineCache::new();

    match cli.command {
        Commands::Recommend {
            query,
            mode,
            top_n,
            details,
        } => {
            let engine = load_engine(&engines, &cli.engine_addr, &cli.catalog).await?;
            handle_recommend(engine, query, mode, top_n, details).await?
        }
        Commands::Details { title } => handle_details(&cli.catalog, &title)?,
        Commands::Session { start_page } => {
            let engine = load_engine(&engines, &cli.engine_addr, &cli.catalog).await?;
            handle_session(engine, start_page).await?
        }
    }

    Ok(())
}

async fn load_engine(
    engines: &EngineCache,
    addr: &str,
    catalog: &Path,
) -> Result<Arc<dyn Recommender>> {
    println!("Loading recommendation engine from {}...", addr);
    let start = Instant::now();
    let engine = engines.get_or_init(|| connect_grpc(addr, catalog)).await?;
    println!(
        "{} Engine ready in {:?} ({} catalog entries)",
        "✓".green(),
        start.elapsed(),
        engine.movies().len()
    );
    Ok(engine)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    engine: Arc<dyn Recommender>,
    query: String,
    mode: PreferenceMode,
    top_n: usize,
    details: Option<usize>,
) -> Result<()> {
    let app = KinetoApp::new(engine);
    let mut state = SessionState::new();
    state.restore_page("search");

    for action in [
        UserAction::SetMode(mode),
        UserAction::SetTopN(top_n),
        UserAction::SetQuery(query),
        UserAction::Search,
    ] {
        app.handle(&mut state, action).await?;
    }

    if state.last_error().is_some() {
        render::print_page(&app.render(&state));
        return Err(anyhow!("Search for {:?} failed", state.query_input()));
    }

    if let Some(rank) = details {
        let label = state
            .all_movies()
            .iter()
            .find(|movie| movie.rank == rank)
            .map(|movie| movie.selection_label())
            .ok_or_else(|| anyhow!("No result at rank {}", rank))?;
        app.handle(&mut state, UserAction::SelectMovie(label)).await?;
    }

    render::print_page(&app.render(&state));
    Ok(())
}

/// Handle the 'details' command
fn handle_details(catalog_path: &Path, title: &str) -> Result<()> {
    let catalog = catalog::MovieCatalog::load_from_file(catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    match results::resolve(&catalog, title) {
        Some(record) => render::print_details(&results::DetailView::from_record(&record)),
        None => println!("{}", DetailLookup::not_found_message(title).yellow()),
    }
    Ok(())
}

/// Handle the 'session' command
async fn handle_session(engine: Arc<dyn Recommender>, start_page: Option<String>) -> Result<()> {
    let app = KinetoApp::new(engine);
    let id = Uuid::new_v4();

    if let Some(page) = start_page {
        let handle = app.sessions().get_or_create(id).await;
        handle.lock().await.restore_page(&page);
    }
    info!("Interactive session {}", id);

    let mut view = app.view(id).await;
    render::print_page(&view);

    let mut rl = DefaultEditor::new()?;
    loop {
        let prompt = format!("[{}]> ", view.page());
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "(interrupted, type 'quit' to leave)".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", format!("{e:#}").red());
                continue;
            }
        };

        let actions = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Actions(actions) if actions.is_empty() => continue,
            ShellCommand::Actions(actions) => actions,
            ShellCommand::Select(rank) => match selector_label(&view, rank) {
                Some(label) => vec![UserAction::SelectMovie(label)],
                None => {
                    println!("{}", format!("No result at rank {rank}").red());
                    continue;
                }
            },
        };

        for action in actions {
            let (outcome, next) = app.dispatch(id, action).await;
            view = next;
            if let Err(e) = outcome {
                println!("{}", e.to_string().red());
                break;
            }
        }
        render::print_page(&view);
    }

    app.sessions().remove(&id).await;
    Ok(())
}

fn selector_label(view: &PageView, rank: usize) -> Option<String> {
    let PageView::Search(search) = view else {
        return None;
    };
    let prefix = format!("{rank}. ");
    search
        .selector
        .iter()
        .find(|label| label.starts_with(&prefix))
        .cloned()
}
