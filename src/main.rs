//! searchview - Entry Point

use clap::Parser;
use searchview::config::{self, ResolvedConfig};
use searchview::model::{AppError, Dataset, SortMode};
use searchview::state::{AppState, SearchState, SearchView};
use searchview::view::{ColorConfig, Theme};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// searchview - search, filter, and sort a catalog of designs in the terminal
#[derive(Parser, Debug)]
#[command(name = "searchview")]
#[command(version)]
#[command(about = "Terminal search view with debounced search, tag filters, and sorting")]
pub struct Args {
    /// Path to a JSON dataset (array of records). Uses built-in sample data if omitted
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Start with this search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Initial sort order: relevance or rating
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Quiet interval before results are recomputed, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("searchview: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Reject a bad sort mode before touching the terminal or log file.
    let sort = args.sort.as_deref().map(str::parse::<SortMode>).transpose()?;

    let config = resolve_config(&args, sort)?;

    searchview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let app_state = build_app_state(args.query, &config)?;
    let theme = Theme::new(ColorConfig::from_env_and_args(args.no_color));

    searchview::view::run(app_state, theme)?;

    info!("Exited cleanly");
    Ok(())
}

/// Full precedence chain: Defaults → Config File → Env Vars → CLI Args.
fn resolve_config(args: &Args, sort: Option<SortMode>) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file)?;
    let with_env = config::apply_env_overrides(merged)?;
    Ok(config::apply_cli_overrides(
        with_env,
        args.debounce_ms,
        args.dataset.clone(),
        sort,
    ))
}

/// Load the dataset and build the initial UI state.
///
/// The initial query and sort mode are applied before the first filter run,
/// so the first frame already shows their results.
fn build_app_state(query: Option<String>, config: &ResolvedConfig) -> Result<AppState, AppError> {
    let dataset = match &config.dataset {
        Some(path) => Dataset::load(path)?,
        None => Dataset::sample(),
    };

    let mut search = SearchState::new();
    if let Some(query) = query {
        search.set_query(query);
    }
    search.set_sort_mode(config.default_sort);

    let view = SearchView::with_state(dataset, search, config.debounce);
    Ok(AppState::new(view, config.suggestions.clone()))
}
