//! marquee-cli: Command-line interface for marquee.

mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use marquee_core::{
    build_info::BUILD_INFO, paths, Config, FavoritesStore, FileStore, OmdbClient, SearchOutcome,
};
use output::Format;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search OMDb and manage your favorite movies", long_about = None)]
#[command(version = BUILD_INFO.version)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// OMDb API key (overrides config and environment)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search titles
    Search {
        /// Search query
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Fetch one title by IMDb id
    Lookup {
        imdb_id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Manage favorites
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Show the resolved configuration
    Config,
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorites
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Look up a title and add it to favorites
    Add { imdb_id: String },

    /// Remove a title from favorites
    Remove { imdb_id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        marquee_core::logging::init_with_level("debug");
    } else {
        marquee_core::logging::init();
    }

    let config_path = cli.config.clone().unwrap_or_else(paths::config_path);
    let mut config = Config::load_or_default(&config_path)
        .with_context(|| format!("Cannot load config {}", config_path.display()))?;
    if let Some(key) = cli.api_key {
        config.omdb.api_key = key;
    }

    match cli.command {
        Some(Commands::Search { query, format }) => search(&config, &query, format),
        Some(Commands::Lookup { imdb_id, format }) => lookup(&config, &imdb_id, format),
        Some(Commands::Favorites(cmd)) => favorites(&config, cmd),
        Some(Commands::Config) => {
            show_config(&config, &config_path);
            Ok(())
        }
        None => {
            println!("{}", BUILD_INFO.version_line("marquee"));
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn search(config: &Config, query: &str, format: Format) -> Result<()> {
    let client = OmdbClient::new(&config.omdb)?;

    match client.search_titles(query)? {
        SearchOutcome::Found { movies, total } => {
            println!("{}", output::render(&movies, format)?);
            if let Some(total) = total.filter(|t| *t > movies.len()) {
                info!("Showing {} of {} results", movies.len(), total);
            }
        }
        SearchOutcome::NoResults { reason } => {
            eprintln!("{}", reason.as_deref().unwrap_or("No results"));
        }
    }

    Ok(())
}

fn lookup(config: &Config, imdb_id: &str, format: Format) -> Result<()> {
    let client = OmdbClient::new(&config.omdb)?;

    let Some(movie) = client.lookup(imdb_id)? else {
        bail!("No title with id {imdb_id}");
    };
    println!("{}", output::render(std::slice::from_ref(&movie), format)?);

    Ok(())
}

fn favorites(config: &Config, cmd: FavoritesCommand) -> Result<()> {
    let data_dir = config.data_dir();
    let store = FavoritesStore::new(FileStore::new(data_dir.clone()));
    let mut favorites = store
        .load()
        .with_context(|| format!("Cannot read favorites in {}", data_dir.display()))?;

    match cmd {
        FavoritesCommand::List { format } => {
            println!("{}", output::render(favorites.as_slice(), format)?);
        }
        FavoritesCommand::Add { imdb_id } => {
            if favorites.contains(&imdb_id) {
                println!("{imdb_id} is already a favorite");
                return Ok(());
            }
            let client = OmdbClient::new(&config.omdb)?;
            let Some(movie) = client.lookup(&imdb_id)? else {
                bail!("No title with id {imdb_id}");
            };
            let title = movie.title.clone();
            favorites.add(movie);
            store.save(&favorites)?;
            println!("Added {imdb_id} ({title})");
        }
        FavoritesCommand::Remove { imdb_id } => {
            let removed = favorites.remove(&imdb_id);
            if removed == 0 {
                println!("{imdb_id} is not a favorite");
                return Ok(());
            }
            store.save(&favorites)?;
            println!("Removed {imdb_id}");
        }
    }

    Ok(())
}

fn show_config(config: &Config, config_path: &std::path::Path) {
    println!("Config file:  {}", config_path.display());
    println!("Data dir:     {}", config.data_dir().display());
    println!("OMDb URL:     {}", config.omdb.base_url);
    println!("API key:      {}", config.masked_api_key());
    println!("Timeout:      {}s", config.omdb.timeout_secs);
    println!("Debounce:     {}ms", config.search.debounce_ms);
}
