use anyhow::Result;
use clap::{Parser, Subcommand};
use movierec::services::catalog::Catalog;
use movierec::utils::{format_title, similarity_explanation};
use movierec::{init_tracing, Algorithm, Config, ItemId, Session};
use std::path::PathBuf;
use tracing::info;

const TITLE_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Overrides the configured log filter
    #[arg(short, long)]
    log_level: Option<String>,

    /// JSON movie listing; the built-in sample is used when missing or unreadable
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog
    List {
        /// Also print how often each genre appears
        #[arg(long)]
        genres: bool,
    },
    /// Select movies and rank the rest by genre overlap
    Recommend {
        /// Comma-separated movie ids to select
        #[arg(short, long, value_delimiter = ',', required = true)]
        select: Vec<ItemId>,

        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[arg(short, long, default_value_t = Algorithm::Content)]
        algorithm: Algorithm,

        /// Seed the jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Order purely by genre overlap
        #[arg(long)]
        no_jitter: bool,

        #[arg(long)]
        json: bool,
    },
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = if std::path::Path::new(&args.config).exists() {
        Config::from_file(&args.config)?
    } else {
        Config::default()
    };

    if let Some(ref catalog) = args.catalog {
        config.catalog.source = Some(catalog.clone());
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}

fn print_catalog(catalog: &Catalog, genres: bool) {
    for item in catalog.items() {
        let year = item
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:>4}  {:<width$}  {:>4}  {}",
            item.id,
            format_title(&item.title, TITLE_WIDTH),
            year,
            item.genre_label(),
            width = TITLE_WIDTH
        );
    }

    if genres {
        println!();
        println!("Genre distribution:");
        for (genre, count) in catalog.genre_distribution() {
            println!("  {:<12} {}", genre, count);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(&args)?;

    init_tracing(&config.logging.level);

    match args.command {
        Command::List { genres } => {
            let session = Session::new(config)?;
            print_catalog(session.catalog(), genres);
        }
        Command::Recommend {
            select,
            limit,
            algorithm,
            seed,
            no_jitter,
            json,
        } => {
            if seed.is_some() {
                config.recommendation.seed = seed;
            }
            if no_jitter {
                config.recommendation.jitter_max = 0.0;
            }

            let mut session = Session::new(config)?;
            info!("Loaded catalog with {} movies", session.catalog().len());

            for id in select {
                if !session.selection().contains(id) {
                    session.toggle(id);
                }
            }

            let response = session.recommend(algorithm, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            println!("{}", algorithm.display_name());
            for line in algorithm.description() {
                println!("  - {}", line);
            }
            println!();

            if response.recommendations.is_empty() {
                println!("No recommendations: select at least one movie from the catalog.");
                return Ok(());
            }

            let selected_genres: Vec<String> = response
                .selected
                .iter()
                .filter_map(|id| session.catalog().get(*id))
                .flat_map(|item| item.genres.iter().cloned())
                .collect();

            for (rank, scored) in response.recommendations.iter().enumerate() {
                let year = scored
                    .item
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                println!(
                    "#{} {} ({})  score {:.3}",
                    rank + 1,
                    format_title(&scored.item.title, TITLE_WIDTH),
                    year,
                    scored.score
                );
                println!("    Genres: {}", scored.item.genre_label());
                println!(
                    "    {}",
                    similarity_explanation(&scored.item.genres, &selected_genres)
                );
            }

            let metrics = session.metrics(&response);
            println!();
            println!(
                "Genre diversity {:.2}, coverage {:.2}, mean overlap {:.3}, matched {:.0}%",
                metrics.genre_diversity,
                metrics.catalog_coverage,
                metrics.mean_raw_score,
                metrics.matched_ratio * 100.0
            );
        }
    }

    Ok(())
}
