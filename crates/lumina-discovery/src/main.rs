//! Lumina - Entry Point
//!
//! Command-line front-end for the discovery pipeline.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lumina_discovery::formatters;
use lumina_discovery::graph::generate_topic_data;
use lumina_discovery::models::{KindFilter, ResponseFormat, ResultFilter};
use lumina_discovery::session::{FeaturedShelf, SearchController, SearchEvent, SearchState};
use lumina_discovery::sources::{FeaturedSubject, FeaturedSupplier};
use lumina_discovery::{Aggregator, Config, DiscoveryClient};

#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(about = "Search OpenAlex papers and Open Library books in one list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Contact address for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_MAILTO", global = true)]
    contact_email: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search papers and books
    Search {
        /// Free-text query
        query: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: ResponseFormat,
    },
    /// Print the topic graph for a query as JSON
    Graph {
        /// Free-text query
        query: String,
    },
    /// Show featured books for a subject (random when omitted)
    Featured {
        /// One of science, technology, history, philosophy, mathematics, physics
        #[arg(long)]
        subject: Option<String>,

        /// Show the whole shelf instead of the first page
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: ResponseFormat,
    },
    /// Read queries from stdin, one per line, with debounced search
    Interactive {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct FilterArgs {
    /// Result kinds to show
    #[arg(long = "filter", value_enum, default_value_t = Kind::All)]
    kind: Kind,

    /// Drop results published before this year
    #[arg(long)]
    min_year: Option<i32>,

    /// Only open access papers
    #[arg(long)]
    open_access: bool,
}

impl From<FilterArgs> for ResultFilter {
    fn from(args: FilterArgs) -> Self {
        Self { kind: args.kind.into(), min_year: args.min_year, open_access_only: args.open_access }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Kind {
    All,
    Paper,
    Book,
}

impl From<Kind> for KindFilter {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::All => Self::All,
            Kind::Paper => Self::Paper,
            Kind::Book => Self::Book,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if cli.contact_email.is_some() {
        config.contact_email = cli.contact_email;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        polite_pool = config.has_contact_email(),
        "Starting lumina"
    );

    let client = Arc::new(DiscoveryClient::new(&config)?);

    match cli.command {
        Command::Search { query, filter, format } => {
            let aggregator = Aggregator::from_client(client, &config);
            let results = aggregator.search_resources(&query).await;
            let filter = ResultFilter::from(filter);
            let shown = filter.apply(&results);

            if format.is_json() {
                let topics = generate_topic_data(&results);
                println!("{}", serde_json::to_string_pretty(&formatters::search_json(&query, &shown, &topics))?);
            } else {
                println!("{}", formatters::format_results_markdown(&query, &shown));
            }
        }
        Command::Graph { query } => {
            let aggregator = Aggregator::from_client(client, &config);
            let results = aggregator.search_resources(&query).await;
            println!("{}", serde_json::to_string_pretty(&generate_topic_data(&results))?);
        }
        Command::Featured { subject, all, format } => {
            let subject = match subject.as_deref() {
                Some(name) => FeaturedSubject::parse(name)
                    .ok_or_else(|| anyhow::anyhow!("unknown subject '{name}'"))?,
                None => FeaturedSubject::random(),
            };
            let supplier = FeaturedSupplier::new(client, &config);
            let mut shelf = FeaturedShelf::new(supplier.fetch_featured_books_for(subject).await);
            while all && shelf.has_more() {
                shelf.explore_more();
            }

            if format.is_json() {
                let doc = formatters::featured_json(subject.as_str(), shelf.visible_books(), shelf.remaining());
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!(
                    "{}",
                    formatters::format_featured_markdown(subject.as_str(), shelf.visible_books(), shelf.remaining())
                );
            }
        }
        Command::Interactive { filter } => {
            let aggregator = Arc::new(Aggregator::from_client(client, &config));
            run_interactive(aggregator, &config, filter.into()).await?;
        }
    }

    Ok(())
}

/// Feed stdin lines through the search controller and print each accepted result set.
async fn run_interactive(
    aggregator: Arc<Aggregator>,
    config: &Config,
    filter: ResultFilter,
) -> anyhow::Result<()> {
    let handle = SearchController::new(aggregator, config.debounce).spawn();
    handle.send(SearchEvent::SetFilter(filter)).await?;

    let mut updates = handle.subscribe();
    let printer = tokio::spawn(async move {
        let mut printed: Option<SearchState> = None;
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            if state.is_loading || !state.has_searched || printed.as_ref() == Some(&state) {
                continue;
            }
            print_state(&state);
            printed = Some(state);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match line.trim() {
            ":clear" => SearchEvent::Clear,
            ":all" => SearchEvent::SetFilter(ResultFilter { kind: KindFilter::All, ..filter }),
            ":papers" => SearchEvent::SetFilter(ResultFilter { kind: KindFilter::Paper, ..filter }),
            ":books" => SearchEvent::SetFilter(ResultFilter { kind: KindFilter::Book, ..filter }),
            _ => SearchEvent::Input(line),
        };
        handle.send(event).await?;
    }

    // Let the last input settle and its search finish before exiting
    tokio::time::sleep(config.debounce + Duration::from_millis(50)).await;
    let mut done = handle.subscribe();
    done.wait_for(|state| !state.is_loading).await?;

    tracing::info!("Stdin closed, shutting down");
    handle.shutdown().await;
    printer.await?;
    Ok(())
}

fn print_state(state: &SearchState) {
    let shown = state.filtered_results();
    println!("{}", formatters::format_results_markdown(&state.query, &shown));
    println!("{}", formatters::format_topics_markdown(&state.topic_data));
}
