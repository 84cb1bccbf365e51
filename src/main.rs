use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use specmatch::{
    classify, normalize, open_store, search_relaxed, suggest_groups, Backend, CandidateRecord, Category,
    CompatibilityCatalog, EngineConfig, RawQuery,
};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Valve catalog spec matching and tiered search
#[derive(Parser, Debug)]
#[command(name = "specmatch")]
#[command(version, about = "Valve catalog spec matching and tiered search", long_about = None)]
struct Args {
    /// Directory holding the tables
    #[arg(short, long, default_value = "./data", global = true)]
    data_dir: PathBuf,

    /// Table format under the data directory
    #[arg(long, default_value_t = Backend::Json, global = true)]
    backend: Backend,

    /// Learned-synonym knowledge base (overrides the config file)
    #[arg(long, global = true)]
    synonyms: Option<PathBuf>,

    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tiered scored search across all component tables
    Search {
        /// Query object as JSON, or `-` for stdin
        query: String,
        #[arg(long)]
        max_results: Option<usize>,
        /// Narrow to `<type>_specs` when that table exists
        #[arg(long)]
        component_type: Option<String>,
        /// Drop constraints one at a time until something matches
        #[arg(long)]
        relax: bool,
    },
    /// Exact/prefix search over the single valve_specs table
    Legacy {
        /// Query object as JSON, or `-` for stdin
        query: String,
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Print the canonical form of a query
    Normalize {
        /// Query object as JSON, or `-` for stdin
        query: String,
        #[arg(long)]
        component_type: Option<String>,
    },
    /// Print every stored spelling compatible with a value
    Expand { category: Category, value: String },
    /// Print the canonical group of a value
    Classify { category: Category, value: String },
    /// Group the distinct stored values of one attribute
    Analyze {
        category: Category,
        /// Limit to one table
        #[arg(long)]
        table: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.synonyms.is_some() {
        config.synonyms = args.synonyms.clone();
    }

    match args.command {
        Command::Search {
            query,
            max_results,
            component_type,
            relax,
        } => {
            let store = open_store(args.backend, &args.data_dir)?;
            let matcher = config.build_matcher(&store)?;
            let mut options = config.search_options();
            if let Some(n) = max_results {
                options.max_results = n;
            }
            options.component_type = component_type;

            let raw = read_query(&query)?;
            if relax {
                let canonical = matcher.normalize(&raw, &options);
                let response = search_relaxed(matcher.tiered(), &canonical, &options)?;
                info!(returned = response.response.result.len(), dropped = response.dropped.len(), "search done");
                print_json(&response)?;
            } else {
                let response = matcher.search_raw_with_stats(&raw, &options)?;
                info!(returned = response.result.len(), "search done");
                print_json(&response)?;
            }
        }
        Command::Legacy { query, max_results } => {
            let store = open_store(args.backend, &args.data_dir)?;
            let matcher = config.build_matcher(&store)?;
            let raw = read_query(&query)?;
            let response = matcher.search_legacy_raw(&raw, max_results.unwrap_or(config.max_results))?;
            print_json(&response)?;
        }
        Command::Normalize { query, component_type } => {
            let normalizer = config.normalizer()?;
            let raw = read_query(&query)?;
            print_json(&normalizer.normalize(&raw, component_type.as_deref()))?;
        }
        Command::Expand { category, value } => {
            let catalog = CompatibilityCatalog::builtin();
            let forms = if category == Category::Size {
                vec![normalize(category, &value).as_text().unwrap_or_default().to_string()]
            } else {
                catalog.expand(category, &value)
            };
            print_json(&forms)?;
        }
        Command::Classify { category, value } => {
            print_json(&classify(category, &value))?;
        }
        Command::Analyze { category, table } => {
            let store = open_store(args.backend, &args.data_dir)?;
            let names = match table {
                Some(name) => vec![name],
                None => store.catalog.table_names()?,
            };

            let mut values = Vec::new();
            for name in &names {
                for record in store.catalog.open(name)?.scan()? {
                    values.extend(stored_values(&record, category));
                }
            }
            info!(tables = names.len(), values = values.len(), %category, "values collected");
            print_json(&suggest_groups(category, values))?;
        }
    }

    Ok(())
}

fn read_query(arg: &str) -> anyhow::Result<RawQuery> {
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        arg.to_string()
    };
    let value: serde_json::Value = serde_json::from_str(&text).context("query is not valid JSON")?;
    Ok(RawQuery::from_json(&value)?)
}

/// Stored values of one attribute, as the search paths read them
fn stored_values(record: &CandidateRecord, category: Category) -> Vec<String> {
    let attrs = &record.attributes;
    let values: Vec<&str> = match category {
        Category::Size => attrs.size.as_deref().into_iter().collect(),
        Category::ValveType => attrs
            .item
            .as_deref()
            .or(record.component_type.as_deref())
            .into_iter()
            .collect(),
        Category::PressureRating => attrs.pressure_text().into_iter().collect(),
        Category::Material => attrs.body_material.as_deref().into_iter().collect(),
        Category::SeatMaterial => attrs.seat_material.as_deref().into_iter().collect(),
        Category::EndConnection => attrs.connections().collect(),
    };
    values.into_iter().map(str::to_string).collect()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
