use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use toolhub_core::{
    platform::detect_platform, Catalog, Category, Config, ExportFormat, Exporter, FilterState,
    LaunchAction, LaunchTable, LookupOutcome, LookupSimulator, NoDelay, Theme, TokioDelay,
    ToolDescriptor, UrlRule,
};
use toolhub_tui::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "toolhub")]
#[command(version, about = "Browse and launch media download and editing tools", long_about = None)]
struct Cli {
    /// Use this JSON tool list instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the terminal UI (the default)
    Tui,
    /// List tools, optionally filtered
    List {
        /// Category label or slug, e.g. "Image Tools" or image-tools
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive match on name, description or platform
        #[arg(short, long)]
        query: Option<String>,
        /// Output format: table, json, csv or md
        #[arg(short, long, default_value = "table")]
        format: String,
    },
    /// Show categories with tool counts
    Categories,
    /// Show what launching a tool would do
    Launch {
        /// Tool id
        id: u32,
    },
    /// Fetch (pretend to) video info for a URL
    Lookup {
        url: String,
        /// Skip the simulated network latency
        #[arg(long)]
        no_delay: bool,
        /// Print the metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the whole catalog to a file (format from the extension)
    Export {
        path: PathBuf,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Print where the config file lives
    Path,
    /// Write a default config file if none exists
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen, so it only gets to hear about real problems
    let default_filter = match cli.command {
        None | Some(Commands::Tui) => "toolhub=warn",
        Some(_) => "toolhub=info",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let catalog = load_catalog(cli.catalog.as_deref(), &config)?;

    match cli.command {
        None | Some(Commands::Tui) => run_tui(catalog, &config).await?,
        Some(Commands::List {
            category,
            query,
            format,
        }) => list(&catalog, category, query, &format)?,
        Some(Commands::Categories) => {
            for descriptor in toolhub_core::category_descriptors(catalog.tools()) {
                println!(
                    "{} {:<20} {}",
                    descriptor.category.icon(),
                    descriptor.category.label(),
                    descriptor.count
                );
            }
        }
        Some(Commands::Launch { id }) => {
            match LaunchTable::builtin().launch(&catalog, id)? {
                LaunchAction::Navigate(route) => println!("→ {}", route),
                action => {
                    if let Some(notice) = action.notice() {
                        println!("{}", notice);
                    }
                }
            }
        }
        Some(Commands::Lookup {
            url,
            no_delay,
            json,
        }) => lookup(&config, &url, no_delay, json).await?,
        Some(Commands::Export { path }) => {
            let tools: Vec<&ToolDescriptor> = catalog.tools().iter().collect();
            Exporter::export_to_file(&tools, &path)?;
            println!("Exported {} tools to {}", tools.len(), path.display());
        }
        Some(Commands::Config { action }) => config_command(&config, action)?,
    }

    Ok(())
}

/// `--catalog` beats the config file, which beats the built-in list
fn load_catalog(flag: Option<&Path>, config: &Config) -> anyhow::Result<Catalog> {
    match flag.or(config.catalog.path.as_deref()) {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

async fn run_tui(catalog: Catalog, config: &Config) -> anyhow::Result<()> {
    let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme '{}', falling back to Dark", config.ui.theme);
        Theme::default()
    });
    let simulator = LookupSimulator::new(
        UrlRule::youtube(),
        Arc::new(TokioDelay),
        config.lookup.latency(),
    );

    let app = App::new(catalog, LaunchTable::builtin(), simulator).with_theme(theme);
    toolhub_tui::run_tui(app, config.ui.mouse_enabled).await
}

fn list(
    catalog: &Catalog,
    category: Option<String>,
    query: Option<String>,
    format: &str,
) -> anyhow::Result<()> {
    let category = match category {
        Some(raw) => Category::parse(&raw)?,
        None => Category::All,
    };
    let filter = FilterState::new(query.unwrap_or_default(), category);
    let tools = toolhub_core::filter_tools(catalog.tools(), &filter);

    let format: ExportFormat = format.parse()?;
    print!("{}", Exporter::render(&tools, format)?);
    if format == ExportFormat::Table {
        println!("\n{}", toolhub_core::filter::results_summary(tools.len()));
    }
    Ok(())
}

async fn lookup(config: &Config, url: &str, no_delay: bool, json: bool) -> anyhow::Result<()> {
    let simulator = if no_delay {
        LookupSimulator::new(UrlRule::youtube(), Arc::new(NoDelay), config.lookup.latency())
    } else {
        LookupSimulator::new(UrlRule::youtube(), Arc::new(TokioDelay), config.lookup.latency())
    };

    if let Some(platform) = detect_platform(url) {
        tracing::info!("Looks like a {} link", platform);
    }

    match simulator.lookup(url).await {
        LookupOutcome::Found(metadata) if json => {
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        LookupOutcome::Found(metadata) => {
            println!("{}", metadata.title);
            println!(
                "{} · {} views · {} likes · {}",
                metadata.channel_name, metadata.view_count, metadata.like_count, metadata.upload_date
            );
            println!("Duration: {}", metadata.duration);
            println!("\n{}", metadata.description);
        }
        LookupOutcome::Invalid(message) => match detect_platform(url) {
            Some(platform) => anyhow::bail!("{} (that's a {} link)", message, platform),
            None => anyhow::bail!("{}", message),
        },
    }
    Ok(())
}

fn config_command(config: &Config, action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
        ConfigAction::Init => {
            let path = Config::config_path()?;
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("Wrote default config to {}", path.display());
            }
        }
    }
    Ok(())
}
