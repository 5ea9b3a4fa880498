//! Spark CLI - terminal mockup of an AI-agent search and marketplace

use clap::{Parser, Subcommand};
use spark_core::catalog::{self, CATALOG, CategoryFilter};
use spark_core::config::Config;
use spark_core::contribute::{Permission, SubmissionForm, submitted_agents};
use spark_core::export::{self, ExportFormat};
use spark_core::profile::mock_user;
use spark_core::session::{MockBackend, Mode};
use spark_core::suggest;
use tracing::debug;

#[derive(Parser)]
#[command(name = "spark")]
#[command(author, version, about = "AI-agent search and marketplace mockup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the agent catalog
    Agents {
        #[command(subcommand)]
        action: AgentAction,
    },

    /// Print suggestions for a query
    Suggest {
        /// Query text
        query: String,
    },

    /// Run a query through the mock backend
    Run {
        /// Query text
        query: String,
        /// Mode (search or agent)
        #[arg(short, long, default_value = "search")]
        mode: String,
    },

    /// Show the mock user profile and task history
    Profile,

    /// Show the mock submission dashboard
    Submissions,

    /// Validate and mock-submit a new agent
    Submit {
        /// Agent name
        #[arg(long)]
        name: String,
        /// What the agent does
        #[arg(long)]
        description: String,
        /// Supported tasks (comma separated)
        #[arg(long)]
        tasks: String,
        /// Required permission (repeatable: calendar, email, filesystem, network)
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum AgentAction {
    /// List all agents
    List {
        /// Filter by category (all, productivity, travel, finance, social)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Search agents by name or description
    Search {
        /// Search term
        term: String,
        /// Filter by category
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Show agent details
    Show { id: u32 },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spark=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Agents { action } => cmd_agents(action, cli.format, cli.quiet),

        Commands::Suggest { query } => cmd_suggest(&query, cli.format),

        Commands::Run { query, mode } => cmd_run(&query, &mode, cli.format, cli.quiet).await,

        Commands::Profile => cmd_profile(cli.format),

        Commands::Submissions => cmd_submissions(cli.format),

        Commands::Submit {
            name,
            description,
            tasks,
            permissions,
        } => cmd_submit(name, description, tasks, &permissions, cli.quiet),

        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn parse_category(s: &str) -> anyhow::Result<CategoryFilter> {
    CategoryFilter::parse(s).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown category: {}. Valid options: all, productivity, travel, finance, social",
            s
        )
    })
}

fn cmd_agents(action: AgentAction, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match action {
        AgentAction::List { category } => {
            let filter = parse_category(&category)?;
            print_agents(&catalog::filter_catalog(CATALOG, "", filter), format, quiet)
        }
        AgentAction::Search { term, category } => {
            let filter = parse_category(&category)?;
            print_agents(
                &catalog::filter_catalog(CATALOG, &term, filter),
                format,
                quiet,
            )
        }
        AgentAction::Show { id } => {
            let agent = catalog::find_agent(id)
                .ok_or_else(|| spark_core::Error::AgentNotFound(id.to_string()))?;

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(agent)?);
                return Ok(());
            }

            println!("{} {}", agent.icon, agent.name);
            println!("  Creator: {}", agent.creator);
            println!("  Category: {}", agent.category.as_str());
            println!("  Rating: {} ({} installs)", agent.rating, agent.installs);
            println!("  {}", agent.description);
            println!("  Tasks: {}", agent.tasks.join(", "));
            Ok(())
        }
    }
}

fn print_agents(
    agents: &[&catalog::CatalogAgent],
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(agents)?);
        return Ok(());
    }

    if agents.is_empty() {
        if !quiet {
            println!("No agents found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Agents:");
    }
    for agent in agents {
        println!(
            "  {} {} - {} ({}, {} ★)",
            agent.id,
            agent.name,
            agent.category.as_str(),
            agent.creator,
            agent.rating
        );
    }
    Ok(())
}

fn cmd_suggest(query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let suggestions = suggest::suggestions(query);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions.");
    } else {
        for suggestion in suggestions {
            println!("  {}", suggestion);
        }
    }
    Ok(())
}

async fn cmd_run(
    query: &str,
    mode: &str,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    if query.trim().is_empty() {
        // Mirrors the UI: blank submissions are a no-op
        if !quiet {
            println!("Nothing to run: query is empty.");
        }
        return Ok(());
    }

    let mode = Mode::parse(mode)
        .ok_or_else(|| anyhow::anyhow!("Unknown mode: {}. Valid options: search, agent", mode))?;

    let config = Config::load()?;
    let backend = MockBackend::new(config.timing.execute_delay());
    debug!(mode = mode.as_str(), delay_ms = config.timing.execute_delay_ms, "dispatching mock run");

    if !quiet && format == OutputFormat::Text {
        match mode {
            Mode::Search => println!("Searching for results..."),
            Mode::Agent => println!("Running your task..."),
        }
    }

    let results = backend.run(mode, query).await;

    if format == OutputFormat::Json {
        println!(
            "{}",
            export::render_results(&results, query, ExportFormat::Json)
        );
    } else {
        println!(
            "{}",
            export::render_results(&results, query, ExportFormat::PlainText)
        );
    }
    Ok(())
}

fn cmd_profile(format: OutputFormat) -> anyhow::Result<()> {
    let user = mock_user();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("{} <{}>", user.name, user.email);
    println!("  Plan: {}", user.plan);
    println!("\nTask History:");
    for task in &user.tasks {
        println!("  {} - {} [{}]", task.date, task.query, task.badge());
    }
    Ok(())
}

fn cmd_submissions(format: OutputFormat) -> anyhow::Result<()> {
    let agents = submitted_agents();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }

    println!("Your Agents:");
    for agent in &agents {
        println!("  {} [{}]", agent.name, agent.status.badge());
        println!("    {}", agent.description);
        if agent.status == spark_core::contribute::SubmissionStatus::Approved {
            println!("    {} uses, {} ★", agent.usage_count, agent.rating);
        }
    }
    Ok(())
}

fn cmd_submit(
    name: String,
    description: String,
    tasks: String,
    permissions: &[String],
    quiet: bool,
) -> anyhow::Result<()> {
    let mut form = SubmissionForm::new();
    form.name = name;
    form.description = description;
    form.tasks = tasks;

    for raw in permissions {
        let permission = match raw.to_lowercase().as_str() {
            "calendar" => Permission::Calendar,
            "email" => Permission::Email,
            "filesystem" => Permission::FileSystem,
            "network" => Permission::Network,
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown permission: {}. Valid options: calendar, email, filesystem, network",
                    other
                ));
            }
        };
        if !form.has_permission(permission) {
            form.toggle_permission(permission);
        }
    }

    form.submit()?;

    if !quiet {
        println!("Your agent has been submitted successfully and is pending review.");
        println!("  Name: {}", form.name);
        println!("  Tasks: {}", form.parsed_tasks().join(", "));
    }
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}
