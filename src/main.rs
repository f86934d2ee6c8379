//! clickup-mcp: stdio tool server and one-shot CLI for ClickUp lists

use anyhow::Context;
use clap::{Parser, Subcommand};
use clickup_api::HttpExecutor;
use clickup_core::{NodeKind, ScopeRef, ServiceConfig};
use clickup_hierarchy::Resolver;
use clickup_mcp::serve;
use clickup_tools::{create_default_registry, ServiceContext};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "clickup-mcp",
    version,
    about = "ClickUp list tools over stdio JSON-RPC"
)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true, default_value = "clickup-mcp.toml")]
    config: PathBuf,
    /// API token, overrides config and CLICKUP_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,
    /// Workspace (team) id, overrides config and CLICKUP_TEAM_ID
    #[arg(long, global = true)]
    team_id: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tools over stdin/stdout (default)
    Serve,
    /// Resolve a name to an id and print the match as JSON
    Resolve {
        /// workspace, space, folder or list
        kind: String,
        name: String,
        #[arg(long)]
        scope_kind: Option<String>,
        #[arg(long, conflicts_with = "scope_name")]
        scope_id: Option<String>,
        #[arg(long)]
        scope_name: Option<String>,
    },
    /// Print the tool definitions
    Tools,
    /// Print the effective configuration with the api key redacted
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol stream, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "clickup_mcp=info,clickup_api=info,clickup_hierarchy=info,clickup_tools=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = effective_config(&cli);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            config.validate()?;
            let registry = create_default_registry(context(config)?);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            serve(stdin, tokio::io::stdout(), &registry).await?;
        }

        Commands::Resolve {
            kind,
            name,
            scope_kind,
            scope_id,
            scope_name,
        } => {
            config.validate()?;
            let kind = parse_kind(&kind)?;
            let scope = match scope_kind {
                Some(scope_kind) => {
                    let scope_kind = parse_kind(&scope_kind)?;
                    match (scope_id, scope_name) {
                        (Some(id), _) => Some(ScopeRef::id(scope_kind, id)),
                        (None, Some(name)) => Some(ScopeRef::name(scope_kind, name)),
                        (None, None) => anyhow::bail!("--scope-kind needs --scope-id or --scope-name"),
                    }
                }
                None => None,
            };

            let executor = Arc::new(HttpExecutor::from_config(&config)?);
            let resolver = Resolver::new(executor, config.team_id.clone());
            let found = resolver.resolve_id(kind, &name, scope).await?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }

        Commands::Tools => {
            let registry = create_default_registry(context(config)?);
            println!("{}", serde_json::to_string_pretty(&registry.get_definitions())?);
        }

        Commands::Config => {
            print!("{}", config.to_redacted_toml());
        }
    }

    Ok(())
}

/// File, then environment, then command-line flags.
fn effective_config(cli: &Cli) -> ServiceConfig {
    let mut config = ServiceConfig::load(&cli.config).with_env_overrides();
    if let Some(key) = &cli.api_key {
        config.api_key = key.clone();
    }
    if let Some(team) = &cli.team_id {
        config.team_id = team.clone();
    }
    config
}

fn context(config: ServiceConfig) -> anyhow::Result<Arc<ServiceContext>> {
    let executor = Arc::new(HttpExecutor::from_config(&config)?);
    Ok(Arc::new(ServiceContext::new(config, executor)))
}

fn parse_kind(raw: &str) -> anyhow::Result<NodeKind> {
    NodeKind::parse(raw)
        .with_context(|| format!("unknown kind \"{}\" (expected workspace, space, folder or list)", raw))
}
