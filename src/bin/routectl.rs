use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use route_registry::config::{load_config, ObservabilityConfig, RouterConfig};
use route_registry::lifecycle::bootstrap;
use route_registry::observability::logging::init_logging;
use route_registry::route::{ModuleDescriptor, RouteRef};
use route_registry::security::StaticSession;

#[derive(Parser)]
#[command(name = "routectl")]
#[command(about = "Inspect and resolve a module route manifest", long_about = None)]
struct Cli {
    /// Route manifest (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest and print a summary
    Check,
    /// Print the attached route forest
    Routes,
    /// Resolve pathnames to their layout behavior
    Resolve {
        paths: Vec<String>,
        /// Evaluate the access guard as an authenticated user
        #[arg(long)]
        authenticated: bool,
        /// Roles held by the simulated user
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// Print the compiled render tree as JSON
    Tree,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The manifest carries the log level; report its load error after logging is up.
    let config = load_config(&cli.config);
    let level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.observability.log_level.clone()))
        .unwrap_or_else(|| ObservabilityConfig::default().log_level);
    init_logging(&ObservabilityConfig { log_level: level });

    let config: RouterConfig = config?;
    let boot = bootstrap(&config, std::iter::empty::<ModuleDescriptor>())?;
    let registry = &boot.registry;

    match cli.command {
        Commands::Check => {
            print_json(&json!({
                "modules": registry.module_names().collect::<Vec<_>>(),
                "top_level_routes": registry.all_routes().len(),
                "nodes": boot.routes.node_count(),
                "partitions": {
                    "none": boot.routes.none.len(),
                    "auth": boot.routes.auth.len(),
                    "protected": boot.routes.protected.nodes.len(),
                },
            }))?;
        }
        Commands::Routes => {
            let modules: Vec<Value> = registry
                .modules()
                .map(|m| {
                    json!({
                        "name": m.name(),
                        "routes": m.routes().iter().map(route_json).collect::<Vec<_>>(),
                    })
                })
                .collect();
            print_json(&Value::Array(modules))?;
        }
        Commands::Resolve {
            paths,
            authenticated,
            roles,
        } => {
            let session = if authenticated {
                StaticSession::authenticated(roles)
            } else {
                StaticSession::anonymous()
            };

            let results: Vec<Value> = paths
                .iter()
                .map(|path| {
                    let found = registry.resolve(path);
                    let guard = boot.routes.protected.authorize(&session, path);
                    json!({
                        "path": path,
                        "behavior": registry.resolve_behavior(path),
                        "module": found.map(|m| m.module),
                        "pattern": found.map(|m| m.route.path()),
                        "guard": guard.map(|d| match d.redirect_target() {
                            Some(to) => json!({ "redirect": to }),
                            None => json!("allow"),
                        }),
                    })
                })
                .collect();
            print_json(&Value::Array(results))?;
        }
        Commands::Tree => {
            print_json(&serde_json::to_value(&boot.routes)?)?;
        }
    }

    Ok(())
}

fn route_json(route: &RouteRef<'_>) -> Value {
    json!({
        "path": route.path(),
        "layout_kind": route.layout_kind(),
        "behavior": route.behavior(),
        "children": route.children().map(|c| route_json(&c)).collect::<Vec<_>>(),
    })
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
