//! edge-routes
//!
//! Derives edge routes for multi-environment worker deployments.
//!
//! ```text
//!   edge-routes.toml ──▶ config ──▶ routing ──▶ emit ──▶ routes.toml
//!                        loader     mapper      builder   routes.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};

use edge_routes::config::{load_config, ProjectConfig};
use edge_routes::emit::validate_toml_syntax;
use edge_routes::generate::{write_files, GenerationInput, Pipeline};
use edge_routes::observability::init_logging;
use edge_routes::routing::RouteMapper;

#[derive(Parser)]
#[command(name = "edge-routes")]
#[command(about = "Derive edge routes for worker deployments", long_about = None)]
struct Cli {
    /// Log level, overriding the project file (RUST_LOG wins over both).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route patterns for one environment
    Map {
        #[arg(short, long, default_value = "edge-routes.toml")]
        config: PathBuf,
        #[arg(short, long, default_value = "production")]
        env: String,
        /// Print the full mapping result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate the route fragment and manifest
    Generate {
        #[arg(short, long, default_value = "edge-routes.toml")]
        config: PathBuf,
        /// Output directory (defaults to `output.directory`)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        no_comments: bool,
        /// Print the route fragment instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Check the syntax of a route configuration file
    Validate { file: PathBuf },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Map { config, env, json } => {
            let project = load(&config, cli.log_level.as_deref())?;
            let mapper = RouteMapper::new(&project.policy);
            let result = mapper.map_domain_to_routes(&project.service, &env);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for pattern in &result.patterns {
                    println!("{pattern}");
                }
            }
        }
        Commands::Generate {
            config,
            out,
            no_comments,
            stdout,
        } => {
            let mut project = load(&config, cli.log_level.as_deref())?;
            if no_comments {
                project.output.include_comments = false;
            }

            let input = GenerationInput::resolve(&project, Utc::now())?;
            let files = Pipeline::standard().run(&input)?;

            tracing::info!(
                service = %input.service_name,
                routes = input.route_count(),
                files = files.len(),
                "Generation complete"
            );

            if stdout {
                if let Some(fragment) = files.iter().find(|f| f.path == Path::new("routes.toml")) {
                    print!("{}", fragment.content);
                }
            } else {
                let dir = out.unwrap_or_else(|| PathBuf::from(&project.output.directory));
                for path in write_files(&dir, &files)? {
                    println!("{}", path.display());
                }
            }
        }
        Commands::Validate { file } => {
            init_logging(cli.log_level.as_deref().unwrap_or("info"));
            let text = fs::read_to_string(&file)?;
            let report = validate_toml_syntax(&text);

            if !report.valid {
                for error in &report.errors {
                    eprintln!("{}: {error}", file.display());
                }
                return Ok(ExitCode::FAILURE);
            }
            println!("{}: ok", file.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the project file, then start logging at the resolved level.
fn load(path: &Path, log_level: Option<&str>) -> Result<ProjectConfig, Box<dyn std::error::Error>> {
    let project = load_config(path)?;
    init_logging(log_level.unwrap_or(&project.observability.log_level));

    tracing::info!(
        path = %path.display(),
        service = %project.service.name,
        "Configuration loaded"
    );
    Ok(project)
}
