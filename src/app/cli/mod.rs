//! CLI Adapter.

mod create;
mod deploy;

use crate::domain::{AppError, DEFAULT_DEPLOY_PATH, DEFAULT_PROJECT_NAME};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kn-workflow")]
#[command(version)]
#[command(
    about = "Scaffold serverless workflow projects and deploy them to Knative",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new workflow project
    #[clap(visible_alias = "c")]
    Create {
        /// Project name, also used as the directory name
        #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
        name: String,
        /// Comma-separated list of extra Quarkus extensions
        #[arg(short, long, default_value = "")]
        extension: String,
    },
    /// Write a starter workflow definition file
    #[clap(visible_alias = "cw")]
    CreateWorkflow {
        /// Target file (.json, .yaml, or .yml)
        #[arg(default_value = "./workflow.sw.json")]
        path: PathBuf,
    },
    /// Apply the Knative service and eventing bindings produced by the build
    #[clap(visible_alias = "d")]
    Deploy {
        /// Directory containing the generated manifests
        #[arg(short, long, default_value = DEFAULT_DEPLOY_PATH)]
        path: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Create { name, extension } => create::run_create(name, extension),
        Commands::CreateWorkflow { path } => create::run_create_workflow(&path),
        Commands::Deploy { path } => deploy::run_deploy(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
