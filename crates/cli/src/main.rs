//! qhier CLI - Inspect queue hierarchies built from deprecated mapred queue keys

mod access;
mod check;
mod logging;
mod render;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use qhier_core::domain::QueueOperation;
use qhier_core::{DeprecatedQueueConfigParser, QueueConfigurationParser};

use access::{check_access, AccessDecision, AccessRequest};
use check::{check_status, CheckStatus};

#[derive(Parser)]
#[command(name = "qhier")]
#[command(about = "Inspect queue hierarchies built from deprecated mapred queue keys", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML, YAML, JSON or INI). Defaults to the per-user queues.toml
    #[arg(short, long, global = true, env = "QHIER_CONFIG")]
    config: Option<PathBuf>,

    /// Ignore QHIER_CONF_* environment overrides
    #[arg(long, global = true)]
    no_env: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the queue hierarchy
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
    },

    /// Report deprecated keys (exit code 1 when any are set)
    Check,

    /// Check whether a user may perform an operation on a queue
    CheckAccess {
        /// Queue name
        #[arg(short, long)]
        queue: String,

        /// Operation (submit-job, administer-jobs)
        #[arg(short, long, default_value = "submit-job")]
        operation: QueueOperation,

        /// User name
        #[arg(short, long)]
        user: String,

        /// Group the user belongs to (repeatable)
        #[arg(short, long = "group")]
        groups: Vec<String>,

        /// The user owns the job being administered
        #[arg(long)]
        job_owner: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tree,
    Table,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    let source = source::load_source(cli.config.as_deref(), !cli.no_env)?;
    debug!(keys = source.entries().len(), "Configuration snapshot ready");

    let parser = DeprecatedQueueConfigParser::new(&source);

    match cli.command {
        Commands::Show { format } => {
            if let OutputFormat::Json = format {
                println!("{}", render::render_json(&parser)?);
                return Ok(ExitCode::SUCCESS);
            }

            let Some(root) = parser.root() else {
                println!(
                    "{}",
                    "No deprecated queue configuration (mapred.queue.names is not set)".yellow()
                );
                return Ok(ExitCode::SUCCESS);
            };

            match format {
                OutputFormat::Table => println!("{}", render::render_table(root)),
                _ => print!("{}", render::render_tree(root, parser.acls_enabled())),
            }

            if !parser.skipped_queues().is_empty() {
                println!();
                println!(
                    "{} {}",
                    "Skipped queues:".red().bold(),
                    parser.skipped_queues().join(", ")
                );
            }
        }

        Commands::Check => {
            let status = check_status(&parser);
            match status {
                CheckStatus::Clean => {
                    println!("{}", "✓ No deprecated queue configuration".green().bold());
                }
                CheckStatus::Deprecated => {
                    print!("{}", render::render_warnings(parser.warnings()));
                }
            }
            return Ok(status.exit_code());
        }

        Commands::CheckAccess {
            queue,
            operation,
            user,
            groups,
            job_owner,
        } => {
            let req = AccessRequest {
                queue: &queue,
                operation,
                user: &user,
                groups: &groups,
                job_owner,
            };

            match check_access(&parser, &req)? {
                AccessDecision::Allowed(reason) => {
                    println!("{} {}", "✓ Allowed:".green().bold(), reason);
                }
                AccessDecision::Denied(reason) => {
                    println!("{} {}", "✗ Denied:".red().bold(), reason);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
