use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use usage_gate::cli::{Args, Command};
use usage_gate::display::{
    print_auth, print_error, print_health, print_json, print_stats, print_status, print_users,
};
use usage_gate::models::StatusResponse;
use usage_gate::provision::provision;
use usage_gate::{Backend, Error};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.store_config();
    debug!(
        users = %config.users_path.display(),
        usage = %config.usage_path.display(),
        "resolved tables"
    );
    let backend = Backend::new(config);

    match run(&backend, &args) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<Error>() {
            Some(err) => {
                print_error(err, args.json)?;
                Ok(ExitCode::from(err.exit_code()))
            }
            None => Err(e),
        },
    }
}

/// Execute one subcommand. Service errors come back as [`Error`] inside the
/// `anyhow::Error` so `main` can render them.
fn run(backend: &Backend, args: &Args) -> Result<()> {
    let json = args.json;

    match &args.command {
        Command::Auth { email, password } => {
            let resp = backend.authenticate(email, password)?;
            if json {
                print_json(&resp)?;
            } else {
                print_auth(&resp);
            }
        }
        Command::LogUsage {
            email,
            question_count,
            cost_estimate,
        } => {
            let resp = backend.record_usage(email, *question_count, *cost_estimate)?;
            if json {
                print_json(&resp)?;
            } else {
                print_status(&resp);
            }
        }
        Command::Stats => {
            let stats = backend.compute_stats()?;
            if json {
                print_json(&stats)?;
            } else {
                print_stats(&stats);
            }
        }
        Command::Users => {
            let users = backend.list_users()?;
            if json {
                print_json(&users)?;
            } else {
                print_users(&users);
            }
        }
        Command::CreateUser { email, password } => {
            let resp = backend.create_user(email, password)?;
            if json {
                print_json(&resp)?;
            } else {
                print_status(&resp);
            }
        }
        Command::Provision { source } => {
            let cfg = backend.config();
            let count = provision(source, &cfg.users_path, cfg.bcrypt_cost)?;
            let resp = StatusResponse {
                status: "provisioned".to_string(),
                message: format!("Wrote {count} users to {}", cfg.users_path.display()),
            };
            if json {
                print_json(&resp)?;
            } else {
                print_status(&resp);
            }
        }
        Command::Health => {
            let report = backend.health();
            if json {
                print_json(&report)?;
            } else {
                print_health(&report);
            }
        }
    }
    Ok(())
}
