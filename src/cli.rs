use std::path::PathBuf;

use crate::config::{DEFAULT_USAGE_FILE, DEFAULT_USERS_FILE, StoreConfig};
use crate::utils::parse_cost;

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Verify a user's email and password
    Auth {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Append a usage event for a user
    LogUsage {
        #[arg(long)]
        email: String,
        /// Number of questions asked in this session
        #[arg(long = "questions")]
        question_count: u64,
        /// Estimated cost in USD
        #[arg(long = "cost", value_parser = parse_cost)]
        cost_estimate: f64,
    },

    /// Per-user usage totals
    Stats,

    /// List users without their credentials
    Users,

    /// Create a user with a bcrypt-hashed password
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Rebuild the users table from a roster CSV (Email, Password columns)
    Provision {
        #[arg(long)]
        source: PathBuf,
    },

    /// Report liveness
    Health,
}

#[derive(clap::Parser, Debug)]
#[command(name = "usage-gate", version, about = "Credential checks and usage logging over CSV tables")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Credential table location
    #[arg(long, global = true, env = "USAGE_GATE_USERS_FILE", default_value = DEFAULT_USERS_FILE)]
    pub users_file: PathBuf,

    /// Usage table location
    #[arg(long, global = true, env = "USAGE_GATE_USAGE_FILE", default_value = DEFAULT_USAGE_FILE)]
    pub usage_file: PathBuf,

    /// bcrypt work factor for new hashes (4-31)
    #[arg(long, global = true, env = "USAGE_GATE_BCRYPT_COST", default_value_t = bcrypt::DEFAULT_COST,
          value_parser = clap::value_parser!(u32).range(4..=31))]
    pub bcrypt_cost: u32,

    /// Emit JSON instead of colored text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug detail to stderr (or set RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.users_file, &self.usage_file).with_bcrypt_cost(self.bcrypt_cost)
    }
}
