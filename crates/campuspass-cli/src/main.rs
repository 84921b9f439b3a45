//! Campuspass CLI - issue and validate campus check-in credentials.

use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod error;
mod logging;
mod output;

use campuspass_core::Role;
use commands::{campuses, inspect, issue, validate};

#[derive(Parser)]
#[command(name = "campuspass")]
#[command(about = "Campus check-in credential issuance and validation CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a credential for an event at a campus
    Issue {
        /// Event identifier
        #[arg(long)]
        event_id: u64,
        /// Event title
        #[arg(long)]
        title: String,
        /// Issuing campus code
        #[arg(long, default_value = "SNSU")]
        campus: String,
        /// Mark the event as open to multiple campuses
        #[arg(long)]
        multi_campus: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a scanned code
    Validate {
        /// Scanned code text
        code: String,
        /// Caller's current campus code (ignored with --context)
        #[arg(long, default_value = "SNSU")]
        campus: String,
        /// Caller's role (ignored with --context)
        #[arg(long, value_enum, default_value_t = RoleArg::Student)]
        role: RoleArg,
        /// Campus ids assigned to a campus admin, comma separated
        #[arg(long, value_delimiter = ',')]
        accessible: Vec<u32>,
        /// JSON file with the full caller context
        #[arg(long)]
        context: Option<String>,
        /// JSON file with the expected event
        #[arg(long, conflicts_with = "expect_event_id")]
        event: Option<String>,
        /// Expected event id
        #[arg(long, requires = "expect_campus_id")]
        expect_event_id: Option<u64>,
        /// Expected event's hosting campus id
        #[arg(long, requires = "expect_event_id")]
        expect_campus_id: Option<u32>,
        /// JSON file with validator configuration
        #[arg(long)]
        config: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the credential is rejected
        #[arg(long)]
        strict: bool,
    },
    /// Show how a code is classified and parsed, without authorization
    Inspect {
        /// Scanned code text
        code: String,
    },
    /// List registered campuses
    Campuses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Student,
    Organizer,
    CampusAdmin,
    SuperAdmin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Student => Role::Student,
            RoleArg::Organizer => Role::Organizer,
            RoleArg::CampusAdmin => Role::CampusAdmin,
            RoleArg::SuperAdmin => Role::SuperAdmin,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Issue {
            event_id,
            title,
            campus,
            multi_campus,
            json,
        } => issue::run(event_id, title, campus, multi_campus, json),
        Commands::Validate {
            code,
            campus,
            role,
            accessible,
            context,
            event,
            expect_event_id,
            expect_campus_id,
            config,
            json,
            strict,
        } => validate::run(validate::Args {
            code,
            campus,
            role: role.into(),
            accessible,
            context,
            event,
            expected: expect_event_id.zip(expect_campus_id),
            config,
            json,
            strict,
        }),
        Commands::Inspect { code } => inspect::run(code),
        Commands::Campuses { json } => campuses::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
