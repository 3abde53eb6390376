//! CLI frontend for the Diviso group dice engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use diviso_dice::Member;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "diviso",
    about = "Diviso group dice: roll for what to do, eat, spend, or who pays",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    group: ContextArgs,
}

/// Group context flags shared by every command.
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// JSON file with the group context (flags below override its fields)
    #[arg(short, long = "context", global = true)]
    pub context_file: Option<PathBuf>,

    /// Display locale: ar or en
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Group type (e.g. friends, trip, work)
    #[arg(short, long, global = true)]
    pub group_type: Option<String>,

    /// Group member as `id:name` or just `name` (repeatable)
    #[arg(short, long = "member", global = true, value_parser = parse_member)]
    pub members: Vec<Member>,

    /// The group has unsettled debts (`--open-debts=false` clears it)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub open_debts: Option<bool>,

    /// The group has recorded expenses (`--has-expenses=false` clears it)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub has_expenses: Option<bool>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dice types available to the group
    Types,

    /// Show the suggested dice type for the group
    Suggest,

    /// Show the six faces of a dice type
    Faces {
        /// Dice type: activity, cuisine, budget, payer, task
        dice_type: String,
    },

    /// Roll a die and show the resulting action
    Roll {
        /// Dice type (default: the suggested one)
        dice_type: Option<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the outcome and action as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_member(s: &str) -> Result<Member, String> {
    let s = s.trim();
    let (id, name) = match s.split_once(':') {
        Some((id, name)) => (id.trim(), name.trim()),
        None => (s, s),
    };
    if id.is_empty() || name.is_empty() {
        return Err(format!("invalid member '{s}', expected id:name"));
    }
    Ok(Member::new(id, name))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DIVISO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    tracing::info!("starting diviso");

    let result = commands::build_context(&cli.group).and_then(|ctx| match cli.command {
        Commands::Types => commands::types::run(&ctx),
        Commands::Suggest => commands::suggest::run(&ctx),
        Commands::Faces { dice_type } => commands::faces::run(&ctx, &dice_type),
        Commands::Roll {
            dice_type,
            seed,
            json,
        } => commands::roll::run(&ctx, dice_type.as_deref(), seed, json),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
