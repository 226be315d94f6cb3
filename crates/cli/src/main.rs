#![forbid(unsafe_code)]

mod commands;
mod config;
mod menu;
mod plot;
mod prompt;
mod render;
mod telemetry;

use anyhow::Context as _;
use clap::Parser as _;
use commands::CommandError;
use config::{Args, Command};
use sg_core::model::Status;
use sg_storage::{SqliteStore, StatusFilter, StudentOrder};
use std::io::Write;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    telemetry::init_tracing(&args.log_filter)?;

    let mut store = SqliteStore::open(&args.storage_dir).with_context(|| {
        format!("failed to open store in {}", args.storage_dir.display())
    })?;
    tracing::debug!(storage_dir = %args.storage_dir.display(), "store ready");

    let Some(command) = args.command else {
        let stdin = std::io::stdin();
        let mut prompt = prompt::Prompt::new(stdin.lock(), std::io::stdout().lock());
        menu::run(&mut store, &mut prompt)?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut out = std::io::stdout().lock();
    match run_one_shot(&mut store, &mut out, command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            commands::report(&mut out, err)?;
            out.flush()?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_one_shot(
    store: &mut SqliteStore,
    out: &mut impl Write,
    command: Command,
) -> Result<(), CommandError> {
    match command {
        Command::Seed => commands::load_seed(store, out),
        Command::AddStudent { first, last, sgpa } => {
            let sgpa = commands::parse_sgpa(&sgpa)?;
            commands::add_student(store, out, &first, &last, sgpa)
        }
        Command::BlacklistStudent { roll_no } => {
            let roll_no = commands::parse_roll_no(&roll_no)?;
            commands::set_student_status(store, out, roll_no, Status::Blacklisted)
        }
        Command::ActivateStudent { roll_no } => {
            let roll_no = commands::parse_roll_no(&roll_no)?;
            commands::set_student_status(store, out, roll_no, Status::Active)
        }
        Command::Students { filter, ranked } => {
            let order = if ranked {
                StudentOrder::SgpaDesc
            } else {
                StudentOrder::Insertion
            };
            commands::show_students(store, out, StatusFilter::from(filter), order)
        }
        Command::FormGroups => commands::form_groups(store, out),
        Command::Groups { filter } => match StatusFilter::from(filter) {
            StatusFilter::All => commands::show_group_details(store, out),
            StatusFilter::Active => commands::show_active_groups(store, out),
            StatusFilter::Blacklisted => commands::show_blacklisted_groups(store, out),
        },
        Command::RankGroups => commands::show_ranked_groups(store, out),
        Command::BlacklistGroup { group_id } => {
            let group_id = commands::parse_group_id(&group_id)?;
            commands::set_group_status(store, out, group_id, Status::Blacklisted)
        }
        Command::ActivateGroup { group_id } => {
            let group_id = commands::parse_group_id(&group_id)?;
            commands::set_group_status(store, out, group_id, Status::Active)
        }
        Command::Plot => commands::show_plot(store, out),
    }
}
