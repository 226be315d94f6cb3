#![forbid(unsafe_code)]

//! Operations behind both the menu and the one-shot subcommands.

use crate::{plot, render};
use sg_core::ids::{GroupId, RollNo};
use sg_core::model::{Sgpa, Status};
use sg_storage::{
    GroupOrder, InsertStudentRequest, ListGroupsRequest, ListStudentsRequest, SeedOutcome,
    SqliteStore, StatusFilter, StoreError, StudentOrder,
};
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error("{0}")]
    Validation(String),
    #[error("Not enough students.")]
    NotEnoughParticipants { found: usize },
    #[error("store error: {0}")]
    Store(StoreError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::InvalidSgpa(err) => Self::Validation(err.message().to_string()),
            StoreError::InvalidName(err) => {
                Self::Validation(format!("Invalid name: {}.", err.message()))
            }
            StoreError::NotEnoughParticipants { found } => Self::NotEnoughParticipants { found },
            other => Self::Store(other),
        }
    }
}

/// Prints a recoverable failure. Output errors are handed back to the caller.
pub(crate) fn report(out: &mut impl Write, err: CommandError) -> Result<(), CommandError> {
    match err {
        CommandError::Io(err) => Err(CommandError::Io(err)),
        CommandError::Store(err) => {
            tracing::error!(code = err.code(), error = %err, "store operation failed");
            writeln!(out, "Operation failed: {err}\n")?;
            Ok(())
        }
        CommandError::NotEnoughParticipants { found } => {
            tracing::debug!(found, "group formation needs more active students");
            writeln!(out, "Not enough students.\n")?;
            Ok(())
        }
        err @ CommandError::Validation(_) => {
            writeln!(out, "{err}\n")?;
            Ok(())
        }
    }
}

pub(crate) fn parse_roll_no(raw: &str) -> Result<RollNo, CommandError> {
    RollNo::parse(raw).map_err(|_| CommandError::Validation("Invalid Roll Number.".to_string()))
}

pub(crate) fn parse_group_id(raw: &str) -> Result<GroupId, CommandError> {
    GroupId::parse(raw).map_err(|_| CommandError::Validation("Invalid Group ID.".to_string()))
}

pub(crate) fn parse_sgpa(raw: &str) -> Result<Sgpa, CommandError> {
    Sgpa::parse(raw).map_err(|err| CommandError::Validation(err.message().to_string()))
}

pub(crate) fn load_seed(store: &mut SqliteStore, out: &mut impl Write) -> Result<(), CommandError> {
    match store.load_seed_data()? {
        SeedOutcome::Loaded(count) => writeln!(out, "{count} Sample Students Loaded.\n")?,
        SeedOutcome::AlreadyPresent => writeln!(out, "Data already exists.\n")?,
    }
    Ok(())
}

pub(crate) fn add_student(
    store: &mut SqliteStore,
    out: &mut impl Write,
    first_name: &str,
    last_name: &str,
    sgpa: Sgpa,
) -> Result<(), CommandError> {
    let roll_no = store.insert_student(InsertStudentRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        sgpa: sgpa.get(),
    })?;
    writeln!(out, "Student Added Successfully (Roll No: {roll_no}).\n")?;
    Ok(())
}

pub(crate) fn set_student_status(
    store: &mut SqliteStore,
    out: &mut impl Write,
    roll_no: RollNo,
    status: Status,
) -> Result<(), CommandError> {
    store.update_student_status(roll_no, status)?;
    match status {
        Status::Active => writeln!(out, "Student Activated.\n")?,
        Status::Blacklisted => writeln!(out, "Student Blacklisted.\n")?,
    }
    Ok(())
}

pub(crate) fn show_students(
    store: &SqliteStore,
    out: &mut impl Write,
    filter: StatusFilter,
    order: StudentOrder,
) -> Result<(), CommandError> {
    let rows = store.list_students(ListStudentsRequest { filter, order })?;
    let title = match (filter, order) {
        (_, StudentOrder::SgpaDesc) => "Rankwise Students",
        (StatusFilter::All, _) => "All Students",
        (StatusFilter::Active, _) => "Active Students",
        (StatusFilter::Blacklisted, _) => "Blacklisted Students",
    };
    render::student_table(out, title, &rows)?;
    Ok(())
}

pub(crate) fn form_groups(
    store: &mut SqliteStore,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let report = store.form_groups()?;
    if report.pattern_overrun > 0 {
        tracing::warn!(
            participants = report.participants,
            overrun = report.pattern_overrun,
            "size pattern allocates more seats than participants; last group is short"
        );
    }
    writeln!(out, "Groups Formed Successfully.\n")?;
    Ok(())
}

/// All groups, each with its active members.
pub(crate) fn show_group_details(
    store: &SqliteStore,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let groups = store.list_groups(ListGroupsRequest {
        filter: StatusFilter::All,
        order: GroupOrder::SgpaDesc,
    })?;
    for group in &groups {
        let members = store.list_group_members(group.group_id, true)?;
        render::group_block(out, group, &members)?;
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn show_active_groups(
    store: &SqliteStore,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let groups = store.list_groups(ListGroupsRequest {
        filter: StatusFilter::Active,
        order: GroupOrder::SgpaDesc,
    })?;
    if groups.is_empty() {
        writeln!(out, "\nNo active groups found.\n")?;
        return Ok(());
    }
    for group in &groups {
        let members = store.list_group_members(group.group_id, true)?;
        render::group_block(out, group, &members)?;
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn show_blacklisted_groups(
    store: &SqliteStore,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let groups = store.list_groups(ListGroupsRequest {
        filter: StatusFilter::Blacklisted,
        order: GroupOrder::Insertion,
    })?;
    render::blacklisted_groups(out, &groups)?;
    Ok(())
}

pub(crate) fn set_group_status(
    store: &mut SqliteStore,
    out: &mut impl Write,
    group_id: GroupId,
    status: Status,
) -> Result<(), CommandError> {
    store.update_group_status(group_id, status)?;
    match status {
        Status::Active => writeln!(out, "Group Activated.\n")?,
        Status::Blacklisted => writeln!(out, "Group Blacklisted.\n")?,
    }
    Ok(())
}

pub(crate) fn show_ranked_groups(
    store: &SqliteStore,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let groups = store.list_groups(ListGroupsRequest {
        filter: StatusFilter::Active,
        order: GroupOrder::SgpaDesc,
    })?;
    render::ranked_groups(out, &groups)?;
    Ok(())
}

pub(crate) fn show_plot(store: &SqliteStore, out: &mut impl Write) -> Result<(), CommandError> {
    let groups = store.list_groups(ListGroupsRequest {
        filter: StatusFilter::Active,
        order: GroupOrder::Insertion,
    })?;
    if groups.is_empty() {
        writeln!(out, "No active groups.\n")?;
        return Ok(());
    }
    let points = groups
        .iter()
        .map(|group| (group.group_id, group.avg_sgpa))
        .collect::<Vec<_>>();
    write!(out, "{}", plot::render(&points))?;
    writeln!(out)?;
    Ok(())
}
