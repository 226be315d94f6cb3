#![forbid(unsafe_code)]

use rusqlite::Row;
use rusqlite::types::Type;
use sg_core::ids::{GroupId, RollNo};
use sg_core::model::Status;

#[derive(Clone, Debug, PartialEq)]
pub struct StudentRow {
    pub roll_no: RollNo,
    pub first_name: String,
    pub last_name: String,
    pub sgpa: f64,
    pub status: Status,
    pub group_id: Option<GroupId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupRow {
    pub group_id: GroupId,
    pub avg_sgpa: f64,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormedGroupRow {
    pub group_id: GroupId,
    pub avg_sgpa: f64,
    pub members: Vec<RollNo>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormationReport {
    pub participants: usize,
    /// Seats the size pattern allocated beyond `participants`.
    pub pattern_overrun: usize,
    pub groups: Vec<FormedGroupRow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Loaded(usize),
    AlreadyPresent,
}

pub(crate) const STUDENT_COLUMNS: &str = "roll_no, first_name, last_name, sgpa, status, group_id";
pub(crate) const GROUP_COLUMNS: &str = "group_id, avg_sgpa, status";

pub(crate) fn student_from_row(row: &Row<'_>) -> rusqlite::Result<StudentRow> {
    Ok(StudentRow {
        roll_no: RollNo::new(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        sgpa: row.get(3)?,
        status: status_at(row, 4)?,
        group_id: row.get::<_, Option<i64>>(5)?.map(GroupId::new),
    })
}

pub(crate) fn group_from_row(row: &Row<'_>) -> rusqlite::Result<GroupRow> {
    Ok(GroupRow {
        group_id: GroupId::new(row.get(0)?),
        avg_sgpa: row.get(1)?,
        status: status_at(row, 2)?,
    })
}

fn status_at(row: &Row<'_>, index: usize) -> rusqlite::Result<Status> {
    let raw = row.get::<_, String>(index)?;
    Status::parse(&raw)
        .ok_or_else(|| rusqlite::Error::InvalidColumnType(index, "status".to_string(), Type::Text))
}
