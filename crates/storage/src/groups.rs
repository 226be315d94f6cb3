#![forbid(unsafe_code)]

use crate::rows::{GROUP_COLUMNS, STUDENT_COLUMNS, group_from_row, student_from_row};
use crate::students::ranked_active_students_tx;
use crate::{
    FormationReport, FormedGroupRow, GroupOrder, GroupRow, ListGroupsRequest, SqliteStore,
    StoreError, StudentRow,
};
use rusqlite::{OptionalExtension, Transaction, params};
use sg_core::ids::{GroupId, RollNo};
use sg_core::model::{Sgpa, Status};
use sg_core::partition::{self, PartitionError};

impl SqliteStore {
    /// Deletes every group after detaching all students from it.
    pub fn clear_groups(&mut self) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let deleted = clear_groups_tx(&tx)?;
        tx.commit()?;
        Ok(deleted)
    }

    pub fn insert_group(&mut self, avg_sgpa: f64) -> Result<GroupId, StoreError> {
        let avg_sgpa = Sgpa::try_new(avg_sgpa)?;
        let tx = self.conn.transaction()?;
        let group_id = insert_group_tx(&tx, avg_sgpa.get())?;
        tx.commit()?;
        Ok(group_id)
    }

    /// `group_id = None` detaches the student. Returns `false` when no student has `roll_no`.
    pub fn set_student_group(
        &mut self,
        roll_no: RollNo,
        group_id: Option<GroupId>,
    ) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let updated = set_student_group_tx(&tx, roll_no, group_id)?;
        tx.commit()?;
        Ok(updated)
    }

    pub fn update_group_status(
        &mut self,
        group_id: GroupId,
        status: Status,
    ) -> Result<bool, StoreError> {
        let updated = self.conn.execute(
            "UPDATE student_groups SET status = ?2 WHERE group_id = ?1",
            params![group_id.get(), status.as_str()],
        )?;
        if updated == 0 {
            tracing::debug!(%group_id, status = status.as_str(), "status update matched no group");
        }
        Ok(updated > 0)
    }

    pub fn list_groups(&self, request: ListGroupsRequest) -> Result<Vec<GroupRow>, StoreError> {
        let order = match request.order {
            GroupOrder::SgpaDesc => "avg_sgpa DESC, group_id ASC",
            GroupOrder::Insertion => "group_id ASC",
        };
        let sql = format!(
            "SELECT {GROUP_COLUMNS} FROM student_groups \
             WHERE (?1 IS NULL OR status = ?1) \
             ORDER BY {order}"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![request.filter.sql_param()], group_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get_group(&self, group_id: GroupId) -> Result<Option<GroupRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {GROUP_COLUMNS} FROM student_groups WHERE group_id = ?1"),
                params![group_id.get()],
                group_from_row,
            )
            .optional()?)
    }

    pub fn list_group_members(
        &self,
        group_id: GroupId,
        active_only: bool,
    ) -> Result<Vec<StudentRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students \
             WHERE group_id = ?1 AND (?2 = 0 OR status = 'active') \
             ORDER BY roll_no ASC"
        ))?;
        let rows = stmt.query_map(params![group_id.get(), active_only], student_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Replaces every group with a fresh partition of the active roster.
    ///
    /// Runs as one transaction. When too few students are active the existing
    /// groups are still removed and `NotEnoughParticipants` is returned.
    pub fn form_groups(&mut self) -> Result<FormationReport, StoreError> {
        let tx = self.conn.transaction()?;
        let cleared = clear_groups_tx(&tx)?;
        let ranked = ranked_active_students_tx(&tx)?;

        let formed = match partition::form_groups(&ranked) {
            Ok(formed) => formed,
            Err(PartitionError::NotEnoughParticipants { found }) => {
                tx.commit()?;
                tracing::debug!(cleared, found, "group formation skipped");
                return Err(StoreError::NotEnoughParticipants { found });
            }
        };

        let mut groups = Vec::with_capacity(formed.len());
        for group in formed {
            let group_id = insert_group_tx(&tx, group.avg_sgpa)?;
            for member in &group.members {
                set_student_group_tx(&tx, *member, Some(group_id))?;
            }
            groups.push(FormedGroupRow {
                group_id,
                avg_sgpa: group.avg_sgpa,
                members: group.members,
            });
        }
        tx.commit()?;

        let report = FormationReport {
            participants: ranked.len(),
            pattern_overrun: partition::pattern_overrun(ranked.len()),
            groups,
        };
        tracing::info!(
            cleared,
            participants = report.participants,
            groups = report.groups.len(),
            "formed groups"
        );
        Ok(report)
    }
}

fn clear_groups_tx(tx: &Transaction<'_>) -> Result<usize, StoreError> {
    tx.execute(
        "UPDATE students SET group_id = NULL WHERE group_id IS NOT NULL",
        [],
    )?;
    Ok(tx.execute("DELETE FROM student_groups", [])?)
}

fn insert_group_tx(tx: &Transaction<'_>, avg_sgpa: f64) -> Result<GroupId, StoreError> {
    tx.execute(
        "INSERT INTO student_groups(avg_sgpa) VALUES (?1)",
        params![avg_sgpa],
    )?;
    Ok(GroupId::new(tx.last_insert_rowid()))
}

fn set_student_group_tx(
    tx: &Transaction<'_>,
    roll_no: RollNo,
    group_id: Option<GroupId>,
) -> Result<bool, StoreError> {
    let updated = tx.execute(
        "UPDATE students SET group_id = ?2 WHERE roll_no = ?1",
        params![roll_no.get(), group_id.map(GroupId::get)],
    )?;
    Ok(updated > 0)
}
