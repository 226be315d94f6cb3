#![forbid(unsafe_code)]

use crate::rows::{STUDENT_COLUMNS, student_from_row};
use crate::{
    InsertStudentRequest, ListStudentsRequest, SeedOutcome, SqliteStore, StoreError, StudentOrder,
    StudentRow, count_to_usize,
};
use rusqlite::{OptionalExtension, Transaction, params};
use sg_core::ids::RollNo;
use sg_core::model::{PersonName, Sgpa, Status};
use sg_core::partition::RankedStudent;
use sg_core::seed::SAMPLE_STUDENTS;

impl SqliteStore {
    pub fn insert_student(&mut self, request: InsertStudentRequest) -> Result<RollNo, StoreError> {
        let first_name = PersonName::try_new(request.first_name)?;
        let last_name = PersonName::try_new(request.last_name)?;
        let sgpa = Sgpa::try_new(request.sgpa)?;

        let tx = self.conn.transaction()?;
        let roll_no = insert_student_tx(&tx, &first_name, &last_name, sgpa)?;
        tx.commit()?;

        tracing::debug!(%roll_no, sgpa = sgpa.get(), "inserted student");
        Ok(roll_no)
    }

    /// Loads the bundled roster unless any student already exists.
    pub fn load_seed_data(&mut self) -> Result<SeedOutcome, StoreError> {
        let tx = self.conn.transaction()?;
        if student_count_tx(&tx)? > 0 {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        for (first, last, sgpa) in SAMPLE_STUDENTS {
            let first_name = PersonName::try_new(*first)?;
            let last_name = PersonName::try_new(*last)?;
            insert_student_tx(&tx, &first_name, &last_name, Sgpa::try_new(*sgpa)?)?;
        }
        tx.commit()?;

        tracing::info!(count = SAMPLE_STUDENTS.len(), "loaded seed roster");
        Ok(SeedOutcome::Loaded(SAMPLE_STUDENTS.len()))
    }

    /// Returns `false` when no student has `roll_no`.
    pub fn update_student_status(
        &mut self,
        roll_no: RollNo,
        status: Status,
    ) -> Result<bool, StoreError> {
        let updated = self.conn.execute(
            "UPDATE students SET status = ?2 WHERE roll_no = ?1",
            params![roll_no.get(), status.as_str()],
        )?;
        if updated == 0 {
            tracing::debug!(%roll_no, status = status.as_str(), "status update matched no student");
        }
        Ok(updated > 0)
    }

    pub fn list_students(
        &self,
        request: ListStudentsRequest,
    ) -> Result<Vec<StudentRow>, StoreError> {
        let order = match request.order {
            StudentOrder::Insertion => "roll_no ASC",
            StudentOrder::SgpaDesc => "sgpa DESC, roll_no ASC",
        };
        let sql = format!(
            "SELECT {STUDENT_COLUMNS} FROM students \
             WHERE (?1 IS NULL OR status = ?1) \
             ORDER BY {order}"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![request.filter.sql_param()], student_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get_student(&self, roll_no: RollNo) -> Result<Option<StudentRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE roll_no = ?1"),
                params![roll_no.get()],
                student_from_row,
            )
            .optional()?)
    }

    pub fn student_count(&self) -> Result<usize, StoreError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get::<_, i64>(0))?;
        Ok(count_to_usize(count))
    }
}

fn insert_student_tx(
    tx: &Transaction<'_>,
    first_name: &PersonName,
    last_name: &PersonName,
    sgpa: Sgpa,
) -> Result<RollNo, StoreError> {
    tx.execute(
        "INSERT INTO students(first_name, last_name, sgpa) VALUES (?1, ?2, ?3)",
        params![first_name.as_str(), last_name.as_str(), sgpa.get()],
    )?;
    Ok(RollNo::new(tx.last_insert_rowid()))
}

fn student_count_tx(tx: &Transaction<'_>) -> Result<usize, StoreError> {
    let count = tx.query_row("SELECT COUNT(*) FROM students", [], |row| row.get::<_, i64>(0))?;
    Ok(count_to_usize(count))
}

pub(crate) fn ranked_active_students_tx(
    tx: &Transaction<'_>,
) -> Result<Vec<RankedStudent>, StoreError> {
    let mut stmt = tx.prepare(
        "SELECT roll_no, sgpa FROM students \
         WHERE status = 'active' \
         ORDER BY sgpa DESC, roll_no ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(RankedStudent {
            roll_no: RollNo::new(row.get(0)?),
            sgpa: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
