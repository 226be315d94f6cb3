#![forbid(unsafe_code)]

use sg_storage::{GroupRow, StudentRow};
use std::io::{self, Write};

/// Integral scores keep one decimal so `8.0` does not print as `8`.
pub(crate) fn score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Two decimals, with exact ties going to the even digit.
pub(crate) fn rounded_score(value: f64) -> String {
    let rounded = format!("{value:.2}").parse::<f64>().unwrap_or(value);
    score(rounded)
}

pub(crate) fn student_table(
    out: &mut impl Write,
    title: &str,
    rows: &[StudentRow],
) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "\nNo data found.\n");
    }

    writeln!(out, "\n{title}")?;
    writeln!(
        out,
        "{:<8} {:<15} {:<15} {:<6} {:<12}",
        "RollNo", "First Name", "Last Name", "SGPA", "Status"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for row in rows {
        writeln!(
            out,
            "{:<8} {:<15} {:<15} {:<6} {:<12}",
            row.roll_no.to_string(),
            row.first_name,
            row.last_name,
            score(row.sgpa),
            row.status.as_str()
        )?;
    }
    writeln!(out)
}

pub(crate) fn group_block(
    out: &mut impl Write,
    group: &GroupRow,
    members: &[StudentRow],
) -> io::Result<()> {
    writeln!(
        out,
        "\nGroup {} | Avg SGPA: {}",
        group.group_id,
        rounded_score(group.avg_sgpa)
    )?;
    writeln!(out, "{}", "-".repeat(45))?;
    for member in members {
        writeln!(
            out,
            "{:<6} {:<15} {:<15} {:<6}",
            member.roll_no.to_string(),
            member.first_name,
            member.last_name,
            score(member.sgpa)
        )?;
    }
    Ok(())
}

pub(crate) fn blacklisted_groups(out: &mut impl Write, groups: &[GroupRow]) -> io::Result<()> {
    writeln!(out, "\nBlacklisted Groups")?;
    writeln!(out, "{:<10} {:<10}", "GroupID", "Avg SGPA")?;
    writeln!(out, "{}", "-".repeat(25))?;
    for group in groups {
        writeln!(
            out,
            "{:<10} {:<10}",
            group.group_id.to_string(),
            rounded_score(group.avg_sgpa)
        )?;
    }
    writeln!(out)
}

pub(crate) fn ranked_groups(out: &mut impl Write, groups: &[GroupRow]) -> io::Result<()> {
    writeln!(out, "\nRankwise Groups")?;
    writeln!(out, "{:<6} {:<10} {:<10}", "Rank", "GroupID", "Avg SGPA")?;
    writeln!(out, "{}", "-".repeat(35))?;
    for (index, group) in groups.iter().enumerate() {
        writeln!(
            out,
            "{:<6} {:<10} {:<10}",
            index + 1,
            group.group_id.to_string(),
            rounded_score(group.avg_sgpa)
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::ids::{GroupId, RollNo};
    use sg_core::model::Status;

    fn student(roll: i64, first: &str, last: &str, sgpa: f64) -> StudentRow {
        StudentRow {
            roll_no: RollNo::new(roll),
            first_name: first.to_string(),
            last_name: last.to_string(),
            sgpa,
            status: Status::Active,
            group_id: None,
        }
    }

    fn group(id: i64, avg: f64, status: Status) -> GroupRow {
        GroupRow {
            group_id: GroupId::new(id),
            avg_sgpa: avg,
            status,
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scores_keep_a_decimal() {
        assert_eq!(score(8.0), "8.0");
        assert_eq!(score(8.5), "8.5");
        assert_eq!(rounded_score(8.666_666), "8.67");
        assert_eq!(rounded_score(9.2000000001), "9.2");
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(rounded_score(8.125), "8.12");
        assert_eq!(rounded_score(9.125), "9.12");
        assert_eq!(rounded_score(8.375), "8.38");
        assert_eq!(rounded_score(8.675), "8.68");
        assert_eq!(rounded_score(2.675), "2.67");
    }

    #[test]
    fn student_table_is_column_aligned() {
        let text = rendered(|out| {
            student_table(
                out,
                "All Students",
                &[student(1, "Aarav", "Sharma", 8.5), student(12, "Om", "Sawant", 7.0)],
            )
        });
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "All Students");
        assert!(lines[2].starts_with("RollNo   First Name      Last Name       SGPA   Status"));
        assert_eq!(lines[3], "-".repeat(70));
        assert_eq!(lines[4].trim_end(), "1        Aarav           Sharma          8.5    active");
        assert_eq!(lines[5].trim_end(), "12       Om              Sawant          7.0    active");
    }

    #[test]
    fn empty_student_table_prints_placeholder() {
        let text = rendered(|out| student_table(out, "All Students", &[]));
        assert_eq!(text, "\nNo data found.\n\n");
    }

    #[test]
    fn group_block_shows_rounded_average_and_members() {
        let text = rendered(|out| {
            group_block(
                out,
                &group(3, 8.833_333, Status::Active),
                &[student(4, "Vihaan", "Rao", 8.2)],
            )
        });
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "Group 3 | Avg SGPA: 8.83");
        assert_eq!(lines[2], "-".repeat(45));
        assert_eq!(lines[3].trim_end(), "4      Vihaan          Rao             8.2");
    }

    #[test]
    fn ranked_groups_are_numbered_from_one() {
        let text = rendered(|out| {
            ranked_groups(
                out,
                &[group(7, 9.2, Status::Active), group(2, 8.45, Status::Active)],
            )
        });
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "Rankwise Groups");
        assert_eq!(lines[4].trim_end(), "1      7          9.2");
        assert_eq!(lines[5].trim_end(), "2      2          8.45");
    }

    #[test]
    fn blacklisted_groups_summary_has_header_even_when_empty() {
        let text = rendered(|out| blacklisted_groups(out, &[]));
        assert_eq!(
            text,
            format!("\nBlacklisted Groups\nGroupID    Avg SGPA  \n{}\n\n", "-".repeat(25))
        );
    }
}
