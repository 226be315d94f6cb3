#![forbid(unsafe_code)]

mod support;

use support::*;

#[test]
fn seed_twice_keeps_forty_students() {
    let session = Session::new();
    let run = session.menu("1\n1\n5\n17\n");

    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("40 Sample Students Loaded."));
    assert!(run.stdout.contains("Data already exists."));
    assert_eq!(table_rows(&run.stdout, "All Students").len(), 40);
    assert!(run.stdout.ends_with("Exiting...\n"));
}

#[test]
fn add_and_blacklist_student_flow() {
    let session = Session::new();
    let run = session.menu(concat!(
        "2\nAsha\nRao\n9.5\n",
        "2\nBela\nRoy\n7.25\n",
        "3\n1\n",
        "6\n",
        "7\n",
        "4\n1\n",
        "8\n",
        "17\n",
    ));
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Student Added Successfully (Roll No: 1)."));
    assert!(run.stdout.contains("Student Added Successfully (Roll No: 2)."));
    assert!(run.stdout.contains("Student Blacklisted."));
    assert!(run.stdout.contains("Student Activated."));

    let active = table_rows(&run.stdout, "Active Students");
    assert_eq!(active.len(), 1);
    assert!(active[0].contains("Bela"));

    let blacklisted = table_rows(&run.stdout, "Blacklisted Students");
    assert_eq!(blacklisted.len(), 1);
    assert!(blacklisted[0].contains("Asha"));
    assert!(blacklisted[0].contains("blacklisted"));

    let ranked = table_rows(&run.stdout, "Rankwise Students");
    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].contains("Asha"));
    assert!(ranked[1].contains("7.25"));
}

#[test]
fn forming_groups_from_seed_roster() {
    let session = Session::new();
    let run = session.menu("1\n9\n15\n10\n17\n");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Groups Formed Successfully."));

    let ranked = table_rows(&run.stdout, "Rankwise Groups");
    assert_eq!(ranked.len(), 10);
    // Top four seed scores are 9.4, 9.3, 9.2 and 9.1.
    assert!(ranked[0].starts_with("1 "));
    assert!(ranked[0].trim_end().ends_with("9.25"));

    assert_eq!(run.stdout.matches("| Avg SGPA: ").count(), 10);
}

#[test]
fn blacklisted_group_moves_between_views() {
    let session = Session::new();
    let run = session.menu("1\n9\n13\n1\n12\n11\n15\n14\n1\n12\n17\n");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Group Blacklisted."));
    assert!(run.stdout.contains("Group Activated."));

    let blacklisted = table_rows(&run.stdout, "Blacklisted Groups");
    assert_eq!(blacklisted.len(), 1);
    assert!(blacklisted[0].starts_with("1 "));

    let ranked = table_rows(&run.stdout, "Rankwise Groups");
    assert_eq!(ranked.len(), 9);
    assert!(ranked.iter().all(|row| {
        row.split_whitespace().nth(1) != Some("1")
    }));

    // The second summary, after reactivation, is empty.
    let last_summary = run
        .stdout
        .rsplit("\nBlacklisted Groups\n")
        .next()
        .expect("summary present");
    let rows_after = last_summary
        .lines()
        .skip(2)
        .take_while(|line| !line.trim().is_empty())
        .count();
    assert_eq!(rows_after, 0);
}

#[test]
fn empty_views_print_placeholders() {
    let session = Session::new();
    let run = session.menu("5\n11\n16\n9\n17\n");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("No data found."));
    assert!(run.stdout.contains("No active groups found."));
    assert!(run.stdout.contains("No active groups."));
    assert!(run.stdout.contains("Not enough students."));
}

#[test]
fn plot_shows_every_active_group() {
    let session = Session::new();
    let run = session.menu("1\n9\n16\n17\n");
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Group SGPA Graph"));
    let plot = run
        .stdout
        .split("Group SGPA Graph")
        .nth(1)
        .expect("plot present");
    let markers = plot
        .lines()
        .filter(|line| line.contains(" |"))
        .map(|line| line.matches('o').count())
        .sum::<usize>();
    assert_eq!(markers, 10);
}

#[test]
fn data_persists_between_sessions() {
    let session = Session::new();
    session.menu("1\n9\n17\n");
    assert!(
        session
            .storage_dir()
            .join("study_groups.db")
            .exists()
    );

    let run = session.menu("5\n10\n17\n");
    assert_eq!(table_rows(&run.stdout, "All Students").len(), 40);
    assert_eq!(run.stdout.matches("| Avg SGPA: ").count(), 10);
}
