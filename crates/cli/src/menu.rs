#![forbid(unsafe_code)]

use crate::commands::{self, CommandError};
use crate::prompt::Prompt;
use sg_core::model::Status;
use sg_storage::{SqliteStore, StatusFilter, StudentOrder};
use std::io::{BufRead, Write};

const MENU: &str = "===== STUDENT & GROUP MANAGER =====\n\
1.Load Dummy Data\n\
2.Add Student\n\
3.Blacklist Student\n\
4.Activate Student\n\
5.Show All Students\n\
6.Show Active Students\n\
7.Show Blacklisted Students\n\
8.Show Rankwise Students\n\
9.Form Groups\n\
10.Show Group Details\n\
11.Show Active Groups\n\
12.Show Blacklisted Groups\n\
13.Blacklist Group\n\
14.Activate Group\n\
15.Show Rankwise Groups\n\
16.Show Graph\n\
17.Exit\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    LoadSeed,
    AddStudent,
    BlacklistStudent,
    ActivateStudent,
    AllStudents,
    ActiveStudents,
    BlacklistedStudents,
    RankedStudents,
    FormGroups,
    GroupDetails,
    ActiveGroups,
    BlacklistedGroups,
    BlacklistGroup,
    ActivateGroup,
    RankedGroups,
    Plot,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        let choice = match value.trim() {
            "1" => Self::LoadSeed,
            "2" => Self::AddStudent,
            "3" => Self::BlacklistStudent,
            "4" => Self::ActivateStudent,
            "5" => Self::AllStudents,
            "6" => Self::ActiveStudents,
            "7" => Self::BlacklistedStudents,
            "8" => Self::RankedStudents,
            "9" => Self::FormGroups,
            "10" => Self::GroupDetails,
            "11" => Self::ActiveGroups,
            "12" => Self::BlacklistedGroups,
            "13" => Self::BlacklistGroup,
            "14" => Self::ActivateGroup,
            "15" => Self::RankedGroups,
            "16" => Self::Plot,
            "17" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Runs the numbered menu until `Exit` is chosen or input ends.
pub(crate) fn run<R: BufRead, W: Write>(
    store: &mut SqliteStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), CommandError> {
    loop {
        write!(prompt.out(), "{MENU}")?;
        let Some(line) = prompt.ask("Enter Choice: ")? else {
            tracing::debug!("input closed; leaving menu");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(prompt.out(), "Invalid Choice\n")?;
            continue;
        };
        if choice == MenuChoice::Exit {
            writeln!(prompt.out(), "Exiting...")?;
            return Ok(());
        }

        tracing::debug!(?choice, "menu selection");
        if let Err(err) = dispatch(store, prompt, choice) {
            commands::report(prompt.out(), err)?;
        }
    }
}

fn dispatch<R: BufRead, W: Write>(
    store: &mut SqliteStore,
    prompt: &mut Prompt<R, W>,
    choice: MenuChoice,
) -> Result<(), CommandError> {
    match choice {
        MenuChoice::LoadSeed => commands::load_seed(store, prompt.out()),
        MenuChoice::AddStudent => {
            let first = prompt.ask_value("First Name: ")?;
            let last = prompt.ask_value("Last Name: ")?;
            let sgpa = commands::parse_sgpa(&prompt.ask_value("SGPA: ")?)?;
            commands::add_student(store, prompt.out(), &first, &last, sgpa)
        }
        MenuChoice::BlacklistStudent => {
            let roll_no = commands::parse_roll_no(&prompt.ask_value("Roll No: ")?)?;
            commands::set_student_status(store, prompt.out(), roll_no, Status::Blacklisted)
        }
        MenuChoice::ActivateStudent => {
            let roll_no = commands::parse_roll_no(&prompt.ask_value("Roll No: ")?)?;
            commands::set_student_status(store, prompt.out(), roll_no, Status::Active)
        }
        MenuChoice::AllStudents => {
            commands::show_students(store, prompt.out(), StatusFilter::All, StudentOrder::Insertion)
        }
        MenuChoice::ActiveStudents => commands::show_students(
            store,
            prompt.out(),
            StatusFilter::Active,
            StudentOrder::Insertion,
        ),
        MenuChoice::BlacklistedStudents => commands::show_students(
            store,
            prompt.out(),
            StatusFilter::Blacklisted,
            StudentOrder::Insertion,
        ),
        MenuChoice::RankedStudents => commands::show_students(
            store,
            prompt.out(),
            StatusFilter::Active,
            StudentOrder::SgpaDesc,
        ),
        MenuChoice::FormGroups => commands::form_groups(store, prompt.out()),
        MenuChoice::GroupDetails => commands::show_group_details(store, prompt.out()),
        MenuChoice::ActiveGroups => commands::show_active_groups(store, prompt.out()),
        MenuChoice::BlacklistedGroups => commands::show_blacklisted_groups(store, prompt.out()),
        MenuChoice::BlacklistGroup => {
            let group_id = commands::parse_group_id(&prompt.ask_value("Group ID: ")?)?;
            commands::set_group_status(store, prompt.out(), group_id, Status::Blacklisted)
        }
        MenuChoice::ActivateGroup => {
            let group_id = commands::parse_group_id(&prompt.ask_value("Group ID: ")?)?;
            commands::set_group_status(store, prompt.out(), group_id, Status::Active)
        }
        MenuChoice::RankedGroups => commands::show_ranked_groups(store, prompt.out()),
        MenuChoice::Plot => commands::show_plot(store, prompt.out()),
        MenuChoice::Exit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (SqliteStore, String) {
        let mut store = SqliteStore::open_in_memory().expect("open store");
        let mut prompt = Prompt::new(Cursor::new(script.to_string()), Vec::new());
        run(&mut store, &mut prompt).expect("session");
        let output = String::from_utf8(prompt.into_output()).expect("utf8");
        (store, output)
    }

    #[test]
    fn every_listed_number_maps_to_one_choice() {
        let choices = (1..=17)
            .map(|n| MenuChoice::parse(&n.to_string()).expect("listed choice"))
            .collect::<Vec<_>>();
        for (i, a) in choices.iter().enumerate() {
            assert!(choices[i + 1..].iter().all(|b| b != a));
        }
        assert_eq!(MenuChoice::parse(" 17 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("18"), None);
        assert_eq!(MenuChoice::parse("nine"), None);
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (_, output) = session("42\n17\n");
        assert!(output.contains("Invalid Choice"));
        assert_eq!(output.matches("Enter Choice: ").count(), 2);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn validation_failures_return_to_menu() {
        let (store, output) = session("2\nAsha\nRao\nten\n2\nAsha\nRao\n10.1\n3\nabc\n13\nx\n17\n");
        assert!(output.contains("Invalid SGPA! Please enter a number."));
        assert!(output.contains("SGPA must be between 0 and 10."));
        assert!(output.contains("Invalid Roll Number."));
        assert!(output.contains("Invalid Group ID."));
        assert!(output.ends_with("Exiting...\n"));
        assert_eq!(store.student_count().unwrap(), 0);
    }

    #[test]
    fn closed_input_ends_the_session() {
        let (_, output) = session("5\n");
        assert!(output.contains("No data found."));
        assert!(!output.contains("Exiting..."));
    }

    #[test]
    fn too_few_students_for_groups_is_reported() {
        let (store, output) = session("2\nAsha\nRao\n8\n2\nBela\nRoy\n9\n9\n17\n");
        assert!(output.contains("Not enough students."));
        assert!(
            store
                .list_groups(sg_storage::ListGroupsRequest::default())
                .unwrap()
                .is_empty()
        );
    }
}
