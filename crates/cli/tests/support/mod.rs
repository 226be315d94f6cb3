#![forbid(unsafe_code)]
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

pub(crate) struct Session {
    storage: tempfile::TempDir,
}

pub(crate) struct Run {
    pub(crate) success: bool,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            storage: tempfile::tempdir().expect("create temp storage dir"),
        }
    }

    pub(crate) fn storage_dir(&self) -> &Path {
        self.storage.path()
    }

    /// Feeds `script` to the interactive menu and waits for exit.
    pub(crate) fn menu(&self, script: &str) -> Run {
        self.spawn(&[], script)
    }

    pub(crate) fn command(&self, args: &[&str]) -> Run {
        self.spawn(args, "")
    }

    fn spawn(&self, args: &[&str], stdin: &str) -> Run {
        let mut child = Command::new(env!("CARGO_BIN_EXE_study_groups"))
            .arg("--storage-dir")
            .arg(self.storage.path())
            .args(args)
            .env_remove("STUDY_GROUPS_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn study_groups");

        {
            let mut input = child.stdin.take().expect("stdin");
            input
                .write_all(stdin.as_bytes())
                .expect("write script");
        }

        let Output {
            status,
            stdout,
            stderr,
        } = child.wait_with_output().expect("wait for study_groups");
        Run {
            success: status.success(),
            stdout: String::from_utf8(stdout).expect("stdout is utf8"),
            stderr: String::from_utf8(stderr).expect("stderr is utf8"),
        }
    }
}

/// Lines of the first table following `title`, up to the next blank line.
pub(crate) fn table_rows<'a>(stdout: &'a str, title: &str) -> Vec<&'a str> {
    stdout
        .lines()
        .skip_while(|line| *line != title)
        .skip(3)
        .take_while(|line| !line.trim().is_empty())
        .collect()
}
