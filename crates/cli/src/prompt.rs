#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

/// Line-oriented prompt over any reader/writer pair.
pub(crate) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one line. `None` means the input is exhausted.
    pub(crate) fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Prompt::ask`], with exhausted input read as an empty answer.
    pub(crate) fn ask_value(&mut self, label: &str) -> io::Result<String> {
        Ok(self.ask(label)?.unwrap_or_default())
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
