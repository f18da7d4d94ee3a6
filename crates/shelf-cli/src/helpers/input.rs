//! Prompted line input over any reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::ui::{styled, Tone, UiContext};

/// Prompts on `output`, reads answers from `input`.
///
/// Every answer is trimmed. Once the input is exhausted `ask` keeps
/// returning `None` and `at_eof` reports true.
pub struct Console<R, W> {
    input: R,
    output: W,
    ui: UiContext,
    eof: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, ui: UiContext) -> Self {
        Self {
            input,
            output,
            ui,
            eof: false,
        }
    }

    /// Write `prompt` without a newline and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.eof {
            return Ok(None);
        }
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Whether the input stream has ended.
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Write a line in the given tone.
    pub fn tone(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let line = styled(text, tone, self.ui.color);
        writeln!(self.output, "{}", line)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
