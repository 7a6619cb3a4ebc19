use crate::error::{FieldError, PromptError};
use crossterm::style::{Color, Stylize, style};
use std::io::{BufRead, Write};
use tracing::debug;

/// How a line of console output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Banner,
    Title,
    Section,
    Warning,
    Good,
    Bad,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Banner => Some(Color::Cyan),
            Tone::Title | Tone::Good => Some(Color::Green),
            Tone::Section | Tone::Warning => Some(Color::Yellow),
            Tone::Bad => Some(Color::Red),
        }
    }
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    use_color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, use_color: bool) -> Self {
        Self {
            input,
            output,
            use_color,
        }
    }

    /// Reads one line without its line ending. `None` means the input is closed.
    /// Bytes that are not valid UTF-8 come back as U+FFFD so the caller can reject them.
    pub fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()?.ok_or_else(|| PromptError::InputClosed {
            prompt: prompt.trim().to_string(),
        })
    }

    /// Asks `prompt` until `parse` accepts the answer, printing each rejection.
    pub fn prompt_until_valid<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, FieldError>,
    {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(prompt = prompt.trim(), reason = %err, "rejected input");
                    self.write_line(Tone::Bad, &format!("ERROR: {}", err))?;
                }
            }
        }
    }

    pub fn write_line(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        match tone.color().filter(|_| self.use_color) {
            Some(color) => writeln!(self.output, "{}", style(text).with(color))?,
            None => writeln!(self.output, "{}", text)?,
        }
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<(), PromptError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
