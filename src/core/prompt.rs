/// Line-oriented prompting and placeholder input collection.

use std::io::{BufRead, Write};
use thiserror::Error;

use crate::schema::catalog::Story;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input stream closed")]
    InputClosed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty. Please try again.";

/// Writes prompts to `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` without a newline and read one line.
    ///
    /// The returned line has its line terminator removed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask `"<prompt>: "` until a non-blank answer arrives; returns it trimmed.
    pub fn ask_non_blank(&mut self, prompt: &str) -> Result<String, PromptError> {
        let question = format!("{}: ", prompt);
        loop {
            let answer = self.ask(&question)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            tracing::trace!(prompt, "blank answer rejected");
            self.say(EMPTY_INPUT_MESSAGE)?;
        }
    }

    /// One accepted answer per placeholder of `story`, in declared order.
    pub fn collect_inputs(&mut self, story: &Story) -> Result<Vec<String>, PromptError> {
        let mut inputs = Vec::with_capacity(story.placeholders.len());
        for placeholder in &story.placeholders {
            inputs.push(self.ask_non_blank(&placeholder.prompt)?);
        }
        Ok(inputs)
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<(), PromptError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
