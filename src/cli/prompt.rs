//! Line-oriented prompts
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so
//! the interactive flow can be driven by stdin/stdout or by a test script.
//! Every read returns `None` once input is exhausted.

use std::io::{BufRead, Write};

use crate::error::{ExpenseResult, ValidationError};
use crate::models::Expense;
use crate::validation;

/// Prompts on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts go to, for printing anything else
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled answer is
    /// rejected by validation like any other bad input.
    pub fn read_line(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Keep prompting until `parse` accepts the answer
    ///
    /// Each rejection prints the validation message and asks again.
    pub fn prompt_until<T, F>(&mut self, prompt: &str, parse: F) -> ExpenseResult<Option<T>>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            let Some(answer) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Ask for every field of a new expense
    pub fn prompt_expense(&mut self) -> ExpenseResult<Option<Expense>> {
        let Some(date) = self.prompt_until(
            "Enter date (MM/DD/YYYY) or 'today' for today's date: ",
            validation::parse_date,
        )?
        else {
            return Ok(None);
        };

        let Some(amount) = self.prompt_until("Enter amount: $", validation::parse_amount)? else {
            return Ok(None);
        };

        let Some(category) =
            self.prompt_until("Enter category: ", validation::normalize_category)?
        else {
            return Ok(None);
        };

        let Some(description) = self.read_line("Enter description: ")? else {
            return Ok(None);
        };

        Expense::new(date, amount, &category, &description)
            .map(Some)
            .map_err(Into::into)
    }
}
