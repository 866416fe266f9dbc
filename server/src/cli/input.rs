// server/src/cli/input.rs

// Line input for the interactive shell and the prompt helpers that keep
// asking until the answer is usable.

use anyhow::{anyhow, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use thiserror::Error;

use clinic_models::medical::{parse_date, parse_time};

/// The user closed the input stream (Ctrl-D / Ctrl-C). Ends the session.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InputClosed>().is_some()
}

/// A source of lines typed at a prompt.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Err(InputClosed.into()),
            Err(e) => Err(anyhow!("Failed to read from terminal: {}", e)),
        }
    }
}

pub fn prompt_string<R: LineReader>(input: &mut R, prompt: &str) -> Result<String> {
    input.read_line(prompt)
}

pub fn prompt_non_empty<R: LineReader, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let line = input.read_line(prompt)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        writeln!(out, "Input cannot be empty. Please try again.")?;
    }
}

pub fn prompt_int<R: LineReader, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<i32> {
    loop {
        let line = input.read_line(prompt)?;
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "Invalid input. Please enter a whole number.")?,
        }
    }
}

pub fn prompt_positive_int<R: LineReader, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<i32> {
    loop {
        let value = prompt_int(input, out, prompt)?;
        if value > 0 {
            return Ok(value);
        }
        writeln!(out, "Invalid input. Please enter a positive number.")?;
    }
}

/// Asks until the answer parses as `YYYY-MM-DD`. Returns the text as typed (trimmed).
pub fn prompt_date<R: LineReader, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let value = prompt_non_empty(input, out, prompt)?;
        if parse_date(&value).is_ok() {
            return Ok(value);
        }
        writeln!(out, "Invalid date format. Please use YYYY-MM-DD.")?;
    }
}

/// Asks until the answer parses as 24-hour `HH:MM`.
pub fn prompt_time<R: LineReader, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let value = prompt_non_empty(input, out, prompt)?;
        if parse_time(&value).is_ok() {
            return Ok(value);
        }
        writeln!(out, "Invalid time format. Please use HH:MM (24-hour).")?;
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedInput;
    use super::*;

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn non_empty_retries_on_blank_lines() {
        let mut input = ScriptedInput::new(["", "   ", "  Alice  "]);
        let mut out = Vec::new();
        assert_eq!(prompt_non_empty(&mut input, &mut out, "Name: ").unwrap(), "Alice");
        assert_eq!(input.prompts.len(), 3);
        assert_eq!(output(out).matches("Input cannot be empty").count(), 2);
    }

    #[test]
    fn positive_int_rejects_text_and_non_positive_numbers() {
        let mut input = ScriptedInput::new(["forty", "0", "-3", "40"]);
        let mut out = Vec::new();
        assert_eq!(prompt_positive_int(&mut input, &mut out, "Age: ").unwrap(), 40);
        let text = output(out);
        assert_eq!(text.matches("Please enter a whole number").count(), 1);
        assert_eq!(text.matches("Please enter a positive number").count(), 2);
    }

    #[test]
    fn date_and_time_prompts_use_strict_formats() {
        let mut input =
            ScriptedInput::new(["2024-13-40", "2025-3-10", "2025-03-10", "25:61", "9:30", "09:30"]);
        let mut out = Vec::new();
        assert_eq!(prompt_date(&mut input, &mut out, "Date: ").unwrap(), "2025-03-10");
        assert_eq!(prompt_time(&mut input, &mut out, "Time: ").unwrap(), "09:30");
        let text = output(out);
        assert_eq!(text.matches("Invalid date format").count(), 2);
        assert_eq!(text.matches("Invalid time format").count(), 2);
    }

    #[test]
    fn exhausted_input_reports_closed() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut out = Vec::new();
        let err = prompt_non_empty(&mut input, &mut out, "Name: ").unwrap_err();
        assert!(is_input_closed(&err));
    }
}
