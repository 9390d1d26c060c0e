use crate::error::Result;
use dialoguer::{Confirm, Input, Select};

/// Parse a decimal number, accepting either a comma or a period as the
/// decimal separator.
pub fn parse_decimal(s: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    s.trim().replace(',', ".").parse::<f64>()
}

/// Parse a zero-based record index.
pub fn parse_index(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()
}

/// Prompt for a positive real, re-prompting until the entry parses and is
/// greater than zero.
pub fn positive_f64(prompt: &str) -> Result<f64> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_decimal(&raw) {
            Ok(v) if v > 0.0 => return Ok(v),
            _ => println!("Invalid value, enter a positive number."),
        }
    }
}

/// Prompt for a row count, re-prompting until the entry is a whole number
/// of at least 1.
pub fn row_count(prompt: &str) -> Result<u32> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        match raw.trim().parse::<u32>() {
            Ok(v) if v >= 1 => return Ok(v),
            _ => println!("Invalid value, enter a whole number of at least 1."),
        }
    }
}

pub fn text(prompt: &str) -> Result<String> {
    let value: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(value)
}

pub fn text_with_default(prompt: &str, default: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

/// Single-shot record index entry. Unlike the numeric prompts this does not
/// retry: a malformed or out-of-range entry yields `None` so the caller can
/// abort its operation without touching the store.
pub fn record_index(prompt: &str, len: usize) -> Result<Option<usize>> {
    let raw: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(parse_index(&raw).filter(|i| *i < len))
}

/// Yes/no confirmation defaulting to no; only an affirmative answer
/// returns true.
pub fn confirm(prompt: &str) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}

/// Arrow-key selection. `None` means the prompt was dismissed (Esc), which
/// callers treat as cancel.
pub fn select(prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>> {
    let choice = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()?;
    Ok(choice)
}
