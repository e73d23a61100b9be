//! Date reformatting for the configured patterns.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use std::fmt::Write;

/// Reparse `date` with `input_fmt` and render it with `output_fmt`.
///
/// This is the consumer side of the `date_input`/`date_output` config
/// entries: metadata dates arrive in the input pattern and get rendered
/// with the output pattern.
#[allow(unused)]
pub fn reformat(date: &str, input_fmt: &str, output_fmt: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, input_fmt)
        .with_context(|| format!("invalid date `{date}` for pattern `{input_fmt}`"))?;

    // Render through fmt::Write: a bad output pattern surfaces as an
    // error instead of a panic inside `to_string`.
    let mut rendered = String::new();
    write!(rendered, "{}", parsed.format(output_fmt))
        .map_err(|_| anyhow!("invalid date output pattern `{output_fmt}`"))?;

    Ok(rendered)
}
