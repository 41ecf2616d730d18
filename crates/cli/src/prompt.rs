// SPDX-License-Identifier: MIT

//! Blocking terminal prompts for the create/edit/delete workflows.
//!
//! All prompts write to stderr so piped stdout stays clean table
//! output. The generic `*_from` variants take any `BufRead` and are the
//! ones under test.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question. Only `y`/`yes` (case-insensitive) confirms;
/// everything else, including EOF, declines.
pub fn confirm(question: &str) -> io::Result<bool> {
    confirm_from(io::stdin().lock(), question)
}

pub(crate) fn confirm_from<R: BufRead>(mut input: R, question: &str) -> io::Result<bool> {
    eprint!("{} [y/N] ", question);
    io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Read a single line of input, falling back to `default` when the
/// user just presses enter.
pub fn line(label: &str, default: Option<&str>) -> io::Result<String> {
    line_from(io::stdin().lock(), label, default)
}

pub(crate) fn line_from<R: BufRead>(
    mut input: R,
    label: &str,
    default: Option<&str>,
) -> io::Result<String> {
    match default {
        Some(d) if !d.is_empty() => eprint!("{} [{}]: ", label, d),
        _ => eprint!("{}: ", label),
    }
    io::stderr().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim_end_matches(['\r', '\n']);

    if answer.is_empty() {
        return Ok(default.unwrap_or_default().to_string());
    }
    Ok(answer.to_string())
}

/// Read a multi-line body, terminated by a line holding a single `.`
/// or by EOF. Line breaks are preserved.
///
/// Entering nothing at all returns `default`, so an interactive edit
/// keeps the current body by default.
pub fn body(default: Option<&str>) -> io::Result<String> {
    body_from(io::stdin().lock(), default)
}

pub(crate) fn body_from<R: BufRead>(mut input: R, default: Option<&str>) -> io::Result<String> {
    if default.is_some() {
        eprintln!("body (end with a single '.' line, empty keeps current):");
    } else {
        eprintln!("body (end with a single '.' line):");
    }

    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\r', '\n']);
        if line == "." {
            break;
        }
        lines.push(line.to_string());
    }

    if lines.is_empty() {
        return Ok(default.unwrap_or_default().to_string());
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
