//! Compiler error text helpers.
//!
//! Errors from the transpiler are reported against a wrapped template, so their
//! line numbers are off by one and carry wrapper markup. These helpers clean the
//! message up and attach a code frame. Input that does not look like a located
//! error passes through.

use regex::{Captures, Regex};
use std::sync::OnceLock;

const TEMPLATE_MARKER: &str = "/* @babel/template */";
const TEMPLATE_LINE: &str = "1 | /* @babel/template */;";

const LINES_ABOVE: usize = 2;
const LINES_BELOW: usize = 3;

fn location_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((\d+):(\d+)\)").expect("location regex"))
}

fn trailing_location_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((\d+):(\d+)\)$").expect("trailing location regex"))
}

fn gutter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+) \|").expect("gutter regex"))
}

/// Marks a branch that must never run.
pub fn assert_unreachable() -> ! {
    panic!("Didn't expect to get here")
}

pub fn format_babel_error(error: &str) -> String {
    let is_template = error.contains(TEMPLATE_MARKER);
    let shift = u64::from(is_template);

    let out = error.replacen(TEMPLATE_LINE, "", 1);
    let out = location_re().replacen(&out, 1, |caps: &Captures| {
        match caps[1].parse::<u64>() {
            Ok(line) => format!("({}:{})", line.saturating_sub(shift), &caps[2]),
            Err(_) => caps[0].to_string(),
        }
    });
    let out = out.replacen("<>", "", 1).replacen("</>", "", 1);

    gutter_re()
        .replace_all(&out, |caps: &Captures| {
            let digits = &caps[1];
            let Ok(line) = digits.parse::<u64>() else {
                return caps[0].to_string();
            };
            let renumbered = line.saturating_sub(1).to_string();
            let pad = digits.len().saturating_sub(renumbered.len());
            format!("{}{} |", " ".repeat(pad), renumbered)
        })
        .into_owned()
}

/// Appends a code frame when the error ends in `(line:col)` that points into `code`.
pub fn frame_error(error: &str, code: &str) -> String {
    if error.is_empty() {
        return String::new();
    }
    let Some(caps) = trailing_location_re().captures(error) else {
        return error.to_string();
    };
    let (Ok(line), Ok(column)) = (caps[1].parse::<usize>(), caps[2].parse::<usize>()) else {
        return error.to_string();
    };

    match code_frame(code, line, column) {
        Some(frame) => format!("{}\n\n{}", error, frame),
        None => error.to_string(),
    }
}

/// Renders the lines around `line` (1-based) with a `>` marker and a caret under
/// `column` (1-based). `None` when `line` is outside `code`.
pub fn code_frame(code: &str, line: usize, column: usize) -> Option<String> {
    let lines = split_lines(code);
    if line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(LINES_ABOVE + 1);
    let end = (line + LINES_BELOW).min(lines.len());
    let width = end.to_string().len();

    let mut out = Vec::with_capacity(end - start + 1);
    for (idx, text) in lines[start..end].iter().enumerate() {
        let number = start + idx + 1;
        let gutter = format!(" {:>width$} |", number, width = width);
        let body = if text.is_empty() {
            String::new()
        } else {
            format!(" {}", text)
        };

        if number == line {
            let spacing: String = text
                .chars()
                .take(column.saturating_sub(1))
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            let blank_gutter: String = gutter
                .chars()
                .map(|c| if c.is_ascii_digit() { ' ' } else { c })
                .collect();
            out.push(format!(">{}{}\n {} {}^", gutter, body, blank_gutter, spacing));
        } else {
            out.push(format!(" {}{}", gutter, body));
        }
    }
    Some(out.join("\n"))
}

fn split_lines(code: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = code;
    loop {
        match rest.find(|c: char| matches!(c, '\r' | '\n' | '\u{2028}' | '\u{2029}')) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let sep_len = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    rest[pos..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[pos + sep_len..];
            }
            None => {
                lines.push(rest);
                return lines;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/diagnostics.rs"]
mod tests;
