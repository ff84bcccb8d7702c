//! Reads DH parameter tables from plain text (optional)
//!
//! The input is one joint per line, four comma-separated fields
//! `d,a,theta,alpha`. A field that parses as a number is taken literally
//! (meters for d and a, degrees for the angles); anything else is a
//! symbol name. Symbols are tagged with the 1-based joint number, and the
//! names `theta` and `alpha` get a leading backslash so they typeset as
//! Greek letters:
//!
//! ```text
//! 0.1,0.2,theta,0
//! 0,l,theta,alpha
//! ```
//!
//! Joint 2 above contributes the symbols `l_2`, `\theta_2` and `\alpha_2`.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::kinematics_impl::DhKinematics;
use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::{DhParameter, DhRow};

/// Comma separated fields per line: d, a, theta, alpha.
const FIELDS_PER_ROW: usize = 4;

/// A symbol is an identifier, optionally marked with a `^*` superscript
/// (e.g. `theta^*` for a variable joint angle).
fn symbol_name() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\^\*)?$").expect("hard-coded pattern")
    })
}

fn parse_field(field: &str, joint: usize) -> Result<DhParameter, ParameterError> {
    let field = field.trim();
    if let Ok(value) = field.parse::<f64>() {
        return Ok(DhParameter::Number(value));
    }
    if !symbol_name().is_match(field) {
        return Err(ParameterError::ParseError(format!(
            "joint {}: '{}' is neither a number nor a symbol name",
            joint, field
        )));
    }
    // theta and alpha typeset as Greek letters.
    let name = if field == "theta" || field == "alpha" {
        format!("\\{field}_{joint}")
    } else {
        format!("{field}_{joint}")
    };
    Ok(DhParameter::Symbol(name))
}

impl DhRow {
    /// Parses one `d,a,theta,alpha` line, tagging symbols with the given
    /// 1-based joint number.
    pub fn parse_line(line: &str, joint: usize) -> Result<Self, ParameterError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELDS_PER_ROW {
            return Err(ParameterError::InvalidLength {
                expected: FIELDS_PER_ROW,
                found: fields.len(),
            });
        }
        Ok(DhRow {
            d: parse_field(fields[0], joint)?,
            a: parse_field(fields[1], joint)?,
            theta: parse_field(fields[2], joint)?,
            alpha: parse_field(fields[3], joint)?,
            joint,
        })
    }
}

impl DhKinematics {
    /// Parses a whole input document. Blank lines are skipped; joints are
    /// numbered 1..n in row order.
    pub fn from_text(text: &str) -> Result<Self, ParameterError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            rows.push(DhRow::parse_line(line, rows.len() + 1)?);
        }
        if rows.is_empty() {
            return Err(ParameterError::EmptyTable);
        }
        Ok(DhKinematics::new(rows))
    }

    /// Reads and parses a DH parameter table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }
}
