//! Parsing of stored registration codes back into their segments.
//!
//! Transfers rewrite only the campus, shift and year segments while carrying
//! everything else verbatim, so the parsers return the raw segment strings
//! rather than decoded numbers.

use entity::enums::{Shift, StaffRole};

use crate::error::code::CodeError;

/// Segments of a parsed employee or student code.
///
/// All fields are the raw substrings as stored; a rewrite re-emits them without
/// normalizing widths or renumbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCode {
    /// Campus number segment including its prefix, e.g. `C06`.
    pub campus_code: String,
    /// Single-letter shift segment, e.g. `M`.
    pub shift_code: String,
    /// Two-digit year segment, e.g. `25`.
    pub year_code: String,
    /// Single-letter role segment for employee codes; `None` for student codes.
    pub role_code: Option<String>,
    /// Sequence digits, e.g. `0042`.
    pub sequence: String,
}

fn malformed(code: &str, reason: &str) -> CodeError {
    CodeError::MalformedCode {
        code: code.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses an employee code such as `C06-M-25-T-0007`.
pub fn parse_employee_code(code: &str) -> Result<ParsedCode, CodeError> {
    let segments: Vec<&str> = code.split('-').collect();

    let [campus, shift, year, role, sequence] = segments.as_slice() else {
        return Err(malformed(code, "expected 5 dash-separated segments"));
    };

    let campus_digits = campus
        .strip_prefix('C')
        .ok_or_else(|| malformed(code, "campus segment must start with 'C'"))?;
    if campus_digits.is_empty() || !campus_digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(code, "campus segment must be 'C' followed by digits"));
    }

    if shift.len() != 1 || !shift.chars().all(|c| Shift::from_letter(c).is_some()) {
        return Err(malformed(code, "shift segment must be 'M', 'A' or 'E'"));
    }

    if year.len() != 2 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(code, "year segment must be two digits"));
    }

    if role.len() != 1 || !role.chars().all(|c| StaffRole::from_letter(c).is_some()) {
        return Err(malformed(code, "role segment must be 'T', 'C', 'P' or 'S'"));
    }

    if sequence.is_empty() || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(code, "sequence segment must be digits"));
    }

    Ok(ParsedCode {
        campus_code: campus.to_string(),
        shift_code: shift.to_string(),
        year_code: year.to_string(),
        role_code: Some(role.to_string()),
        sequence: sequence.to_string(),
    })
}

/// Parses a student code such as `C06M25-0042`.
pub fn parse_student_code(code: &str) -> Result<ParsedCode, CodeError> {
    let segments: Vec<&str> = code.split('-').collect();

    let [prefix, sequence] = segments.as_slice() else {
        return Err(malformed(code, "expected 2 dash-separated segments"));
    };

    let rest = prefix
        .strip_prefix('C')
        .ok_or_else(|| malformed(code, "prefix must start with 'C'"))?;

    let digit_count = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digit_count == 0 {
        return Err(malformed(code, "campus number must follow the 'C' prefix"));
    }
    let (campus_digits, rest) = rest.split_at(digit_count);

    let mut chars = rest.chars();
    let shift = chars
        .next()
        .filter(|c| Shift::from_letter(*c).is_some())
        .ok_or_else(|| malformed(code, "shift letter must be 'M', 'A' or 'E'"))?;

    let year: String = chars.collect();
    if year.len() != 2 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(code, "year segment must be two digits"));
    }

    if sequence.is_empty() || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(code, "sequence segment must be digits"));
    }

    Ok(ParsedCode {
        campus_code: format!("C{campus_digits}"),
        shift_code: shift.to_string(),
        year_code: year,
        role_code: None,
        sequence: sequence.to_string(),
    })
}
