//! Pure formatting rules for registration codes.
//!
//! Everything here is deterministic string assembly; nothing touches the database.
//! Sequence numbers come from the global counter, disambiguators from the caller.

use entity::enums::{LevelStage, Shift, StaffRole};

/// Formats the campus number segment used inside person codes, e.g. `C06`.
///
/// Two digits cover the common case; larger campus IDs simply widen the segment.
pub fn format_campus_number(campus_id: i32) -> String {
    format!("C{campus_id:02}")
}

/// Formats a stored campus code from name and city initials plus a disambiguator.
///
/// "The City School" in "Karachi" with disambiguator 7 becomes `TCK07`. The caller
/// owns uniqueness: on a clash it retries with a different disambiguator.
pub fn format_campus_code(name: &str, city: &str, disambiguator: u8) -> String {
    let mut initials: Vec<char> = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
        .take(2)
        .collect();

    // Single-word names fall back to their first two letters.
    if initials.len() < 2 {
        initials = name.chars().filter(|c| c.is_alphabetic()).take(2).collect();
    }

    let name_part: String = initials
        .into_iter()
        .flat_map(|c| c.to_uppercase())
        .collect();
    let city_part: String = city
        .chars()
        .find(|c| c.is_alphabetic())
        .into_iter()
        .flat_map(|c| c.to_uppercase())
        .collect();

    format!("{name_part}{city_part}{:02}", disambiguator % 100)
}

/// Formats a level code, e.g. `TCK07-L2-M`.
pub fn format_level_code(campus_code: &str, stage: LevelStage, shift: Shift) -> String {
    format!("{campus_code}-{}-{}", stage.segment(), shift.letter())
}

/// Formats a grade code by appending the grade abbreviation, e.g. `TCK07-L2-M-G03`.
pub fn format_grade_code(level_code: &str, grade_name: &str) -> String {
    format!("{level_code}-{}", grade_abbreviation(grade_name))
}

/// Formats a classroom code by appending the section, e.g. `TCK07-L2-M-G03-A`.
pub fn format_classroom_code(grade_code: &str, section: &str) -> String {
    format!("{grade_code}-{}", section.to_uppercase())
}

/// Formats an employee code, e.g. `C06-M-25-T-0007`.
///
/// Segments are campus number, shift letter, two-digit year, role letter and the
/// zero-padded sequence. Sequences past 9999 widen rather than wrap.
pub fn format_employee_code(
    campus_id: i32,
    shift: Shift,
    year: i32,
    role: StaffRole,
    sequence: i64,
) -> String {
    format!(
        "{}-{}-{:02}-{}-{:04}",
        format_campus_number(campus_id),
        shift.letter(),
        year % 100,
        role.letter(),
        sequence,
    )
}

/// Formats a student code, e.g. `C06M25-0042`.
///
/// The prefix packs campus number, shift letter and two-digit year without
/// separators; the sequence sits after the dash.
pub fn format_student_code(campus_id: i32, shift: Shift, year: i32, sequence: i64) -> String {
    format!(
        "{}{}{:02}-{:04}",
        format_campus_number(campus_id),
        shift.letter(),
        year % 100,
        sequence
    )
}

/// Rebuilds an employee code at a new campus and shift.
///
/// The role letter and sequence digits are carried over from the old code exactly
/// as stored; the year segment reflects the year of the rewrite.
pub fn rewrite_employee_code(
    campus_id: i32,
    shift: Shift,
    year: i32,
    role_code: &str,
    sequence: &str,
) -> String {
    format!(
        "{}-{}-{:02}-{role_code}-{sequence}",
        format_campus_number(campus_id),
        shift.letter(),
        year % 100,
    )
}

/// Rebuilds a student code at a new campus and shift.
///
/// The sequence digits are carried over from the old code exactly as stored.
pub fn rewrite_student_code(campus_id: i32, shift: Shift, year: i32, sequence: &str) -> String {
    format!(
        "{}{}{:02}-{sequence}",
        format_campus_number(campus_id),
        shift.letter(),
        year % 100,
    )
}

/// Grade names with fixed abbreviations.
///
/// Imported rosters spell grade names loosely, so matching ignores case,
/// whitespace and punctuation and tolerates the spellings that show up in
/// practice ("KG", "Play Group", the "Nursary" typo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownGrade {
    /// Playgroup, abbreviated `PG`.
    Playgroup,
    /// Nursery, abbreviated `N`.
    Nursery,
    /// Kindergarten, abbreviated `KG`.
    Kindergarten,
    /// Numbered grade 1 through 12, abbreviated `G01`..`G12`.
    Grade(u8),
}

impl KnownGrade {
    /// Matches a raw grade name against the known table.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "playgroup" | "pg" => Some(Self::Playgroup),
            "nursery" | "nursary" => Some(Self::Nursery),
            "kindergarten" | "kg" => Some(Self::Kindergarten),
            _ => {
                let digits = normalized
                    .strip_prefix("grade")
                    .or_else(|| normalized.strip_prefix("class"))?;
                let number = digits.parse::<u8>().ok()?;

                (1..=12).contains(&number).then_some(Self::Grade(number))
            }
        }
    }

    /// The abbreviation used in grade codes.
    pub fn abbreviation(&self) -> String {
        match self {
            Self::Playgroup => "PG".to_string(),
            Self::Nursery => "N".to_string(),
            Self::Kindergarten => "KG".to_string(),
            Self::Grade(number) => format!("G{number:02}"),
        }
    }
}

/// Abbreviates a grade name for use in codes.
///
/// Unknown names degrade to their first three alphanumeric characters uppercased
/// instead of failing, so a new grade name never blocks code assignment.
pub fn grade_abbreviation(name: &str) -> String {
    match KnownGrade::from_name(name) {
        Some(grade) => grade.abbreviation(),
        None => name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(3)
            .collect::<String>()
            .to_uppercase(),
    }
}
