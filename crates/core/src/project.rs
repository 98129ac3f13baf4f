//! Project field validation and abbreviation helpers.
//!
//! The HTTP layer runs [`ProjectFields::validate`] before any insert or
//! update reaches the database. Abbreviation suggestions are derived from
//! the project name and made unique by the caller, which knows which
//! abbreviations are already taken.

use crate::error::CoreError;
use crate::project_state::ProjectState;
use crate::types::{Date, LookupId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a project abbreviation.
pub const MAX_ABBREVIATION_LENGTH: usize = 10;

/// Maximum length of an EA certificate reference.
pub const MAX_EA_CERTIFICATE_LENGTH: usize = 255;

/// Number of letters taken from a single-word name when suggesting an
/// abbreviation.
pub const SINGLE_WORD_PREFIX_LENGTH: usize = 3;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Borrowed view over the writable project fields.
///
/// Every field is optional so the same check serves both create (where the
/// caller fills in required fields) and partial update payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectFields<'a> {
    pub name: Option<&'a str>,
    pub latitude: Option<&'a str>,
    pub longitude: Option<&'a str>,
    pub abbreviation: Option<&'a str>,
    pub ea_certificate: Option<&'a str>,
    pub capital_investment: Option<f64>,
    pub fte_positions_construction: Option<i32>,
    pub fte_positions_operation: Option<i32>,
    pub eac_signed: Option<Date>,
    pub eac_expires: Option<Date>,
    pub project_state_id: Option<LookupId>,
}

impl ProjectFields<'_> {
    /// Check every present field, returning the first failure.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = self.name {
            validate_name(name)?;
        }
        if let Some(lat) = self.latitude {
            validate_coordinate(lat, "latitude", 90.0)?;
        }
        if let Some(lon) = self.longitude {
            validate_coordinate(lon, "longitude", 180.0)?;
        }
        if let Some(abbr) = self.abbreviation {
            validate_abbreviation(abbr)?;
        }
        if let Some(cert) = self.ea_certificate {
            if cert.chars().count() > MAX_EA_CERTIFICATE_LENGTH {
                return Err(CoreError::Validation(format!(
                    "EA certificate exceeds maximum length of \
                     {MAX_EA_CERTIFICATE_LENGTH} characters"
                )));
            }
        }
        if let Some(amount) = self.capital_investment {
            if !amount.is_finite() || amount < 0.0 {
                return Err(CoreError::Validation(
                    "Capital investment must be a non-negative number".to_string(),
                ));
            }
        }
        validate_fte("fte_positions_construction", self.fte_positions_construction)?;
        validate_fte("fte_positions_operation", self.fte_positions_operation)?;
        if let Some(state_id) = self.project_state_id {
            if ProjectState::from_id(state_id).is_none() {
                return Err(CoreError::Validation(format!(
                    "Unknown project state id {state_id}"
                )));
            }
        }
        validate_eac_dates(self.eac_signed, self.eac_expires)
    }
}

/// Validate a project name: non-empty once trimmed and within length.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a textual coordinate: it must parse as a decimal number with an
/// absolute value no greater than `bound`.
pub fn validate_coordinate(value: &str, field: &str, bound: f64) -> Result<(), CoreError> {
    let parsed: f64 = value.trim().parse().map_err(|_| {
        CoreError::Validation(format!("{field} must be a decimal number, got '{value}'"))
    })?;
    if !parsed.is_finite() || parsed.abs() > bound {
        return Err(CoreError::Validation(format!(
            "{field} must be between -{bound} and {bound}"
        )));
    }
    Ok(())
}

/// Validate an abbreviation: 1 to 10 ASCII alphanumerics.
///
/// Case is not checked here; callers store the result of
/// [`normalize_abbreviation`].
pub fn validate_abbreviation(abbreviation: &str) -> Result<(), CoreError> {
    let trimmed = abbreviation.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Abbreviation must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_ABBREVIATION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Abbreviation exceeds maximum length of {MAX_ABBREVIATION_LENGTH} characters"
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoreError::Validation(
            "Abbreviation may only contain letters and digits".to_string(),
        ));
    }
    Ok(())
}

/// Canonical stored form of an abbreviation.
pub fn normalize_abbreviation(abbreviation: &str) -> String {
    abbreviation.trim().to_ascii_uppercase()
}

fn validate_fte(field: &str, value: Option<i32>) -> Result<(), CoreError> {
    match value {
        Some(n) if n < 0 => Err(CoreError::Validation(format!(
            "{field} must not be negative"
        ))),
        _ => Ok(()),
    }
}

/// A certificate cannot expire before it was signed.
pub fn validate_eac_dates(signed: Option<Date>, expires: Option<Date>) -> Result<(), CoreError> {
    if let (Some(signed), Some(expires)) = (signed, expires) {
        if expires < signed {
            return Err(CoreError::Validation(format!(
                "EAC expiry date {expires} is before signed date {signed}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Abbreviation suggestions
// ---------------------------------------------------------------------------

/// Build a base abbreviation from a project name.
///
/// Multi-word names use the first character of each word; a single word uses
/// its first three characters. Only ASCII alphanumerics survive and the
/// result is upper-cased and capped at [`MAX_ABBREVIATION_LENGTH`]. Returns
/// `None` when the name has no usable characters.
pub fn suggest_abbreviation(name: &str) -> Option<String> {
    let words: Vec<String> = name
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_' || c == '/')
        .map(|w| {
            w.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let base: String = match words.as_slice() {
        [] => return None,
        [single] => single.chars().take(SINGLE_WORD_PREFIX_LENGTH).collect(),
        many => many.iter().filter_map(|w| w.chars().next()).collect(),
    };

    Some(
        base.to_ascii_uppercase()
            .chars()
            .take(MAX_ABBREVIATION_LENGTH)
            .collect(),
    )
}

/// Candidate abbreviations for `base`, in preference order.
///
/// Yields `base` itself followed by `base1`, `base2`, ... . When the suffix
/// would push the candidate past [`MAX_ABBREVIATION_LENGTH`], the base is
/// truncated to make room.
pub fn abbreviation_candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base.to_string()).chain((1u32..).map(move |n| {
        let suffix = n.to_string();
        let keep = MAX_ABBREVIATION_LENGTH.saturating_sub(suffix.len());
        let prefix: String = base.chars().take(keep).collect();
        format!("{prefix}{suffix}")
    }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_fields_are_valid() {
        assert!(ProjectFields::default().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_matches!(validate_name("   "), Err(CoreError::Validation(_)));
        assert!(validate_name("Site C Clean Energy").is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_matches!(validate_name(&name), Err(CoreError::Validation(_)));
    }

    #[test]
    fn coordinates_must_be_numeric_and_in_range() {
        assert!(validate_coordinate("49.2827", "latitude", 90.0).is_ok());
        assert!(validate_coordinate(" -123.1207 ", "longitude", 180.0).is_ok());
        assert_matches!(
            validate_coordinate("north", "latitude", 90.0),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_coordinate("91", "latitude", 90.0),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_coordinate("NaN", "longitude", 180.0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn abbreviation_rules() {
        assert!(validate_abbreviation("SITEC").is_ok());
        assert!(validate_abbreviation("ab12").is_ok());
        assert_matches!(validate_abbreviation(""), Err(CoreError::Validation(_)));
        assert_matches!(
            validate_abbreviation("ABCDEFGHIJK"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(validate_abbreviation("A-B"), Err(CoreError::Validation(_)));
        assert_eq!(normalize_abbreviation(" ab12 "), "AB12");
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let fields = ProjectFields {
            capital_investment: Some(-1.0),
            ..Default::default()
        };
        assert_matches!(fields.validate(), Err(CoreError::Validation(_)));

        let fields = ProjectFields {
            fte_positions_operation: Some(-3),
            ..Default::default()
        };
        assert_matches!(fields.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_state_id_is_rejected() {
        let fields = ProjectFields {
            project_state_id: Some(42),
            ..Default::default()
        };
        assert_matches!(fields.validate(), Err(CoreError::Validation(_)));

        let fields = ProjectFields {
            project_state_id: Some(ProjectState::Operation.id()),
            ..Default::default()
        };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn eac_expiry_before_signing_is_rejected() {
        assert_matches!(
            validate_eac_dates(Some(date(2020, 5, 1)), Some(date(2019, 5, 1))),
            Err(CoreError::Validation(_))
        );
        assert!(validate_eac_dates(Some(date(2020, 5, 1)), Some(date(2025, 5, 1))).is_ok());
        assert!(validate_eac_dates(None, Some(date(2025, 5, 1))).is_ok());
    }

    #[test]
    fn suggest_uses_initials_for_multi_word_names() {
        assert_eq!(
            suggest_abbreviation("Site C Clean Energy Project").as_deref(),
            Some("SCCEP")
        );
        assert_eq!(
            suggest_abbreviation("north-east coal mine").as_deref(),
            Some("NECM")
        );
    }

    #[test]
    fn suggest_uses_prefix_for_single_word_names() {
        assert_eq!(suggest_abbreviation("Brucejack").as_deref(), Some("BRU"));
        assert_eq!(suggest_abbreviation("KSM").as_deref(), Some("KSM"));
    }

    #[test]
    fn suggest_caps_length_and_skips_symbols() {
        let name = "a b c d e f g h i j k l";
        assert_eq!(suggest_abbreviation(name).as_deref(), Some("ABCDEFGHIJ"));
        assert_eq!(suggest_abbreviation(" & !! "), None);
    }

    #[test]
    fn candidates_append_numeric_suffixes_within_limit() {
        let first: Vec<String> = abbreviation_candidates("KSM").take(3).collect();
        assert_eq!(first, vec!["KSM", "KSM1", "KSM2"]);

        let long: Vec<String> = abbreviation_candidates("ABCDEFGHIJ").skip(1).take(1).collect();
        assert_eq!(long, vec!["ABCDEFGHI1"]);

        let tenth = abbreviation_candidates("ABCDEFGHIJ").nth(10).unwrap();
        assert_eq!(tenth, "ABCDEFGH10");
    }
}
