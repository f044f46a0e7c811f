use serde::{Deserialize, Serialize};

use crate::constants::FIELD_SEPARATOR;

/// One data line of the premium users file
///
/// The backing file stores pipe-delimited records:
/// `<user_id> | <username or blank> | <YYYY-MM-DD>`. Only the user id is
/// required; whitespace around fields is insignificant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRecord {
    /// Telegram user identifier
    pub user_id: u64,
    /// Username at activation time, if one was recorded
    pub username: Option<String>,
    /// Activation date as an ISO `YYYY-MM-DD` string, if recorded
    pub activated_date: Option<String>,
}

impl PremiumRecord {
    /// Parse a raw file line into a record
    ///
    /// Returns `None` for comment lines, blank lines, and lines whose first
    /// field is not a plain decimal integer. Malformed ids are dropped
    /// silently; lenient parsing is the file format's contract.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let mut fields = trimmed.split(FIELD_SEPARATOR);
        let user_id = parse_user_id(fields.next().unwrap_or("").trim())?;
        let username = fields
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        let activated_date = fields
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Some(PremiumRecord {
            user_id,
            username,
            activated_date,
        })
    }
}

/// Parse a candidate user id field
///
/// Accepts only non-empty, all-ASCII-digit strings; anything else (signs,
/// hex, overflow past `u64::MAX`) yields `None` and the caller skips the line.
pub fn parse_user_id(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
