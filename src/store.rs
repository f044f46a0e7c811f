use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::constants::{
    ACTIVATED_DATE_FORMAT, FIELD_SEPARATOR, FILE_HEADER_FORMAT, FILE_HEADER_TITLE,
    MSG_ALREADY_PREMIUM, MSG_NOT_PREMIUM,
};
use crate::error::Result;
use crate::models::premium::{parse_user_id, PremiumRecord};

/// Premium user store backed by a flat pipe-delimited text file
///
/// The in-memory set is the authoritative state; the file is a human-editable
/// mirror kept in sync by every mutation. Single-owner, single-threaded:
/// callers that share a store across threads must wrap it in their own lock,
/// because `add`/`remove` perform unprotected read-then-write sequences
/// against the file.
pub struct PremiumStore {
    path: PathBuf,
    members: HashSet<u64>,
}

impl PremiumStore {
    /// Open the store at the given path, loading existing state
    ///
    /// If the file does not exist it is created with the two-line header
    /// comment block and the store starts empty. That is the expected
    /// first-run path, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = PremiumStore {
            path: path.into(),
            members: HashSet::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload the member set from the backing file
    ///
    /// Comment lines (`#`) and blank lines are skipped. A data line counts
    /// only if the trimmed text before the first `|` is a plain decimal
    /// integer; anything else is dropped without error.
    pub fn load(&mut self) -> Result<()> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_empty_file()?;
                self.members.clear();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to read premium file {:?}: {}", self.path, e);
                return Err(e.into());
            }
        };

        let mut members = HashSet::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let candidate = trimmed.split(FIELD_SEPARATOR).next().unwrap_or("").trim();
            match parse_user_id(candidate) {
                Some(id) => {
                    members.insert(id);
                }
                None => {
                    tracing::debug!("Skipping line with non-numeric id field: {:?}", candidate);
                }
            }
        }

        tracing::info!(
            "Loaded {} premium users from {:?}",
            members.len(),
            self.path
        );
        self.members = members;
        Ok(())
    }

    fn create_empty_file(&self) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(
            &self.path,
            format!("{FILE_HEADER_TITLE}\n{FILE_HEADER_FORMAT}\n"),
        )?;
        tracing::info!("Created new premium file at {:?}", self.path);
        Ok(())
    }

    /// Membership test, no side effects
    pub fn is_premium(&self, user_id: u64) -> bool {
        self.members.contains(&user_id)
    }

    /// Number of premium users currently loaded
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Grant premium access to a user
    ///
    /// Returns `(false, message)` without touching the file if the user is
    /// already premium. Otherwise appends one data line with today's local
    /// date and returns `(true, message)`. The username may be empty; the
    /// field is written blank in that case.
    pub fn add_premium_user(&mut self, user_id: u64, username: &str) -> Result<(bool, String)> {
        if self.members.contains(&user_id) {
            return Ok((false, MSG_ALREADY_PREMIUM.to_string()));
        }

        let date = Local::now().format(ACTIVATED_DATE_FORMAT);
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        write!(file, "\n{user_id} | {username} | {date}")?;

        self.members.insert(user_id);
        tracing::debug!("Added premium user {}", user_id);
        Ok((true, format!("User {user_id} added to premium list")))
    }

    /// Revoke premium access from a user
    ///
    /// Returns `(false, message)` without touching the file if the user is
    /// not premium. Otherwise rewrites the file, copying comment and blank
    /// lines through byte-for-byte and dropping data lines whose trimmed
    /// first field textually equals the decimal form of `user_id`.
    pub fn remove_premium_user(&mut self, user_id: u64) -> Result<(bool, String)> {
        if !self.members.contains(&user_id) {
            return Ok((false, MSG_NOT_PREMIUM.to_string()));
        }

        let id_text = user_id.to_string();
        let content = fs::read_to_string(&self.path)?;
        let mut kept = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                kept.push_str(line);
                continue;
            }
            // Textual match on the raw first field: a non-canonical spelling
            // of the same id (e.g. leading zeros) counts as a member on load
            // but is not matched here and survives the rewrite.
            let first = trimmed.split(FIELD_SEPARATOR).next().unwrap_or("").trim();
            if first != id_text {
                kept.push_str(line);
            }
        }
        fs::write(&self.path, kept)?;

        self.members.remove(&user_id);
        tracing::debug!("Removed premium user {}", user_id);
        Ok((true, format!("User {user_id} removed from premium list")))
    }

    /// Parse and return all data lines of the backing file
    ///
    /// Read-only; does not modify the member set.
    pub fn records(&self) -> Result<Vec<PremiumRecord>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .filter_map(PremiumRecord::parse_line)
            .collect())
    }
}
