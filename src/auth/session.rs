//! Session storage for the Vastra TUI.
//!
//! An authenticated session is one record: the bearer token and the user
//! profile it belongs to, persisted together in
//! `~/.vastra/.session.json`. Storing them as a single record means the
//! token can never outlive the user it was issued for, or vice versa.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::warn;

/// The session directory name.
const SESSION_DIR: &str = ".vastra";

/// The session file name.
const SESSION_FILE: &str = ".session.json";

/// Customer profile as returned by the storefront API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Server-assigned id. Older API versions omit it.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, e.g. "Priya Sharma".
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl User {
    /// Avatar initials derived from the display name.
    ///
    /// One word yields its first letter; two or more yield the first
    /// letters of the first and last words. Always uppercased.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = match words.next() {
            Some(w) => w,
            None => return String::new(),
        };

        let mut initials: String = first_letter_upper(first);
        if let Some(last) = words.last() {
            initials.extend(first_letter_upper(last).chars());
        }
        initials
    }
}

fn first_letter_upper(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// An authenticated session: bearer token plus the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Owns the on-disk session record.
#[derive(Debug)]
pub struct SessionManager {
    /// Path to the session file.
    session_path: PathBuf,
}

impl SessionManager {
    /// Create a manager rooted at the default location under the home
    /// directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let session_path = home.join(SESSION_DIR).join(SESSION_FILE);
        Some(Self { session_path })
    }

    /// Create a manager over an explicit file path (tests, or the
    /// `VASTRA_SESSION_PATH` override).
    pub fn with_path(session_path: PathBuf) -> Self {
        Self { session_path }
    }

    /// Get the path to the session file.
    pub fn session_path(&self) -> &PathBuf {
        &self.session_path
    }

    /// Load the persisted session.
    ///
    /// A missing file means no session. A file that exists but cannot be
    /// read or parsed is deleted and also treated as no session: the
    /// user is simply signed out rather than shown an error.
    pub fn load(&self) -> Option<Session> {
        if !self.session_path.exists() {
            return None;
        }

        let file = match File::open(&self.session_path) {
            Ok(f) => f,
            Err(e) => {
                warn!("unreadable session file, discarding: {}", e);
                let _ = fs::remove_file(&self.session_path);
                return None;
            }
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("corrupt session file, discarding: {}", e);
                let _ = fs::remove_file(&self.session_path);
                None
            }
        }
    }

    /// Save the session record.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, session: &Session) -> bool {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.session_path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, session).is_err() {
            return false;
        }

        writer.flush().is_ok()
    }

    /// Remove the session record.
    ///
    /// Returns `true` if successful or the file didn't exist.
    pub fn clear(&self) -> bool {
        if !self.session_path.exists() {
            return true;
        }

        fs::remove_file(&self.session_path).is_ok()
    }
}
