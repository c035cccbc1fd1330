// Session check and logout - kept outside the dashboard state on purpose
use crate::config::APP_NAME;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Operator,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    SignedOut,
    Operator { username: String },
    /// Admins belong on the admin console, not this dashboard
    Admin { username: String },
}

pub trait SessionStore {
    fn check(&self) -> SessionStatus;
    fn sign_in(&mut self, username: &str, role: Role) -> Result<()>;
    fn logout(&mut self) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct SessionRecord {
    logged_in: bool,
    role: Role,
    username: String,
}

impl SessionRecord {
    fn status(&self) -> SessionStatus {
        if !self.logged_in {
            return SessionStatus::SignedOut;
        }
        let username = self.username.clone();
        match self.role {
            Role::Operator => SessionStatus::Operator { username },
            Role::Admin => SessionStatus::Admin { username },
        }
    }
}

/// Session flags stored as a small TOML file in the user's data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or(DashboardError::NoConfigDir)?;
        Ok(Self::new(dirs.data_dir().join("session.toml")))
    }

    fn read(&self) -> Result<Option<SessionRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(toml::from_str(&contents)?))
    }
}

impl SessionStore for FileSessionStore {
    fn check(&self) -> SessionStatus {
        match self.read() {
            Ok(Some(record)) => record.status(),
            Ok(None) => SessionStatus::SignedOut,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable session file: {e}");
                SessionStatus::SignedOut
            }
        }
    }

    fn sign_in(&mut self, username: &str, role: Role) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let record = SessionRecord {
            logged_in: true,
            role,
            username: username.to_string(),
        };
        fs::write(&self.path, toml::to_string(&record)?)?;
        tracing::info!(username, "signed in");
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tracing::info!("signed out");
        Ok(())
    }
}

/// In-process store used by tests and by headless runs without a data dir.
#[derive(Default)]
pub struct MemorySessionStore {
    record: Option<SessionRecord>,
}

impl SessionStore for MemorySessionStore {
    fn check(&self) -> SessionStatus {
        self.record
            .as_ref()
            .map(SessionRecord::status)
            .unwrap_or(SessionStatus::SignedOut)
    }

    fn sign_in(&mut self, username: &str, role: Role) -> Result<()> {
        self.record = Some(SessionRecord {
            logged_in: true,
            role,
            username: username.to_string(),
        });
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        self.record = None;
        Ok(())
    }
}
