//! Persisted login session
//!
//! The CLI runs one command per process, so the logged-in user is kept in
//! session.json between invocations. No file means nobody is logged in.

use std::path::PathBuf;

use crate::error::BuddyResult;
use crate::models::Session;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The active session, if any
    pub fn current(&self) -> BuddyResult<Option<Session>> {
        read_json(&self.path)
    }

    /// Replace the active session
    pub fn start(&self, session: &Session) -> BuddyResult<()> {
        write_json_atomic(&self.path, session)
    }

    /// End the active session; ending when none is active is not an error
    pub fn clear(&self) -> BuddyResult<()> {
        remove_if_exists(&self.path)
    }
}
