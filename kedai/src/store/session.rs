//! Session store
//!
//! The single source of truth for session state: the bearer token and
//! the cached user profile, persisted together as one record. Restored
//! at startup, written on sign-in, deleted on sign-out.

use crate::storage::JsonRecord;
use serde::{Deserialize, Serialize};
use shared::client::UserInfo;

/// Persisted credential: bearer token plus cached profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub user: UserInfo,
}

/// Session state owner
pub struct SessionStore {
    credential: Option<Credential>,
    record: JsonRecord,
}

impl SessionStore {
    /// Restore a persisted session if present
    pub fn load(record: JsonRecord) -> Self {
        let credential: Option<Credential> = record.load();
        if let Some(ref cred) = credential {
            tracing::info!(username = %cred.user.username, "Restored session");
        }
        Self { credential, record }
    }

    /// Store the credential and persist it
    pub fn sign_in(&mut self, token: String, user: UserInfo) {
        tracing::debug!(username = %user.username, "Signed in");
        let cred = Credential { token, user };
        if let Err(e) = self.record.save(&cred) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        self.credential = Some(cred);
    }

    /// Clear the credential and delete the persisted record
    pub fn sign_out(&mut self) {
        self.credential = None;
        if let Err(e) = self.record.delete() {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.credential.as_ref().map(|c| &c.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SESSION_RECORD;
    use tempfile::TempDir;

    fn user() -> UserInfo {
        UserInfo {
            id: 9,
            username: "dewi".to_string(),
            name: "Dewi".to_string(),
            email: Some("dewi@example.com".to_string()),
        }
    }

    #[test]
    fn test_sign_in_persists_and_restores() {
        let dir = TempDir::new().unwrap();
        {
            let record = JsonRecord::new(dir.path(), SESSION_RECORD);
            let mut session = SessionStore::load(record);
            assert!(!session.is_signed_in());
            session.sign_in("tok-1".to_string(), user());
        }

        let restored = SessionStore::load(JsonRecord::new(dir.path(), SESSION_RECORD));
        assert!(restored.is_signed_in());
        assert_eq!(restored.token(), Some("tok-1"));
        assert_eq!(restored.user().unwrap().username, "dewi");
    }

    #[test]
    fn test_sign_out_clears_record() {
        let dir = TempDir::new().unwrap();
        let record = JsonRecord::new(dir.path(), SESSION_RECORD);
        let mut session = SessionStore::load(record.clone());
        session.sign_in("tok-1".to_string(), user());
        assert!(record.exists());

        session.sign_out();
        assert!(!session.is_signed_in());
        assert!(!record.exists());

        let restored = SessionStore::load(record);
        assert!(!restored.is_signed_in());
    }

    #[test]
    fn test_corrupt_session_record_reads_as_signed_out() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_RECORD), "{oops").unwrap();

        let session = SessionStore::load(JsonRecord::new(dir.path(), SESSION_RECORD));
        assert!(!session.is_signed_in());
    }
}
