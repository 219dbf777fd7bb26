//! CLI configuration management.
//!
//! Persists the portal URL and the active session to `~/.ispnet/config.json`.
//! The session is stored and cleared as one record; a half-written login
//! can never leave a token without its user or role.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ispnet_core::session::Session;

/// Portal URL assumed when none is configured.
pub const DEFAULT_PORTAL_URL: &str = "http://localhost:8080";

/// Persistent CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Portal backend URL (e.g., "<https://portal.ispnet.io>").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
    /// Active session, if logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl CliConfig {
    /// Path to the config directory: `~/.ispnet/`.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".ispnet"))
    }

    /// Path to the config file: `~/.ispnet/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.json"))
    }

    /// Load config from disk. Returns default if file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let dir =
            Self::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Effective portal URL.
    pub fn portal_url(&self) -> &str {
        self.portal_url.as_deref().unwrap_or(DEFAULT_PORTAL_URL)
    }

    /// The stored session, or a not-logged-in error naming the command
    /// the user should run.
    pub fn require_session(&self) -> Result<&Session, ispnet_core::Error> {
        self.session.as_ref().ok_or_else(|| {
            ispnet_core::Error::NotAuthenticated("run `ispnet auth login` first".into())
        })
    }

    /// Drop the stored session.
    pub fn clear_session(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ispnet_core::session::Role;

    fn session() -> Session {
        Session {
            user_id: "u-1".into(),
            username: "alice".into(),
            role: Role::Customer,
            token: "tok".into(),
        }
    }

    #[test]
    fn default_config_is_anonymous() {
        let cfg = CliConfig::default();
        assert!(cfg.session.is_none());
        assert_eq!(cfg.portal_url(), DEFAULT_PORTAL_URL);
        assert!(cfg.require_session().is_err());
    }

    #[test]
    fn config_roundtrip_json() {
        let cfg = CliConfig {
            portal_url: Some("https://portal.test:8443".into()),
            session: Some(session()),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let loaded: CliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.portal_url.unwrap(), "https://portal.test:8443");
        let s = loaded.session.unwrap();
        assert_eq!(s.username, "alice");
        assert_eq!(s.role, Role::Customer);
        assert_eq!(s.token, "tok");
    }

    #[test]
    fn clear_session_removes_whole_record() {
        let mut cfg = CliConfig {
            session: Some(session()),
            ..Default::default()
        };
        cfg.clear_session();
        assert!(cfg.session.is_none());
        assert!(cfg.require_session().is_err());
    }

    #[test]
    fn session_omitted_from_json_when_absent() {
        let cfg = CliConfig {
            portal_url: Some("https://portal.test".into()),
            session: None,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(
            !json.contains("session"),
            "session should be omitted from JSON when None, got: {json}",
        );
    }

    #[test]
    fn config_file_roundtrips_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let cfg = CliConfig {
            portal_url: Some("https://portal.test".into()),
            session: Some(session()),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
        let loaded: CliConfig =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.session.unwrap().user_id, "u-1");
    }

    #[test]
    fn config_path_contains_ispnet() {
        if let Some(path) = CliConfig::config_path() {
            assert!(path.to_string_lossy().contains(".ispnet"));
            assert!(path.to_string_lossy().contains("config.json"));
        }
    }

    #[test]
    fn require_session_exposes_token() {
        let cfg = CliConfig {
            session: Some(session()),
            ..Default::default()
        };
        assert_eq!(cfg.require_session().unwrap().token, "tok");
    }
}
