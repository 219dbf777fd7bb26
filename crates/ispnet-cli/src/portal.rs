//! Portal client construction from CLI configuration.

use ispnet_client::{PortalClient, PortalConfig};

use crate::config::CliConfig;

/// Client without credentials, for the pre-login auth endpoints.
pub fn anonymous_client(config: &CliConfig) -> anyhow::Result<PortalClient> {
    let client = PortalClient::new(&PortalConfig {
        base_url: config.portal_url().to_string(),
        token: None,
    })?;
    Ok(client)
}

/// Client carrying the stored session's bearer token. Errors when no
/// session is stored.
pub fn authed_client(config: &CliConfig) -> anyhow::Result<PortalClient> {
    let session = config.require_session()?;
    let client = PortalClient::new(&PortalConfig {
        base_url: config.portal_url().to_string(),
        token: Some(session.token.clone()),
    })?;
    Ok(client)
}

/// The one place an expired session is reacted to: when a command failed
/// with HTTP 401, drop the stored session and report `true`. Any other
/// error leaves the session alone.
pub fn expire_session_if_unauthorized(err: &anyhow::Error, config: &mut CliConfig) -> bool {
    if matches!(
        err.downcast_ref::<ispnet_client::PortalError>(),
        Some(ispnet_client::PortalError::Unauthorized)
    ) {
        config.clear_session();
        true
    } else {
        false
    }
}
