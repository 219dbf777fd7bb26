//! Local auth checks that run before any network call.

use crate::error::{Error, Result};
use crate::session::Role;

/// Minimum accepted password length for resets and registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reject a login locally when the backend-reported role differs from the
/// role the user selected. The backend authenticated the credentials; this
/// is a UX guard, not a security boundary.
pub fn verify_selected_role(selected: Role, returned: Role) -> Result<()> {
    if selected == returned {
        Ok(())
    } else {
        Err(Error::RoleMismatch { selected, returned })
    }
}

/// Validate a password-reset submission before contacting the backend.
///
/// The backend remains the source of truth for OTP validity and expiry;
/// only the password pair is checked here.
pub fn validate_password_reset(new_password: &str, confirm_password: &str) -> Result<()> {
    if new_password != confirm_password {
        return Err(Error::Validation("passwords do not match".into()));
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}
