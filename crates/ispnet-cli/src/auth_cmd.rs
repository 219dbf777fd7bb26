//! Auth subcommands: login, register, logout, status, password reset.
//!
//! User-facing output uses writeln! to stdout (this is a CLI binary, not debug output).

use std::io::{self, Write};

use dialoguer::Password;

use ispnet_core::auth;
use ispnet_core::session::{Role, Session};

use crate::config::CliConfig;
use crate::portal;

/// Auth subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum AuthAction {
    /// Log in to the portal.
    Login {
        /// Username or email.
        #[arg(short, long)]
        username: String,
        /// Password (prompted when omitted).
        #[arg(short, long)]
        password: Option<String>,
        /// Role to sign in as: customer or admin.
        #[arg(short, long, default_value = "customer")]
        role: Role,
    },
    /// Register a new account.
    Register {
        /// Username.
        #[arg(short, long)]
        username: String,
        /// Email address.
        #[arg(short, long)]
        email: String,
        /// Account role: customer or admin.
        #[arg(short, long, default_value = "customer")]
        role: Role,
    },
    /// Log out and clear the stored session.
    Logout,
    /// Show current session status.
    Status,
    /// Request a password reset code by email.
    ForgotPassword {
        /// Email address the account is registered under.
        #[arg(short, long)]
        email: String,
    },
    /// Redeem a reset code for a new password.
    ResetPassword {
        /// Email address the code was sent to.
        #[arg(short, long)]
        email: String,
        /// One-time reset code.
        #[arg(short, long)]
        otp: String,
    },
}

/// Execute an auth subcommand.
pub async fn run(action: AuthAction, config: &mut CliConfig) -> anyhow::Result<()> {
    match action {
        AuthAction::Login {
            username,
            password,
            role,
        } => login(config, &username, password, role).await,
        AuthAction::Register {
            username,
            email,
            role,
        } => register(config, &username, &email, role).await,
        AuthAction::Logout => logout(config).await,
        AuthAction::Status => {
            status(config);
            Ok(())
        }
        AuthAction::ForgotPassword { email } => forgot_password(config, &email).await,
        AuthAction::ResetPassword { email, otp } => reset_password(config, &email, &otp).await,
    }
}

async fn login(
    config: &mut CliConfig,
    username: &str,
    password: Option<String>,
    role: Role,
) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let client = portal::anonymous_client(config)?;
    let resp = client.login(username, &password).await?;

    // The backend authenticated the credentials, but a login under the
    // wrong role tab is rejected locally and nothing is stored.
    auth::verify_selected_role(role, resp.role)?;

    config.session = Some(Session {
        user_id: resp.user_id,
        username: resp.username.clone(),
        role: resp.role,
        token: resp.token,
    });
    config.save()?;

    let mut out = io::stdout();
    writeln!(out, "Logged in as {} ({})", resp.username, resp.role)?;
    Ok(())
}

async fn register(
    config: &mut CliConfig,
    username: &str,
    email: &str,
    role: Role,
) -> anyhow::Result<()> {
    let password: String = Password::new().with_prompt("Password").interact()?;
    let confirm: String = Password::new().with_prompt("Confirm password").interact()?;
    auth::validate_password_reset(&password, &confirm)?;

    let client = portal::anonymous_client(config)?;
    client.register(username, email, &password, role).await?;

    let mut out = io::stdout();
    writeln!(out, "Account created. You can now log in with `ispnet auth login`.")?;
    Ok(())
}

async fn logout(config: &mut CliConfig) -> anyhow::Result<()> {
    // Server-side invalidation is best-effort; the local session is
    // cleared no matter what the backend says.
    if config.session.is_some() {
        if let Ok(client) = portal::authed_client(config) {
            let _ = client.logout().await;
        }
    }
    config.clear_session();
    config.save()?;
    let mut out = io::stdout();
    writeln!(out, "Logged out")?;
    Ok(())
}

fn status(config: &CliConfig) {
    let mut out = io::stdout();
    match &config.session {
        Some(session) => {
            let _ = writeln!(out, "Logged in as: {}", session.username);
            let _ = writeln!(out, "Role:         {}", session.role);
            let _ = writeln!(out, "User ID:      {}", session.user_id);
            let _ = writeln!(out, "Portal:       {}", config.portal_url());
        }
        None => {
            let _ = writeln!(out, "Not logged in");
        }
    }
}

async fn forgot_password(config: &CliConfig, email: &str) -> anyhow::Result<()> {
    let client = portal::anonymous_client(config)?;
    client.forgot_password(email).await?;
    let mut out = io::stdout();
    writeln!(out, "If {email} is registered, a reset code has been sent.")?;
    Ok(())
}

async fn reset_password(config: &CliConfig, email: &str, otp: &str) -> anyhow::Result<()> {
    let password: String = Password::new().with_prompt("New password").interact()?;
    let confirm: String = Password::new().with_prompt("Confirm password").interact()?;
    // Only the password pair is validated here; the backend owns code
    // validity and expiry.
    auth::validate_password_reset(&password, &confirm)?;

    let client = portal::anonymous_client(config)?;
    client.reset_password(email, otp, &password).await?;

    let mut out = io::stdout();
    writeln!(out, "Password updated. Log in with the new password.")?;
    Ok(())
}
