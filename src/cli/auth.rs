//! Sign-up and session commands

use clap::Args;
use zeroize::Zeroizing;

use crate::error::{BuddyError, BuddyResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// Username plus an optional password
#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Username
    pub username: String,

    /// Password; prompted for when neither this nor BUDDY_PASSWORD is given
    #[arg(long, env = "BUDDY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub fn handle_signup(storage: &Storage, args: CredentialArgs) -> BuddyResult<()> {
    let password = obtain_password(args.password, true)?;
    let user = AuthService::new(storage).signup(&args.username, &password)?;

    println!("Created user '{}'.", user.username);
    println!("Run 'buddy login {}' to start a session.", user.username);
    Ok(())
}

pub fn handle_login(storage: &Storage, args: CredentialArgs) -> BuddyResult<()> {
    let password = obtain_password(args.password, false)?;
    let user = AuthService::new(storage).login(&args.username, &password)?;

    println!("Logged in as '{}'.", user.username);
    Ok(())
}

pub fn handle_logout(storage: &Storage) -> BuddyResult<()> {
    match AuthService::new(storage).logout()? {
        Some(session) => println!("Logged out '{}'.", session.username),
        None => println!("No active session."),
    }
    Ok(())
}

pub fn handle_whoami(storage: &Storage) -> BuddyResult<()> {
    let user = AuthService::new(storage).current_user()?;
    println!("{} ({})", user.username, user.id);
    Ok(())
}

/// Use the given password or prompt for one without echo
fn obtain_password(given: Option<String>, confirm: bool) -> BuddyResult<Zeroizing<String>> {
    if let Some(password) = given {
        return Ok(Zeroizing::new(password));
    }

    let password = prompt("Password: ")?;
    if confirm {
        let again = prompt("Confirm password: ")?;
        if *password != *again {
            return Err(BuddyError::Validation("Passwords do not match".to_string()));
        }
    }
    Ok(password)
}

fn prompt(label: &str) -> BuddyResult<Zeroizing<String>> {
    rpassword::prompt_password(label)
        .map(Zeroizing::new)
        .map_err(|e| BuddyError::Io(format!("Failed to read password: {}", e)))
}
