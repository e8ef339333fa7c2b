use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::error;
use std::path::PathBuf;
use std::sync::Arc;

/// Handles the RENAME console command. The second argument is the new name
/// for the file or directory the target locator points at.
pub async fn handle_rename_command(
    config: Arc<Config>,
    target: &str,
    new_name: Option<&str>,
    credentials: &Credentials,
) {
    println!("Renaming...");
    let Some(new_name) = new_name else {
        println!("{} rename error -> a new name is required.", target);
        return;
    };

    let mut session = match TransferSession::new(
        config,
        target,
        Some(PathBuf::from(new_name)),
        credentials.clone(),
    ) {
        Ok(session) => session,
        Err(e) => {
            println!("{} rename error -> {}", target, e);
            return;
        }
    };

    match session.rename().await {
        Ok(()) => println!("{}", session.last_status),
        Err(e) => {
            error!("Rename of {} failed: {}", target, e);
            println!("{} rename error -> {}", target, e);
        }
    }
}
