use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::error;
use std::sync::Arc;

/// Handles the REMOVEDIRECTORY console command. The server only removes a
/// directory that is empty; anything else shows up in the status line.
pub async fn handle_rmdir_command(
    config: Arc<Config>,
    target: &str,
    credentials: &Credentials,
) {
    println!("Removing directory...");
    let mut session = match TransferSession::new(config, target, None, credentials.clone()) {
        Ok(session) => session,
        Err(e) => {
            println!("{} remove directory error -> {}", target, e);
            return;
        }
    };

    match session.remove_directory().await {
        Ok(()) => println!("{}", session.last_status),
        Err(e) => {
            error!("Rmdir of {} failed: {}", target, e);
            println!("{} remove directory error -> {}", target, e);
        }
    }
}
