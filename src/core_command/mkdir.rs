use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::error;
use std::sync::Arc;

/// Handles the MAKEDIRECTORY console command.
pub async fn handle_mkdir_command(
    config: Arc<Config>,
    target: &str,
    credentials: &Credentials,
) {
    println!("Making directory...");
    let mut session = match TransferSession::new(config, target, None, credentials.clone()) {
        Ok(session) => session,
        Err(e) => {
            println!("{} make directory error -> {}", target, e);
            return;
        }
    };

    match session.make_directory().await {
        Ok(()) => println!("{}", session.last_status),
        Err(e) => {
            error!("Mkdir of {} failed: {}", target, e);
            println!("{} make directory error -> {}", target, e);
        }
    }
}
