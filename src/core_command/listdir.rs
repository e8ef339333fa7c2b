use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::error;
use std::sync::Arc;

/// Handles the LISTDIRECTORY console command.
///
/// Prints the retrieved listing text itself when one came back; otherwise
/// the status line explains what the server answered.
pub async fn handle_listdir_command(
    config: Arc<Config>,
    target: &str,
    credentials: &Credentials,
) {
    println!("Listing directory...");
    let mut session = match TransferSession::new(config, target, None, credentials.clone()) {
        Ok(session) => session,
        Err(e) => {
            println!("{} list directory error -> {}", target, e);
            return;
        }
    };

    match session.list_directory().await {
        Ok(true) => {
            if let Some(listing) = &session.directory_listing {
                println!("{}", listing);
            }
        }
        Ok(false) => println!("{}", session.last_status),
        Err(e) => {
            error!("Listing of {} failed: {}", target, e);
            println!("{} list directory error -> {}", target, e);
        }
    }
}
