use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::error;
use std::sync::Arc;

/// Handles the DELETE console command: one DELE exchange, status printed
/// whatever the server answered.
pub async fn handle_delete_command(
    config: Arc<Config>,
    target: &str,
    credentials: &Credentials,
) {
    println!("Deleting file...");
    let mut session = match TransferSession::new(config, target, None, credentials.clone()) {
        Ok(session) => session,
        Err(e) => {
            println!("{} delete error -> {}", target, e);
            return;
        }
    };

    match session.delete().await {
        Ok(()) => println!("{}", session.last_status),
        Err(e) => {
            error!("Delete of {} failed: {}", target, e);
            println!("{} delete error -> {}", target, e);
        }
    }
}
