use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::error;
use std::sync::Arc;

/// Handles the GETSIZE console command. The status line carries the
/// server's SIZE reply; whether the size was retrievable is visible in the
/// recorded classification.
pub async fn handle_getsize_command(
    config: Arc<Config>,
    target: &str,
    credentials: &Credentials,
) {
    println!("Getting file size...");
    let mut session = match TransferSession::new(config, target, None, credentials.clone()) {
        Ok(session) => session,
        Err(e) => {
            println!("{} get size error -> {}", target, e);
            return;
        }
    };

    match session.get_size().await {
        Ok(()) => println!("{}", session.last_status),
        Err(e) => {
            error!("Size query for {} failed: {}", target, e);
            println!("{} get size error -> {}", target, e);
        }
    }
}
