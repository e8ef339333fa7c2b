use crate::config::Config;
use crate::session::{Credentials, TransferSession};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handles the UPLOAD console command.
///
/// Checks that the local source file exists before anything else; a missing
/// source aborts the operation without any session being built, so no
/// network round trip is wasted. Otherwise the whole file is handed to the
/// session for the STOR exchange.
///
/// # Arguments
///
/// * `config` - Shared client configuration.
/// * `target` - The remote resource locator to store the file at.
/// * `local_path` - The local source file.
/// * `credentials` - The username/password pair for this operation.
pub async fn handle_upload_command(
    config: Arc<Config>,
    target: &str,
    local_path: Option<&str>,
    credentials: &Credentials,
) {
    println!("File upload beginning...");
    let Some(local_path) = local_path else {
        println!("{} upload error -> a source path is required.", target);
        return;
    };
    if !Path::new(local_path).exists() {
        warn!("Upload source does not exist: {}", local_path);
        println!("{} upload error -> {} not found.", target, local_path);
        return;
    }

    let mut session = match TransferSession::new(
        config,
        target,
        Some(PathBuf::from(local_path)),
        credentials.clone(),
    ) {
        Ok(session) => session,
        Err(e) => {
            println!("{} upload error -> {}", target, e);
            return;
        }
    };

    match session.upload().await {
        Ok(()) => {
            info!("Uploaded {} to {}", local_path, target);
            println!("{}", session.last_status);
        }
        Err(e) => {
            error!("Upload to {} failed: {}", target, e);
            println!("{} upload error -> {}", target, e);
        }
    }
}
