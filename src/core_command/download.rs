use crate::config::Config;
use crate::helpers::{confirm_overwrite, ConsoleInput};
use crate::session::{Credentials, TransferSession};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handles the DOWNLOAD console command.
///
/// Issues the download request against the target, asks for confirmation
/// before an existing destination file is overwritten, then streams the
/// response into the destination. Declining the overwrite abandons the
/// transfer without touching the file.
///
/// # Arguments
///
/// * `config` - Shared client configuration.
/// * `target` - The remote resource locator.
/// * `local_path` - The destination path for the downloaded file.
/// * `credentials` - The username/password pair for this operation.
/// * `input` - The console input handle, used for the overwrite prompt.
pub async fn handle_download_command(
    config: Arc<Config>,
    target: &str,
    local_path: Option<&str>,
    credentials: &Credentials,
    input: &mut ConsoleInput,
) {
    println!("File download beginning...");
    let Some(local_path) = local_path else {
        println!("{} download error -> a destination path is required.", target);
        return;
    };

    let mut session = match TransferSession::new(
        Arc::clone(&config),
        target,
        Some(PathBuf::from(local_path)),
        credentials.clone(),
    ) {
        Ok(session) => session,
        Err(e) => {
            error!("Could not build download session for {}: {}", target, e);
            println!("{} download error -> {}", target, e);
            return;
        }
    };

    match session.request_download().await {
        Ok(true) => {
            println!("{}", session.last_status);
            if Path::new(local_path).exists() {
                match confirm_overwrite(input).await {
                    Ok(true) => {}
                    Ok(false) => {
                        println!("File download aborted.");
                        return;
                    }
                    Err(e) => {
                        println!("{} download error -> {}", target, e);
                        return;
                    }
                }
            }
            match session.complete_download().await {
                Ok(()) => {
                    info!("Downloaded {} to {}", target, local_path);
                    println!("{}", session.last_status);
                }
                Err(e) => {
                    error!("Download of {} failed: {}", target, e);
                    println!("{} download error -> {}", target, e);
                }
            }
        }
        Ok(false) => println!("{}", session.last_status),
        Err(e) => {
            error!("Download of {} failed: {}", target, e);
            println!("{} download error -> {}", target, e);
        }
    }
}
