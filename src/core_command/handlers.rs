use crate::config::Config;
use crate::core_command::command::ConsoleCommand;
use crate::helpers::ConsoleInput;
use crate::session::Credentials;
use std::sync::Arc;

/// Routes one resolved command to its handler. Every handler builds its own
/// session, runs the operation to completion, and reports the outcome; no
/// error escapes past this point, so the console loop always continues.
pub async fn dispatch_command(
    command: ConsoleCommand,
    config: Arc<Config>,
    target: &str,
    local_path: Option<&str>,
    credentials: &Credentials,
    input: &mut ConsoleInput,
) {
    match command {
        ConsoleCommand::Download => {
            crate::core_command::download::handle_download_command(
                config,
                target,
                local_path,
                credentials,
                input,
            )
            .await
        }
        ConsoleCommand::Upload => {
            crate::core_command::upload::handle_upload_command(
                config,
                target,
                local_path,
                credentials,
            )
            .await
        }
        ConsoleCommand::Delete => {
            crate::core_command::delete::handle_delete_command(config, target, credentials).await
        }
        ConsoleCommand::Rename => {
            crate::core_command::rename::handle_rename_command(
                config,
                target,
                local_path,
                credentials,
            )
            .await
        }
        ConsoleCommand::GetSize => {
            crate::core_command::getsize::handle_getsize_command(config, target, credentials).await
        }
        ConsoleCommand::ListDirectory => {
            crate::core_command::listdir::handle_listdir_command(config, target, credentials).await
        }
        ConsoleCommand::MakeDirectory => {
            crate::core_command::mkdir::handle_mkdir_command(config, target, credentials).await
        }
        ConsoleCommand::RemoveDirectory => {
            crate::core_command::rmdir::handle_rmdir_command(config, target, credentials).await
        }
        // Loop-control tokens never reach the dispatcher; the console loop
        // consumes them first.
        ConsoleCommand::Help | ConsoleCommand::Exit => {}
    }
}
