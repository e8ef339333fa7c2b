use crate::config::Config;
use crate::core_command::command::ConsoleCommand;
use crate::core_command::handlers::dispatch_command;
use crate::helpers::ConsoleInput;
use crate::session::Credentials;
use anyhow::Result;
use log::{debug, info};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const MENU: &str = "[download], [upload], [delete], [rename], [getsize], [listdirectory], \
[makedirectory], [removedirectory] of URI resource, or [help] for more information.";

/// Runs the interactive command loop: prompt for credentials once, then
/// read one command per line until EXIT or end of input. Every operation
/// runs to completion before the next line is read.
pub async fn run(config: Arc<Config>) -> Result<()> {
    println!("rouilleftp started.");
    let mut input: ConsoleInput = BufReader::new(tokio::io::stdin()).lines();
    let credentials = prompt_credentials(&mut input).await?;
    info!("Console ready for user {}", credentials.username);

    loop {
        println!("{}", MENU);
        let Some(line) = input.next_line().await? else {
            break;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(token) = parts.first() else {
            continue;
        };
        let Some(command) = ConsoleCommand::from_token(token) else {
            println!("Command not recognised.");
            continue;
        };

        if command.is_loop_control() {
            if command == ConsoleCommand::Exit {
                break;
            }
            print_help();
            continue;
        }

        let Some(target) = parts.get(1) else {
            println!("Invalid command parameters.");
            continue;
        };
        let local_path = parts.get(2).copied();
        debug!("Dispatching {:?} for {}", command, target);
        dispatch_command(
            command,
            Arc::clone(&config),
            target,
            local_path,
            &credentials,
            &mut input,
        )
        .await;
    }

    println!("rouilleftp finished.");
    Ok(())
}

async fn prompt_credentials(input: &mut ConsoleInput) -> Result<Credentials> {
    print!("Enter username: ");
    std::io::stdout().flush()?;
    let username = input.next_line().await?.unwrap_or_default();
    print!("Enter password: ");
    std::io::stdout().flush()?;
    let password = input.next_line().await?.unwrap_or_default();
    Ok(Credentials::new(username, password))
}

fn print_help() {
    println!("    [download {{ftp_uri}} {{save_path}}]");
    println!("    [upload {{ftp_uri}} {{load_path}}]");
    println!("    [delete {{ftp_uri}}]");
    println!("    [rename {{ftp_uri}} {{new_name}}]");
    println!("    [getsize {{ftp_uri}}]");
    println!("    [listdirectory {{ftp_uri}}]");
    println!("    [makedirectory {{ftp_uri}}]");
    println!("    [removedirectory {{ftp_uri}}]");
}
