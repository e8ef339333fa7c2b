use crate::config::Config;
use crate::constants::DEFAULT_DOWNLOAD_BUFFER_SIZE;
use log::info;
use std::io::Result as IoResult;
use tokio::io::{BufReader, Lines, Stdin};

/// The console's single line-oriented input handle. One reader owns stdin
/// for the whole run so buffered lines are never lost between the command
/// loop and a confirmation prompt.
pub type ConsoleInput = Lines<BufReader<Stdin>>;

/// Only an exact `y`/`Y` answer counts as a confirmation.
pub fn parse_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Asks whether an existing local file may be overwritten.
pub async fn confirm_overwrite(input: &mut ConsoleInput) -> IoResult<bool> {
    println!("A file with the same name already exists. Overwrite file? [y/n]");
    let answer = input.next_line().await?.unwrap_or_default();
    Ok(parse_confirmation(&answer))
}

// Helper function to log configuration options
pub fn log_config(config: &Config) {
    info!("  Connect Timeout: {}s", config.client.connect_timeout_secs);
    info!(
        "  Download Buffer Size: {} KB",
        config
            .client
            .download_buffer_size
            .unwrap_or(DEFAULT_DOWNLOAD_BUFFER_SIZE)
            / 1024
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation_accepts_y() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation("Y"));
        assert!(parse_confirmation("  y  "));
    }

    #[test]
    fn test_parse_confirmation_rejects_everything_else() {
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation("yes"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("oui"));
    }
}
