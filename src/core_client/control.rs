use crate::core_client::error::ClientError;
use crate::core_client::reply::{parse_reply_code, FtpReply};
use log::trace;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

/// The control channel of one session: sends commands terminated with CRLF
/// and reads single- or multi-line replies back.
///
/// Dropping the connection closes the underlying socket.
#[derive(Debug)]
pub struct ControlConnection {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl ControlConnection {
    pub fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    /// Send a single command line; the CRLF terminator is appended here.
    pub async fn send_command(&mut self, command: &str) -> Result<(), ClientError> {
        let line = format!("{}\r\n", command);
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| ClientError::transfer(format!("failed to send command: {}", e)))?;
        if command.starts_with("PASS ") {
            trace!(">>> PASS ****");
        } else {
            trace!(">>> {}", command);
        }
        Ok(())
    }

    async fn read_line_raw(&mut self) -> Result<String, ClientError> {
        let mut buffer = String::new();
        let n = self
            .reader
            .read_line(&mut buffer)
            .await
            .map_err(|e| ClientError::transfer(format!("failed to read reply: {}", e)))?;
        if n == 0 {
            return Err(ClientError::transfer("server closed the control connection"));
        }
        Ok(buffer)
    }

    /// Read a complete reply, following the multi-line convention: a first
    /// line of the form `NNN-` is continued until a line starting `NNN `
    /// arrives.
    pub async fn read_reply(&mut self) -> Result<FtpReply, ClientError> {
        let first = self.read_line_raw().await?;
        let first_trimmed = first.trim_end_matches(|c| c == '\r' || c == '\n');
        let code = parse_reply_code(first_trimmed)?;
        let mut lines = vec![first_trimmed.to_string()];

        let is_multi_line = first_trimmed.len() >= 4 && first_trimmed.as_bytes()[3] == b'-';
        if is_multi_line {
            let terminator = format!("{} ", code);
            loop {
                let next = self.read_line_raw().await?;
                let next_trimmed = next.trim_end_matches(|c| c == '\r' || c == '\n');
                lines.push(next_trimmed.to_string());
                if next_trimmed.starts_with(&terminator) {
                    break;
                }
            }
        }

        let reply = FtpReply { code, lines };
        trace!("<<< {}", reply.text());
        Ok(reply)
    }

    /// Send a command and wait for its reply.
    pub async fn execute(&mut self, command: &str) -> Result<FtpReply, ClientError> {
        self.send_command(command).await?;
        self.read_reply().await
    }
}
