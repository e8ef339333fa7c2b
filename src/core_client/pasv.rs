use crate::core_client::control::ControlConnection;
use crate::core_client::error::ClientError;
use log::debug;
use regex::Regex;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Issue PASV, parse the advertised address, and connect the data channel.
///
/// The returned stream is owned by the caller; dropping it closes the data
/// connection, which is how the server learns an upload is complete.
pub async fn open_data_connection(
    control: &mut ControlConnection,
    connect_timeout: Duration,
) -> Result<TcpStream, ClientError> {
    let reply = control.execute("PASV").await?;
    if !reply.is_success() {
        return Err(ClientError::transfer(format!(
            "passive mode refused: {}",
            reply.text()
        )));
    }

    let address = parse_passive_reply(&reply.text())?;
    debug!("Connecting data channel to {}", address);
    let stream = timeout(connect_timeout, TcpStream::connect(address))
        .await
        .map_err(|_| ClientError::transfer(format!("data connection to {} timed out", address)))?
        .map_err(|e| ClientError::transfer(format!("data connection to {} failed: {}", address, e)))?;
    Ok(stream)
}

/// Parse `227 Entering Passive Mode (h1,h2,h3,h4,p1,p2)` into a socket
/// address. The port is `p1 * 256 + p2`.
pub fn parse_passive_reply(text: &str) -> Result<SocketAddr, ClientError> {
    let re = Regex::new(r"\((\d+),(\d+),(\d+),(\d+),(\d+),(\d+)\)").unwrap();
    let caps = re
        .captures(text)
        .ok_or_else(|| ClientError::transfer(format!("cannot parse passive reply: {}", text)))?;

    let octets: Vec<u8> = (1..=6)
        .map(|i| {
            caps[i]
                .parse::<u8>()
                .map_err(|_| ClientError::transfer("passive reply number out of range"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ip = IpAddr::from([octets[0], octets[1], octets[2], octets[3]]);
    let port = (octets[4] as u16) * 256 + (octets[5] as u16);
    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_passive_reply() {
        let addr =
            parse_passive_reply("227 Entering Passive Mode (192,168,1,10,19,137).").unwrap();
        assert_eq!(addr.ip().to_string(), "192.168.1.10");
        assert_eq!(addr.port(), 19 * 256 + 137);
    }

    #[test]
    fn test_parse_passive_reply_loopback() {
        let addr = parse_passive_reply("227 Entering Passive Mode (127,0,0,1,0,21)").unwrap();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 21);
    }

    #[test]
    fn test_parse_passive_reply_rejects_malformed() {
        assert!(parse_passive_reply("227 Entering Passive Mode").is_err());
        assert!(parse_passive_reply("227 Entering Passive Mode (1,2,3)").is_err());
        assert!(parse_passive_reply("227 Entering Passive Mode (999,0,0,1,0,21)").is_err());
    }
}
