use crate::config::Config;
use crate::constants::DEFAULT_FTP_PORT;
use crate::core_client::control::ControlConnection;
use crate::core_client::error::ClientError;
use crate::session::Credentials;
use log::{debug, info};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use url::Url;

/// Establishes the control connection for one session: TCP connect, welcome
/// banner, USER/PASS login, then TYPE I so transfers run in binary mode.
///
/// # Arguments
///
/// * `config` - The client configuration (connect timeout).
/// * `target` - The target locator; host and port are taken from here.
/// * `credentials` - The username/password pair presented to the server.
///
/// # Returns
///
/// A logged-in `ControlConnection`, or a `Transfer` error if the server
/// could not be reached, refused the connection, or rejected the login.
pub async fn open_control_connection(
    config: &Config,
    target: &Url,
    credentials: &Credentials,
) -> Result<ControlConnection, ClientError> {
    let host = target
        .host_str()
        .ok_or_else(|| ClientError::configuration("target locator has no host"))?;
    let port = target.port().unwrap_or(DEFAULT_FTP_PORT);
    let address = format!("{}:{}", host, port);
    debug!("Opening control connection to {}", address);

    let connect_timeout = Duration::from_secs(config.client.connect_timeout_secs);
    let stream = timeout(connect_timeout, TcpStream::connect(&address))
        .await
        .map_err(|_| ClientError::transfer(format!("connection to {} timed out", address)))?
        .map_err(|e| ClientError::transfer(format!("connection to {} failed: {}", address, e)))?;
    stream.set_nodelay(true).ok();

    let mut control = ControlConnection::new(stream);

    let banner = control.read_reply().await?;
    if !banner.is_success() {
        return Err(ClientError::transfer(format!(
            "server refused the connection: {}",
            banner.text()
        )));
    }

    let user_reply = control
        .execute(&format!("USER {}", credentials.username))
        .await?;
    if user_reply.is_intermediate() {
        let pass_reply = control
            .execute(&format!("PASS {}", credentials.password))
            .await?;
        if !pass_reply.is_success() {
            return Err(ClientError::transfer(format!(
                "login failed: {}",
                pass_reply.text()
            )));
        }
    } else if !user_reply.is_success() {
        return Err(ClientError::transfer(format!(
            "login failed: {}",
            user_reply.text()
        )));
    }

    let type_reply = control.execute("TYPE I").await?;
    if !type_reply.is_success() {
        return Err(ClientError::transfer(format!(
            "could not switch to binary mode: {}",
            type_reply.text()
        )));
    }

    info!("Logged in to {} as {}", address, credentials.username);
    Ok(control)
}
