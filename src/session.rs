use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use url::Url;

use crate::config::Config;
use crate::constants::DEFAULT_DOWNLOAD_BUFFER_SIZE;
use crate::core_client::connection::open_control_connection;
use crate::core_client::control::ControlConnection;
use crate::core_client::error::ClientError;
use crate::core_client::pasv::open_data_connection;
use log::{debug, info, warn};

/// Username/password pair presented to the server. Passed by value into
/// each session; never held in any shared location.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One logical operation's worth of server interaction.
///
/// A session is created for a single operation (download, upload, delete,
/// rename, size, list, mkdir, rmdir), used for exactly that operation, and
/// then dropped. The control connection opens lazily on the first operation
/// call; dropping the session closes the control connection and any data
/// stream still held, on every exit path.
///
/// After any operation, `last_status` and `last_status_code` reflect that
/// operation's outcome, whether or not the server reply signalled success.
/// The session records reply codes but never interprets them; judging
/// success from the recorded code is the caller's business.
#[derive(Debug)]
pub struct TransferSession {
    config: Arc<Config>,
    target: Url,
    local_path: Option<PathBuf>,
    credentials: Credentials,
    pub last_status: String,
    pub last_status_code: Option<u16>,
    pub directory_listing: Option<String>,
    control: Option<ControlConnection>,
    data_stream: Option<TcpStream>,
}

impl TransferSession {
    /// Validates the target locator and builds the session. No network
    /// activity happens here.
    ///
    /// # Arguments
    ///
    /// * `config` - Shared client configuration.
    /// * `target` - The remote resource locator, an `ftp://` URI.
    /// * `local_path` - Destination (download), source (upload), or new
    ///   name (rename); absent for operations that do not need it.
    /// * `credentials` - The username/password pair for this session.
    ///
    /// # Returns
    ///
    /// The session, or a `Configuration` error if the locator is malformed.
    pub fn new(
        config: Arc<Config>,
        target: &str,
        local_path: Option<PathBuf>,
        credentials: Credentials,
    ) -> Result<Self, ClientError> {
        let target = Url::parse(target).map_err(|e| {
            ClientError::configuration(format!("malformed target locator {}: {}", target, e))
        })?;
        if target.scheme() != "ftp" {
            return Err(ClientError::configuration(format!(
                "unsupported scheme '{}', expected an ftp:// locator",
                target.scheme()
            )));
        }
        if target.host_str().is_none() {
            return Err(ClientError::configuration(
                "target locator has no host".to_string(),
            ));
        }
        Ok(Self {
            config,
            target,
            local_path,
            credentials,
            last_status: String::new(),
            last_status_code: None,
            directory_listing: None,
            control: None,
            data_stream: None,
        })
    }

    /// The path component of the target locator, as handed to the verb.
    fn remote_path(&self) -> String {
        let path = self.target.path();
        if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        }
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.config.client.connect_timeout_secs)
    }

    async fn ensure_connected(&mut self) -> Result<(), ClientError> {
        if self.control.is_none() {
            let control =
                open_control_connection(&self.config, &self.target, &self.credentials).await?;
            self.control = Some(control);
        }
        Ok(())
    }

    fn control_mut(&mut self) -> Result<&mut ControlConnection, ClientError> {
        self.control
            .as_mut()
            .ok_or_else(|| ClientError::transfer("control connection is not open"))
    }

    fn record_status(&mut self, status: String, code: u16) {
        debug!("Status update: {}", status);
        self.last_status = status;
        self.last_status_code = Some(code);
    }

    /// Issue a verb that needs no data channel and record its reply.
    async fn simple_verb(&mut self, command: String, label: &str) -> Result<(), ClientError> {
        self.ensure_connected().await?;
        let reply = self.control_mut()?.execute(&command).await?;
        let (text, code) = (reply.text(), reply.code);
        self.record_status(format!("{} {} update -> {}", self.target, label, text), code);
        Ok(())
    }

    /// Opens the download request: establishes the data channel, issues
    /// RETR, and records the server's reply.
    ///
    /// Returns whether a non-empty response stream is now live. `false`
    /// covers both a refused request and an empty resource; neither is an
    /// error, and the recorded status says which it was.
    pub async fn request_download(&mut self) -> Result<bool, ClientError> {
        self.ensure_connected().await?;
        let remote = self.remote_path();
        let connect_timeout = self.connect_timeout();
        let control = self.control_mut()?;
        let mut data = open_data_connection(control, connect_timeout).await?;
        let reply = control.execute(&format!("RETR {}", remote)).await?;
        let (text, code, opened) = (reply.text(), reply.code, reply.is_success());
        self.record_status(format!("{} download update -> {}", self.target, text), code);
        if !opened {
            return Ok(false);
        }

        // Probe without consuming: an immediate EOF means the resource is
        // empty and there is nothing to complete.
        let mut probe = [0u8; 1];
        let n = data
            .peek(&mut probe)
            .await
            .map_err(|e| ClientError::transfer(format!("data connection lost: {}", e)))?;
        if n == 0 {
            self.last_status =
                format!("{} download error -> requested file is empty.", self.target);
            return Ok(false);
        }

        self.data_stream = Some(data);
        Ok(true)
    }

    /// Streams the response into a newly created local file, overwriting
    /// any existing file at `local_path`, then records the transfer-complete
    /// reply. Must only be called after `request_download` returned true.
    pub async fn complete_download(&mut self) -> Result<(), ClientError> {
        let path = self.local_path.clone().ok_or_else(|| {
            ClientError::configuration("download requires a local destination path")
        })?;
        let mut data = self
            .data_stream
            .take()
            .ok_or_else(|| ClientError::transfer("no response stream is open"))?;

        let mut file = File::create(&path).await.map_err(ClientError::local_io)?;
        let buffer_size = self
            .config
            .client
            .download_buffer_size
            .unwrap_or(DEFAULT_DOWNLOAD_BUFFER_SIZE);
        let mut buffer = vec![0u8; buffer_size];
        loop {
            let n = data
                .read(&mut buffer)
                .await
                .map_err(|e| ClientError::transfer(format!("data connection lost: {}", e)))?;
            if n == 0 {
                break;
            }
            file.write_all(&buffer[..n])
                .await
                .map_err(ClientError::local_io)?;
        }
        file.flush().await.map_err(ClientError::local_io)?;
        // The server sends the completion reply once the data connection
        // is closed on our side.
        drop(data);

        let reply = self.control_mut()?.read_reply().await?;
        let (text, code) = (reply.text(), reply.code);
        self.record_status(format!("{} download update -> {}", self.target, text), code);
        info!("Download finished: {:?}", path);
        Ok(())
    }

    /// Uploads the local file at `local_path` to the target. The file is
    /// read into memory in full before the request goes out; the bytes are
    /// then written to the data channel in one piece.
    pub async fn upload(&mut self) -> Result<(), ClientError> {
        let path = self
            .local_path
            .clone()
            .ok_or_else(|| ClientError::configuration("upload requires a local source path"))?;
        let contents = tokio::fs::read(&path).await.map_err(ClientError::local_io)?;
        debug!("Staged {} bytes from {:?}", contents.len(), path);

        self.ensure_connected().await?;
        let remote = self.remote_path();
        let connect_timeout = self.connect_timeout();
        let control = self.control_mut()?;
        let mut data = open_data_connection(control, connect_timeout).await?;
        let reply = control.execute(&format!("STOR {}", remote)).await?;
        let (text, code, accepted) = (reply.text(), reply.code, reply.is_success());
        self.record_status(format!("{} upload update -> {}", self.target, text), code);
        if !accepted {
            return Ok(());
        }

        data.write_all(&contents)
            .await
            .map_err(|e| ClientError::transfer(format!("data connection lost: {}", e)))?;
        data.shutdown()
            .await
            .map_err(|e| ClientError::transfer(format!("data connection lost: {}", e)))?;
        drop(data);

        let done = self.control_mut()?.read_reply().await?;
        let (text, code) = (done.text(), done.code);
        self.record_status(format!("{} upload update -> {}", self.target, text), code);
        Ok(())
    }

    /// Issues DELE against the target file.
    pub async fn delete(&mut self) -> Result<(), ClientError> {
        let command = format!("DELE {}", self.remote_path());
        self.simple_verb(command, "delete file").await
    }

    /// Renames the target; `local_path` holds the new name. RNTO is only
    /// issued once the server acknowledged RNFR with an intermediate reply.
    pub async fn rename(&mut self) -> Result<(), ClientError> {
        let new_name = self
            .local_path
            .clone()
            .ok_or_else(|| ClientError::configuration("rename requires the new name"))?
            .to_string_lossy()
            .into_owned();

        self.ensure_connected().await?;
        let from = self.remote_path();
        let rnfr = self.control_mut()?.execute(&format!("RNFR {}", from)).await?;
        if !rnfr.is_intermediate() {
            warn!("Rename source was not accepted: {}", rnfr.text());
            let (text, code) = (rnfr.text(), rnfr.code);
            self.record_status(format!("{} rename update -> {}", self.target, text), code);
            return Ok(());
        }

        let rnto = self
            .control_mut()?
            .execute(&format!("RNTO {}", new_name))
            .await?;
        let (text, code) = (rnto.text(), rnto.code);
        self.record_status(format!("{} rename update -> {}", self.target, text), code);
        Ok(())
    }

    /// Issues SIZE against the target file. Only the reply classification
    /// is recorded; the numeric size is not parsed out.
    pub async fn get_size(&mut self) -> Result<(), ClientError> {
        let command = format!("SIZE {}", self.remote_path());
        self.simple_verb(command, "get size").await
    }

    /// Retrieves the directory listing into `directory_listing`.
    ///
    /// Returns whether a listing was retrieved; `false` when the server
    /// refused the request or the listing came back empty.
    pub async fn list_directory(&mut self) -> Result<bool, ClientError> {
        self.ensure_connected().await?;
        let remote = self.remote_path();
        let connect_timeout = self.connect_timeout();
        let control = self.control_mut()?;
        let mut data = open_data_connection(control, connect_timeout).await?;
        let reply = control.execute(&format!("LIST {}", remote)).await?;
        let (text, code, opened) = (reply.text(), reply.code, reply.is_success());
        self.record_status(
            format!("{} list directory update -> {}", self.target, text),
            code,
        );
        if !opened {
            return Ok(false);
        }

        let mut raw = Vec::new();
        data.read_to_end(&mut raw)
            .await
            .map_err(|e| ClientError::transfer(format!("data connection lost: {}", e)))?;
        drop(data);

        let done = self.control_mut()?.read_reply().await?;
        let (text, code) = (done.text(), done.code);
        self.record_status(
            format!("{} list directory update -> {}", self.target, text),
            code,
        );

        let listing = String::from_utf8_lossy(&raw).into_owned();
        if listing.is_empty() {
            return Ok(false);
        }
        self.directory_listing = Some(listing);
        Ok(true)
    }

    /// Issues MKD for the target path.
    pub async fn make_directory(&mut self) -> Result<(), ClientError> {
        let command = format!("MKD {}", self.remote_path());
        self.simple_verb(command, "make directory").await
    }

    /// Issues RMD for the target path. The server will refuse a directory
    /// that is not empty.
    pub async fn remove_directory(&mut self) -> Result<(), ClientError> {
        let command = format!("RMD {}", self.remote_path());
        self.simple_verb(command, "remove directory").await
    }
}
