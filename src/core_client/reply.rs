use crate::core_client::error::ClientError;

/// A parsed reply from the server control channel: the 3-digit code and
/// every line of the (possibly multi-line) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpReply {
    pub code: u16,
    pub lines: Vec<String>,
}

impl FtpReply {
    /// Full reply text, lines joined.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// 1xx-3xx: the server did not refuse the command.
    pub fn is_success(&self) -> bool {
        self.code < 400
    }

    /// 1xx positive preliminary: a data transfer is about to follow.
    pub fn is_preliminary(&self) -> bool {
        (100..200).contains(&self.code)
    }

    /// 3xx positive intermediate: the server expects a follow-up command
    /// (RNFR waits for RNTO this way).
    pub fn is_intermediate(&self) -> bool {
        (300..400).contains(&self.code)
    }
}

/// Parse the 3-digit reply code from the start of a control-channel line.
pub fn parse_reply_code(line: &str) -> Result<u16, ClientError> {
    let digits = line
        .get(..3)
        .ok_or_else(|| ClientError::transfer(format!("reply too short to carry a code: '{}'", line)))?;
    digits
        .parse::<u16>()
        .map_err(|_| ClientError::transfer(format!("invalid reply code in: '{}'", line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_code() {
        assert_eq!(parse_reply_code("220 Service ready").unwrap(), 220);
        assert_eq!(parse_reply_code("550 File not found.").unwrap(), 550);
        assert_eq!(parse_reply_code("211-Features:").unwrap(), 211);
    }

    #[test]
    fn test_parse_reply_code_rejects_garbage() {
        assert!(parse_reply_code("ab").is_err());
        assert!(parse_reply_code("hello world").is_err());
        assert!(parse_reply_code("").is_err());
    }

    #[test]
    fn test_reply_classification() {
        let opening = FtpReply {
            code: 150,
            lines: vec!["150 Opening data connection.".to_string()],
        };
        assert!(opening.is_success());
        assert!(opening.is_preliminary());
        assert!(!opening.is_intermediate());

        let pending = FtpReply {
            code: 350,
            lines: vec!["350 Ready for destination name.".to_string()],
        };
        assert!(pending.is_success());
        assert!(pending.is_intermediate());

        let refused = FtpReply {
            code: 550,
            lines: vec!["550 File not found.".to_string()],
        };
        assert!(!refused.is_success());
        assert!(!refused.is_preliminary());
        assert!(!refused.is_intermediate());
    }

    #[test]
    fn test_reply_text_joins_lines() {
        let reply = FtpReply {
            code: 211,
            lines: vec!["211-Features:".to_string(), "211 End".to_string()],
        };
        assert_eq!(reply.text(), "211-Features:\n211 End");
    }
}
