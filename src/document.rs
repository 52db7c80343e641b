/// Header marker identifying the line carrying the message id (case-sensitive).
const MESSAGE_ID_MARKER: &str = "Message-ID";

/// Mail-relay artifact appended to message ids by the gateway; everything
/// from this marker onward is discarded when extracting the id.
const RELAY_SUFFIX: &str = ".JavaMail";

/// Parsed form of one raw email file. Transient: consumed during indexing
/// and not retained afterwards.
#[derive(Debug, Clone)]
pub struct Email {
    pub message_id: String,
    pub body: String,
}

impl Email {
    /// Parse a raw RFC822-like text blob.
    ///
    /// Returns `None` when no usable message id can be extracted; such
    /// documents are skipped by the builder and contribute nothing to the
    /// index.
    pub fn parse(raw: &str) -> Option<Self> {
        let message_id = extract_message_id(raw)?;
        Some(Self {
            message_id,
            body: extract_body(raw).to_string(),
        })
    }
}

/// Extract the message id from the first `Message-ID` header line.
///
/// The id is the substring between the first `<` and the relay suffix,
/// trimmed. A document without the header, without `<` on the header line,
/// or with an empty id after trimming has no extractable id.
fn extract_message_id(raw: &str) -> Option<String> {
    let line = raw
        .lines()
        .find(|line| line.starts_with(MESSAGE_ID_MARKER))?;
    let (_, after_bracket) = line.split_once('<')?;
    let id = match after_bracket.find(RELAY_SUFFIX) {
        Some(pos) => &after_bracket[..pos],
        None => after_bracket,
    };
    let id = id.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Everything after the first blank-line boundary separating the header
/// block from the body. When no boundary exists the whole text counts as
/// the body, headers included; this matches the original corpus behavior
/// and is kept as a documented edge case rather than fixed.
fn extract_body(raw: &str) -> &str {
    match raw.split_once("\n\n") {
        Some((_, body)) => body,
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Message-ID: <12345.9876.JavaMail.evans@thyme>\n\
                          From: alice@example.com\n\
                          To: bob@example.com\n\
                          \n\
                          Hello World";

    #[test]
    fn test_parse_extracts_id_and_body() {
        let email = Email::parse(SAMPLE).unwrap();
        assert_eq!(email.message_id, "12345.9876");
        assert_eq!(email.body, "Hello World");
    }

    #[test]
    fn test_missing_message_id_header() {
        let raw = "From: alice@example.com\n\nbody text";
        assert!(Email::parse(raw).is_none());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let raw = "message-id: <1.2.JavaMail.x@y>\n\nbody";
        assert!(Email::parse(raw).is_none());
    }

    #[test]
    fn test_header_line_without_angle_bracket() {
        let raw = "Message-ID: 12345\n\nbody";
        assert!(Email::parse(raw).is_none());
    }

    #[test]
    fn test_id_without_relay_suffix_is_kept_whole() {
        // The closing `>` is only ever removed as a side effect of cutting
        // at the relay suffix; without one it stays in the id.
        let raw = "Message-ID: <ab-cd-ef>\n\nbody";
        let email = Email::parse(raw).unwrap();
        assert_eq!(email.message_id, "ab-cd-ef>");
    }

    #[test]
    fn test_empty_id_is_absent() {
        let raw = "Message-ID: <.JavaMail.evans@thyme>\n\nbody";
        assert!(Email::parse(raw).is_none());
    }

    #[test]
    fn test_no_blank_line_means_whole_text_is_body() {
        let raw = "Message-ID: <7.8.JavaMail.x@y>\nSubject: greetings";
        let email = Email::parse(raw).unwrap();
        assert_eq!(email.body, raw);
    }

    #[test]
    fn test_body_keeps_everything_after_first_boundary() {
        let raw = "Message-ID: <1.2.JavaMail.x@y>\n\nfirst\n\nsecond";
        let email = Email::parse(raw).unwrap();
        assert_eq!(email.body, "first\n\nsecond");
    }
}
