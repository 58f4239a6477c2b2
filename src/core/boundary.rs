//! Purpose: Classify raw engine reply buffers into success or failure.
//! Exports: `ERROR_SENTINEL`, `BoundaryReply`.
//! Role: Single decision point for the boundary's sentinel-prefix convention.
//! Invariants: Classification happens exactly once per call; downstream code
//! never re-inspects raw bytes.
//! Invariants: The sentinel rule is preserved bit-exactly for compatibility.

/// Leading bytes that mark an engine reply as a failure payload.
///
/// This is a convention of the boundary protocol, not a schema field. A
/// legitimate response whose encoding happens to start with these bytes is
/// misclassified; the boundary offers no framing to tell the two apart, so
/// the ambiguity is inherited here rather than papered over.
pub const ERROR_SENTINEL: &[u8] = b"ERROR";

/// Reply buffer after sentinel classification.
///
/// `Failure` carries the entire reply, sentinel included; the remainder is a
/// diagnostic string, not a structured message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoundaryReply {
    Success(Vec<u8>),
    Failure(Vec<u8>),
}

impl BoundaryReply {
    pub fn classify(reply: Vec<u8>) -> Self {
        if reply.starts_with(ERROR_SENTINEL) {
            BoundaryReply::Failure(reply)
        } else {
            BoundaryReply::Success(reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundaryReply, ERROR_SENTINEL};

    #[test]
    fn error_prefix_classifies_as_failure() {
        let reply = b"ERROR: file not found".to_vec();
        assert_eq!(
            BoundaryReply::classify(reply.clone()),
            BoundaryReply::Failure(reply)
        );
    }

    #[test]
    fn bare_sentinel_is_failure() {
        let reply = ERROR_SENTINEL.to_vec();
        assert_eq!(
            BoundaryReply::classify(reply.clone()),
            BoundaryReply::Failure(reply)
        );
    }

    #[test]
    fn partial_sentinel_is_success() {
        let reply = b"ERRO".to_vec();
        assert_eq!(
            BoundaryReply::classify(reply.clone()),
            BoundaryReply::Success(reply)
        );
    }

    #[test]
    fn empty_reply_is_success() {
        assert_eq!(
            BoundaryReply::classify(Vec::new()),
            BoundaryReply::Success(Vec::new())
        );
    }

    #[test]
    fn non_sentinel_bytes_are_success() {
        let reply = vec![0x0a, 0x04, b'p', b'o', b'n', b'g'];
        assert_eq!(
            BoundaryReply::classify(reply.clone()),
            BoundaryReply::Success(reply)
        );
    }
}
