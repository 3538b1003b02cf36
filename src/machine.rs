//! Machine identifier resolution.
//!
//! Every persisted record is keyed by the machine that produced it. The
//! identifier is the hostname, resolved once at startup, with a sentinel
//! fallback when the hostname cannot be read.

/// Identifier used when the hostname cannot be resolved.
pub const UNKNOWN_MACHINE: &str = "unknown-machine";

/// Returns this machine's identifier.
pub fn machine_id() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_MACHINE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_id_is_never_empty() {
        assert!(!machine_id().is_empty());
    }
}
