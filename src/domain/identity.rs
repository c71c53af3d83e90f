//! Participant identity derived from a network address.
//!
//! [`Identity::resolve`] is the single validation gate for inbound
//! addresses: IPv6 loopback and IPv4-mapped (`::ffff:a.b.c.d`) forms are
//! normalized to a dotted quad, everything else that is not a strict
//! four-octet IPv4 address is rejected.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// Canonical participant key.
///
/// Two requests resolving to the same `Identity` share one ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Ipv4Addr);

impl Identity {
    /// Resolves a raw address string into a canonical identity.
    ///
    /// Accepts `a.b.c.d`, `::1` (mapped to `127.0.0.1`), and
    /// `::ffff:a.b.c.d`. Surrounding whitespace and brackets are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidIdentity`] if the address does not
    /// resolve to an IPv4 dotted quad.
    pub fn resolve(raw: &str) -> Result<Self, DrawError> {
        let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');
        let addr: IpAddr = trimmed
            .parse()
            .map_err(|_| DrawError::InvalidIdentity(raw.to_string()))?;
        Self::from_ip(addr).ok_or_else(|| DrawError::InvalidIdentity(raw.to_string()))
    }

    /// Normalizes an already-parsed address. Returns `None` for IPv6
    /// addresses that carry no IPv4 equivalent.
    #[must_use]
    pub fn from_ip(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V4(v4) => Some(Self(v4)),
            IpAddr::V6(v6) if v6 == Ipv6Addr::LOCALHOST => Some(Self(Ipv4Addr::LOCALHOST)),
            IpAddr::V6(v6) => v6.to_ipv4_mapped().map(Self),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Ipv4Addr> for Identity {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn resolved(raw: &str) -> String {
        match Identity::resolve(raw) {
            Ok(identity) => identity.to_string(),
            Err(e) => panic!("{raw:?} should resolve: {e}"),
        }
    }

    #[test]
    fn plain_ipv4_is_kept() {
        assert_eq!(resolved("10.0.0.1"), "10.0.0.1");
        assert_eq!(resolved(" 192.168.1.20 "), "192.168.1.20");
    }

    #[test]
    fn ipv6_loopback_maps_to_ipv4_loopback() {
        assert_eq!(resolved("::1"), "127.0.0.1");
        assert_eq!(resolved("[::1]"), "127.0.0.1");
    }

    #[test]
    fn mapped_ipv6_is_unwrapped() {
        assert_eq!(resolved("::ffff:192.168.1.1"), "192.168.1.1");
        assert_eq!(resolved("::FFFF:10.0.0.7"), "10.0.0.7");
    }

    #[test]
    fn same_host_in_different_notation_is_one_identity() {
        let a = Identity::resolve("::ffff:10.0.0.1").ok();
        let b = Identity::resolve("10.0.0.1").ok();
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_ipv4() {
        for raw in [
            "",
            "localhost",
            "fe80::1",
            "2001:db8::1",
            "10.0.0",
            "10.0.0.256",
            "10.0.0.1.5",
            "1.2.3.4:80",
            "::10.0.0.1",
        ] {
            assert!(
                matches!(Identity::resolve(raw), Err(DrawError::InvalidIdentity(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn serializes_as_dotted_quad() {
        let identity = Identity::from(Ipv4Addr::new(10, 0, 0, 1));
        let json = serde_json::to_string(&identity).ok();
        assert_eq!(json.as_deref(), Some("\"10.0.0.1\""));
    }
}
