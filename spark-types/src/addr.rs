// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A network address as carried on the wire by the daemon: raw address bytes
/// in network order plus the interface the address is scoped to, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryAddress {
    pub addr: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_name: Option<String>,
}

impl BinaryAddress {
    pub fn new(addr: impl Into<Vec<u8>>) -> Self {
        Self {
            addr: addr.into(),
            if_name: None,
        }
    }
}

impl From<Ipv4Addr> for BinaryAddress {
    fn from(a: Ipv4Addr) -> Self {
        Self::new(a.octets())
    }
}

impl From<Ipv6Addr> for BinaryAddress {
    fn from(a: Ipv6Addr) -> Self {
        Self::new(a.octets())
    }
}

impl std::fmt::Display for BinaryAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&sprint_addr(&self.addr))
    }
}

/// Render raw address bytes in their standard textual notation.
///
/// Four bytes render dotted-decimal and sixteen bytes render as an RFC 5952
/// IPv6 address. An empty sequence renders as the empty string. Any other
/// length is passed through as `0x` followed by the lowercase hex of the
/// bytes, so a malformed address never aborts a report.
pub fn sprint_addr(addr: &[u8]) -> String {
    if let Ok(octets) = <[u8; 4]>::try_from(addr) {
        return Ipv4Addr::from(octets).to_string();
    }
    if let Ok(octets) = <[u8; 16]>::try_from(addr) {
        return Ipv6Addr::from(octets).to_string();
    }
    if addr.is_empty() {
        return String::new();
    }
    let mut s = String::with_capacity(2 + addr.len() * 2);
    s.push_str("0x");
    for b in addr {
        // writing into a String cannot fail
        let _ = write!(s, "{b:02x}");
    }
    s
}
