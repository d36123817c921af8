//! # Address Specification
//!
//! Parses the block a sweep is run against and expands it into usable hosts.
//!
//! Accepted inputs:
//! * A single IPv4/IPv6 address (e.g., `10.0.0.5`, `2001:db8::7`).
//! * A CIDR block (e.g., `192.168.1.0/24`). Host bits are masked away, so
//!   `192.168.1.77/24` describes the same block.
//!
//! Usable hosts follow the usual CIDR rules: the network and broadcast
//! addresses are dropped when the block has room for them (IPv4 up to `/30`),
//! IPv6 drops only the subnet-router address (up to `/126`), and `/31`,
//! `/32`, `/127`, `/128` keep every address.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::SweepError;
use crate::network::range::{self, Family, HostRange};

/// A validated, normalized sweep target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpec {
    network: IpNetwork,
    bare: bool,
}

impl AddressSpec {
    pub fn parse(s: &str) -> Result<Self, SweepError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SweepError::invalid_spec(s, "empty input"));
        }

        if let Some(spec) = parse_host(trimmed) {
            return Ok(spec);
        }

        if let Some(spec) =
            parse_cidr(trimmed).map_err(|reason| SweepError::invalid_spec(s, reason))?
        {
            return Ok(spec);
        }

        Err(SweepError::invalid_spec(s, "not an IP address or CIDR block"))
    }

    /// The normalized network this spec describes.
    pub fn network(&self) -> IpNetwork {
        self.network
    }

    /// `true` when the input was a bare address rather than a block.
    pub fn is_single(&self) -> bool {
        self.bare
    }

    /// Canonical text form: the address for bare inputs, `network/prefix`
    /// otherwise.
    pub fn label(&self) -> String {
        if self.bare {
            self.network.ip().to_string()
        } else {
            format!("{}/{}", self.network.network(), self.network.prefix())
        }
    }

    /// Usable host addresses of the block, lazily.
    pub fn hosts(&self) -> HostRange {
        let base: IpAddr = self.network.network();
        let family = Family::of(&base);
        let prefix = self.network.prefix();
        let bits = family.bits();

        let host_bits = bits - prefix;
        let network_raw = range::to_raw(&base);
        let last_raw = if host_bits == 0 {
            network_raw
        } else if host_bits == 128 {
            u128::MAX
        } else {
            network_raw | ((1u128 << host_bits) - 1)
        };

        let (start, end) = match (family, host_bits) {
            (_, 0) | (_, 1) => (network_raw, last_raw),
            (Family::V4, _) => (network_raw + 1, last_raw - 1),
            (Family::V6, _) => (network_raw + 1, last_raw),
        };

        HostRange::new(family.to_addr(start), family.to_addr(end))
    }

    /// Number of usable hosts, without walking them.
    pub fn total_count(&self) -> u128 {
        self.hosts().len()
    }
}

/// Parses `spec` and returns its host sequence together with its length.
pub fn expand(spec: &str) -> Result<(HostRange, u128), SweepError> {
    let spec = AddressSpec::parse(spec)?;
    let hosts = spec.hosts();
    Ok((hosts, hosts.len()))
}

impl FromStr for AddressSpec {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a single IP address.
fn parse_host(s: &str) -> Option<AddressSpec> {
    let addr = s.parse::<IpAddr>().ok()?;
    let prefix = Family::of(&addr).bits();
    IpNetwork::new(addr, prefix)
        .ok()
        .map(|network| AddressSpec { network, bare: true })
}

/// Parses CIDR notation like "192.168.1.0/24".
fn parse_cidr(s: &str) -> Result<Option<AddressSpec>, String> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Ok(None);
    };

    let addr = ip_str
        .parse::<IpAddr>()
        .map_err(|e| format!("invalid IP in CIDR '{ip_str}': {e}"))?;

    let prefix = prefix_str
        .parse::<u8>()
        .map_err(|e| format!("invalid prefix in CIDR '{prefix_str}': {e}"))?;

    let network = IpNetwork::new(addr, prefix).map_err(|e| e.to_string())?;
    let network = IpNetwork::new(network.network(), prefix).map_err(|e| e.to_string())?;

    Ok(Some(AddressSpec {
        network,
        bare: false,
    }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
