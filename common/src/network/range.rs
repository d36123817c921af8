//! # Host Range Model
//!
//! A contiguous, inclusive interval of IPv4 or IPv6 addresses.
//!
//! Addresses are kept as `u128` so both families share one code path. The
//! range never materializes its members: [`HostRange::len`] is plain
//! arithmetic and [`HostRange::iter`] yields addresses lazily, which keeps
//! blocks like `10.0.0.0/8` or an IPv6 `/64` cheap to describe.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Number of bits in an address of this family.
    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    pub(crate) fn to_addr(self, raw: u128) -> IpAddr {
        match self {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(raw as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(raw)),
        }
    }
}

pub(crate) fn to_raw(addr: &IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(*v4)),
        IpAddr::V6(v6) => u128::from(*v6),
    }
}

/// Inclusive range of addresses, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRange {
    family: Family,
    start: u128,
    end: u128,
}

impl HostRange {
    /// Builds the range `start..=end`.
    ///
    /// Mixed families or a reversed range are a programming error and
    /// collapse to the single address `start`.
    pub fn new(start: IpAddr, end: IpAddr) -> Self {
        let family = Family::of(&start);
        let start_raw = to_raw(&start);
        let end_raw = if Family::of(&end) == family {
            to_raw(&end).max(start_raw)
        } else {
            start_raw
        };

        Self {
            family,
            start: start_raw,
            end: end_raw,
        }
    }

    pub fn single(addr: IpAddr) -> Self {
        Self::new(addr, addr)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn first(&self) -> IpAddr {
        self.family.to_addr(self.start)
    }

    pub fn last(&self) -> IpAddr {
        self.family.to_addr(self.end)
    }

    /// Number of addresses in the range. Never zero.
    ///
    /// Saturates at `u128::MAX` for the one range that cannot be counted
    /// exactly (all of IPv6).
    pub fn len(&self) -> u128 {
        (self.end - self.start).saturating_add(1)
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        Family::of(addr) == self.family && (self.start..=self.end).contains(&to_raw(addr))
    }

    /// Ascending iterator over the range. Restart it by calling `iter` again.
    pub fn iter(&self) -> HostIter {
        HostIter {
            family: self.family,
            next: self.start,
            end: self.end,
            exhausted: false,
        }
    }
}

impl IntoIterator for HostRange {
    type Item = IpAddr;
    type IntoIter = HostIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &HostRange {
    type Item = IpAddr;
    type IntoIter = HostIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct HostIter {
    family: Family,
    next: u128,
    end: u128,
    exhausted: bool,
}

impl Iterator for HostIter {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self.next;
        if current == self.end {
            self.exhausted = true;
        } else {
            self.next += 1;
        }

        Some(self.family.to_addr(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = (self.end - self.next).saturating_add(1);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
