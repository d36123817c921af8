use std::net::IpAddr;

use sweepr_common::network::spec::AddressSpec;

use super::SweepOutcome;

/// Receives notifications while a sweep runs.
///
/// Implementations decide how (and whether) to present them. Calls arrive
/// from the task driving the sweep, one at a time.
pub trait SweepObserver: Send + Sync {
    /// The block has been parsed and `total` probes are about to be issued.
    fn on_start(&self, _spec: &AddressSpec, _total: u128) {}

    /// `done` of `total` addresses have been probed.
    fn on_progress(&self, done: u128, total: u128);

    /// `addr` answered its probe.
    fn on_host_up(&self, addr: IpAddr);

    /// The live-host list has been written.
    fn on_finish(&self, _outcome: &SweepOutcome) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SweepObserver for SilentObserver {
    fn on_progress(&self, _done: u128, _total: u128) {}

    fn on_host_up(&self, _addr: IpAddr) {}
}
