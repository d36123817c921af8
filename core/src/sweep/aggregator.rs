use std::net::IpAddr;
use std::sync::Arc;

use super::observer::SweepObserver;
use super::{LiveHostSet, ProbeResult};

/// Sole owner of the live hosts found so far.
///
/// Results may arrive in any order; the final set is put back into
/// enumeration order using [`ProbeResult::index`].
pub(crate) struct Aggregator {
    observer: Arc<dyn SweepObserver>,
    total: u128,
    done: u128,
    found: Vec<(u128, IpAddr)>,
}

impl Aggregator {
    pub(crate) fn new(observer: Arc<dyn SweepObserver>, total: u128) -> Self {
        Self {
            observer,
            total,
            done: 0,
            found: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, result: ProbeResult) {
        self.done += 1;

        if result.reachable {
            self.found.push((result.index, result.address));
            self.observer.on_host_up(result.address);
        }

        self.observer.on_progress(self.done, self.total);
    }

    pub(crate) fn done(&self) -> u128 {
        self.done
    }

    pub(crate) fn finish(mut self) -> LiveHostSet {
        self.found.sort_unstable_by_key(|(index, _)| *index);
        LiveHostSet::from_ordered(self.found.into_iter().map(|(_, addr)| addr).collect())
    }
}
