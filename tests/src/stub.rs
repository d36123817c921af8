#![cfg(test)]
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_core::Prober;

/// A prober that never touches the network.
///
/// Addresses in `up` answer, everything else stays silent. Every call is
/// recorded so tests can check what was probed and how often.
pub struct StubProber {
    up: HashSet<IpAddr>,
    all_up: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<IpAddr>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StubProber {
    /// Only the listed addresses answer.
    pub fn up(addrs: &[&str]) -> Self {
        let up = addrs
            .iter()
            .map(|s| s.parse().expect("stub address must be valid"))
            .collect();
        Self::build(up, false)
    }

    pub fn all_down() -> Self {
        Self::build(HashSet::new(), false)
    }

    pub fn all_up() -> Self {
        Self::build(HashSet::new(), true)
    }

    /// Makes every probe take `delay`, to force probes to overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn build(up: HashSet<IpAddr>, all_up: bool) -> Self {
        Self {
            up,
            all_up,
            delay: None,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> Vec<IpAddr> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    /// Highest number of probes that were running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for StubProber {
    async fn probe(&self, addr: IpAddr, _timeout: Duration, _attempts: u32) -> bool {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(addr);
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.all_up || self.up.contains(&addr)
    }
}
