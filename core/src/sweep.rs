//! # Sweep Coordinator
//!
//! Drives one liveness sweep from a raw block string to a written report:
//!
//! ```text
//! INIT -> ENUMERATING -> PROBING(1..=total) -> FINALIZING -> DONE
//! ```
//!
//! 1. **Enumerating**: the block is parsed into an [`AddressSpec`]. A bad
//!    block fails here, before any probe is sent or any file is touched.
//! 2. **Probing**: every usable address is handed to the [`Prober`] exactly
//!    once. Results flow into a single [`Aggregator`] that owns the live-host
//!    list and notifies the [`SweepObserver`].
//! 3. **Finalizing**: the output path is resolved and the live hosts are
//!    written in enumeration order.
//!
//! With `jobs == 1` addresses are probed strictly one after another. With more
//! jobs, up to `jobs` probes run at once and notifications follow completion
//! order; the written report is still in enumeration order.

use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sweepr_common::config::SweepConfig;
use sweepr_common::debug;
use sweepr_common::error::SweepError;
use sweepr_common::network::range::HostRange;
use sweepr_common::network::spec::AddressSpec;
use tokio::sync::{Semaphore, mpsc};

use crate::probe::Prober;
use crate::writer;

mod aggregator;
mod observer;

use aggregator::Aggregator;
pub use observer::{SilentObserver, SweepObserver};

/// Outcome of probing a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// Position of `address` in the enumeration, starting at 0.
    pub index: u128,
    pub address: IpAddr,
    pub reachable: bool,
}

/// Addresses that answered, in enumeration order. Frozen once the sweep ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveHostSet {
    hosts: Vec<IpAddr>,
}

impl LiveHostSet {
    pub(crate) fn from_ordered(hosts: Vec<IpAddr>) -> Self {
        Self { hosts }
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.hosts.iter()
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.hosts
    }

    pub fn into_vec(self) -> Vec<IpAddr> {
        self.hosts
    }
}

/// Everything a finished sweep produced.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub spec: AddressSpec,
    pub total_targets: u128,
    pub live_hosts: LiveHostSet,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    Init,
    Enumerating,
    Probing { done: u128, total: u128 },
    Finalizing,
    Done,
}

impl fmt::Display for SweepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepState::Init => f.write_str("init"),
            SweepState::Enumerating => f.write_str("enumerating"),
            SweepState::Probing { done, total } => write!(f, "probing {done}/{total}"),
            SweepState::Finalizing => f.write_str("finalizing"),
            SweepState::Done => f.write_str("done"),
        }
    }
}

/// Runs sweeps with a given prober, observer and configuration.
pub struct Sweeper {
    prober: Arc<dyn Prober>,
    observer: Arc<dyn SweepObserver>,
    config: SweepConfig,
}

impl Sweeper {
    pub fn new(prober: Arc<dyn Prober>, config: SweepConfig) -> Self {
        Self {
            prober,
            observer: Arc::new(SilentObserver),
            config,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SweepObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Sweeps `spec` and writes the live hosts to `output_path`, or to the
    /// derived `live_hosts_<block>.txt` when no path (or a blank one) is given.
    pub async fn sweep(
        &self,
        spec: &str,
        output_path: Option<&str>,
    ) -> Result<SweepOutcome, SweepError> {
        let started = Instant::now();
        transition(SweepState::Init);

        transition(SweepState::Enumerating);
        let spec = AddressSpec::parse(spec)?;
        let hosts: HostRange = spec.hosts();
        let total: u128 = hosts.len();
        self.observer.on_start(&spec, total);

        transition(SweepState::Probing { done: 0, total });
        let live_hosts = if self.config.jobs <= 1 {
            self.probe_sequential(hosts, total).await
        } else {
            self.probe_pooled(hosts, total).await
        };

        transition(SweepState::Finalizing);
        let output_path = resolve_output_path(&spec, output_path);
        writer::write_hosts(&output_path, live_hosts.as_slice())?;

        let outcome = SweepOutcome {
            spec,
            total_targets: total,
            live_hosts,
            output_path,
            elapsed: started.elapsed(),
        };

        transition(SweepState::Done);
        self.observer.on_finish(&outcome);
        Ok(outcome)
    }

    async fn probe_sequential(&self, hosts: HostRange, total: u128) -> LiveHostSet {
        let mut aggregator = Aggregator::new(self.observer.clone(), total);

        for (index, address) in (0u128..).zip(hosts.iter()) {
            let reachable = self
                .prober
                .probe(address, self.config.timeout, self.config.attempts)
                .await;
            aggregator.record(ProbeResult {
                index,
                address,
                reachable,
            });
        }

        aggregator.finish()
    }

    async fn probe_pooled(&self, hosts: HostRange, total: u128) -> LiveHostSet {
        let jobs = self.config.jobs;
        let (tx, mut rx) = mpsc::channel::<ProbeResult>(jobs);
        let permits = Arc::new(Semaphore::new(jobs));
        let prober = self.prober.clone();
        let SweepConfig {
            timeout, attempts, ..
        } = self.config;

        let dispatcher = tokio::spawn(async move {
            for (index, address) in (0u128..).zip(hosts.iter()) {
                let Ok(permit) = permits.clone().acquire_owned().await else {
                    break;
                };
                let tx = tx.clone();
                let prober = prober.clone();

                tokio::spawn(async move {
                    let reachable = prober.probe(address, timeout, attempts).await;
                    let _ = tx
                        .send(ProbeResult {
                            index,
                            address,
                            reachable,
                        })
                        .await;
                    drop(permit);
                });
            }
        });

        let mut aggregator = Aggregator::new(self.observer.clone(), total);
        while let Some(result) = rx.recv().await {
            aggregator.record(result);
        }

        if let Err(e) = dispatcher.await {
            debug!("Probe dispatcher stopped early: {e}");
        }
        if aggregator.done() != total {
            debug!("{} of {total} probes reported back", aggregator.done());
        }

        aggregator.finish()
    }
}

/// `live_hosts_<block>.txt`, with every `/` in the block replaced by `_`.
pub fn derive_output_path(spec: &AddressSpec) -> PathBuf {
    PathBuf::from(format!("live_hosts_{}.txt", spec.label().replace('/', "_")))
}

fn resolve_output_path(spec: &AddressSpec, requested: Option<&str>) -> PathBuf {
    requested
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(Path::new)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| derive_output_path(spec))
}

fn transition(state: SweepState) {
    debug!("Sweep state: {state}");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
