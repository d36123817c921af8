//! Reachability probes.
//!
//! The sweep only ever asks one question per address: *does it answer an
//! echo request?* The answer is a plain `bool`. A host that is down, a
//! `ping` binary that is missing, and a socket the OS refused to open all
//! read as `false`; nothing here returns an error.

use std::ffi::OsString;
use std::net::IpAddr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::debug;
use tokio::process::Command;

/// Extra time granted to the child on top of its own timeout before it is
/// killed.
const PROBE_GRACE: Duration = Duration::from_secs(1);

/// Something that can tell whether a host is up.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Sends `attempts` echo requests to `addr`, waiting up to `timeout` for
    /// each. Must return within a bounded time.
    async fn probe(&self, addr: IpAddr, timeout: Duration, attempts: u32) -> bool;
}

/// Probes by running the system `ping` binary once per address.
#[derive(Debug, Clone)]
pub struct PingProber {
    program: Option<OsString>,
}

impl PingProber {
    pub fn new() -> Self {
        Self { program: None }
    }

    /// Uses `program` instead of the platform `ping`. It receives the same
    /// arguments and only its exit status is looked at.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    fn program_for(&self, addr: &IpAddr) -> OsString {
        match &self.program {
            Some(program) => program.clone(),
            None => default_program(addr).into(),
        }
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, addr: IpAddr, timeout: Duration, attempts: u32) -> bool {
        let program = self.program_for(&addr);
        let mut command = Command::new(&program);
        command
            .args(ping_args(&addr, timeout, attempts))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                debug!("Failed to spawn {} for {addr}: {e}", program.to_string_lossy());
                return false;
            }
        };

        let deadline = probe_deadline(timeout, attempts);

        match tokio::time::timeout(deadline, child.wait()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!("Failed to wait for probe of {addr}: {e}");
                false
            }
            Err(_elapsed) => {
                debug!("Probe of {addr} overran {:.1}s, killing it", deadline.as_secs_f64());
                let _ = child.kill().await;
                false
            }
        }
    }
}

#[cfg(target_os = "macos")]
fn default_program(addr: &IpAddr) -> &'static str {
    match addr {
        IpAddr::V4(_) => "ping",
        IpAddr::V6(_) => "ping6",
    }
}

#[cfg(not(target_os = "macos"))]
fn default_program(_addr: &IpAddr) -> &'static str {
    "ping"
}

/// Gap `ping` leaves between consecutive echo requests.
const ECHO_INTERVAL: Duration = Duration::from_secs(1);

/// The per-reply wait as the child actually receives it.
#[cfg(any(target_os = "windows", target_os = "macos"))]
fn reply_wait(timeout: Duration) -> Duration {
    // both take the wait in milliseconds
    timeout.max(Duration::from_millis(1))
}

/// The per-reply wait as the child actually receives it.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn reply_wait(timeout: Duration) -> Duration {
    // iputils only accepts whole seconds on older releases
    Duration::from_secs(timeout.as_secs_f64().ceil().max(1.0) as u64)
}

/// Longest a well-behaved `ping` run with these options can take before
/// exiting on its own, plus [`PROBE_GRACE`].
pub fn probe_deadline(timeout: Duration, attempts: u32) -> Duration {
    let attempts = attempts.max(1);
    ECHO_INTERVAL
        .saturating_mul(attempts - 1)
        .saturating_add(reply_wait(timeout).saturating_mul(attempts))
        .saturating_add(PROBE_GRACE)
}

/// Command line for one probe of `addr`.
#[cfg(target_os = "windows")]
pub fn ping_args(addr: &IpAddr, timeout: Duration, attempts: u32) -> Vec<String> {
    vec![
        "-n".to_string(),
        attempts.max(1).to_string(),
        "-w".to_string(),
        reply_wait(timeout).as_millis().to_string(),
        addr.to_string(),
    ]
}

/// Command line for one probe of `addr`.
#[cfg(target_os = "macos")]
pub fn ping_args(addr: &IpAddr, timeout: Duration, attempts: u32) -> Vec<String> {
    vec![
        "-c".to_string(),
        attempts.max(1).to_string(),
        "-W".to_string(),
        reply_wait(timeout).as_millis().to_string(),
        addr.to_string(),
    ]
}

/// Command line for one probe of `addr`.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn ping_args(addr: &IpAddr, timeout: Duration, attempts: u32) -> Vec<String> {
    vec![
        "-c".to_string(),
        attempts.max(1).to_string(),
        "-W".to_string(),
        reply_wait(timeout).as_secs().to_string(),
        addr.to_string(),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
