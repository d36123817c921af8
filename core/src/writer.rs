//! Persists the live-host list.
//!
//! The report is plain text: one address per line, `\n`-terminated, no
//! header. The whole report is built in memory and written with a single
//! call, truncating whatever was at the path before.

use std::fs;
use std::net::IpAddr;
use std::path::Path;

use sweepr_common::debug;
use sweepr_common::error::SweepError;

/// Writes `hosts` to `path`, one per line.
pub fn write_hosts(path: &Path, hosts: &[IpAddr]) -> Result<(), SweepError> {
    let report = render(hosts);
    fs::write(path, report).map_err(|e| SweepError::io(path, e))?;
    debug!("Wrote {} live hosts to {}", hosts.len(), path.display());
    Ok(())
}

fn render(hosts: &[IpAddr]) -> String {
    let mut report = String::with_capacity(hosts.len() * 16);
    for host in hosts {
        report.push_str(&host.to_string());
        report.push('\n');
    }
    report
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
