#![cfg(test)]
use std::collections::HashSet;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::config::SweepConfig;
use sweepr_common::error::SweepError;
use sweepr_core::Sweeper;
use tempfile::TempDir;

use crate::stub::StubProber;

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("report should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Deletes a report written outside a temp dir, even when the test fails.
struct RemoveOnDrop(PathBuf);

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn out_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

/// 10.0.0.0/30 has two usable hosts; only the first answers.
#[tokio::test]
async fn sweep_slash30_with_one_live_host() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(StubProber::up(&["10.0.0.1"]));
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default());
    let output = out_path(&dir, "hosts.txt");

    let outcome = sweeper.sweep("10.0.0.0/30", Some(&output)).await.unwrap();

    assert_eq!(outcome.total_targets, 2);
    assert_eq!(outcome.live_hosts.len(), 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "10.0.0.1\n");
    assert_eq!(
        prober.calls(),
        vec![
            "10.0.0.1".parse::<IpAddr>().unwrap(),
            "10.0.0.2".parse::<IpAddr>().unwrap()
        ]
    );
}

#[tokio::test]
async fn invalid_spec_probes_nothing_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(StubProber::all_up());
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default());
    let output = out_path(&dir, "hosts.txt");

    let result = sweeper.sweep("not-an-ip", Some(&output)).await;

    assert!(
        matches!(result, Err(SweepError::InvalidSpec { ref spec, .. }) if spec == "not-an-ip"),
        "unexpected result: {result:?}"
    );
    assert_eq!(prober.call_count(), 0);
    assert!(!Path::new(&output).exists());
}

#[tokio::test]
async fn single_address_down_leaves_empty_report() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(StubProber::all_down());
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default());
    let output = out_path(&dir, "hosts.txt");

    let outcome = sweeper.sweep("10.0.0.5", Some(&output)).await.unwrap();

    assert_eq!(outcome.total_targets, 1);
    assert!(outcome.live_hosts.is_empty());
    assert_eq!(fs::read(&output).unwrap().len(), 0);
    assert_eq!(prober.call_count(), 1);
}

#[tokio::test]
async fn derived_output_name_lands_in_working_directory() {
    let expected = PathBuf::from("live_hosts_10.99.0.0_30.txt");
    let _cleanup = RemoveOnDrop(expected.clone());
    let prober = Arc::new(StubProber::up(&["10.99.0.2"]));
    let sweeper = Sweeper::new(prober, SweepConfig::default());

    let outcome = sweeper.sweep("10.99.0.0/30", None).await.unwrap();

    assert_eq!(outcome.output_path, expected);
    assert_eq!(lines(&outcome.output_path), vec!["10.99.0.2"]);
}

#[tokio::test]
async fn every_address_probed_once_with_parallel_jobs() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(
        StubProber::up(&["172.16.0.10", "172.16.0.1", "172.16.1.254", "172.16.0.200"])
            .with_delay(Duration::from_millis(2)),
    );
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default().with_jobs(8));
    let output = out_path(&dir, "hosts.txt");

    let outcome = sweeper.sweep("172.16.0.0/23", Some(&output)).await.unwrap();

    let calls = prober.calls();
    let unique: HashSet<IpAddr> = calls.iter().copied().collect();
    assert_eq!(outcome.total_targets, 510);
    assert_eq!(calls.len(), 510);
    assert_eq!(unique.len(), 510);
    assert!(prober.peak_in_flight() <= 8);
    assert!(prober.peak_in_flight() > 1);

    assert_eq!(
        lines(Path::new(&output)),
        vec!["172.16.0.1", "172.16.0.10", "172.16.0.200", "172.16.1.254"]
    );
}

#[tokio::test]
async fn sequential_sweep_never_overlaps_probes() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(StubProber::all_down().with_delay(Duration::from_millis(1)));
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default());

    sweeper
        .sweep("192.168.5.0/28", Some(&out_path(&dir, "hosts.txt")))
        .await
        .unwrap();

    assert_eq!(prober.call_count(), 14);
    assert_eq!(prober.peak_in_flight(), 1);
}

#[tokio::test]
async fn repeated_sweeps_produce_identical_reports() {
    let dir = TempDir::new().unwrap();

    for (jobs, name) in [(1, "seq"), (4, "pool")] {
        let mut reports = Vec::new();
        for run in 0..3 {
            let prober = Arc::new(StubProber::all_up());
            let sweeper = Sweeper::new(prober, SweepConfig::default().with_jobs(jobs));
            let output = out_path(&dir, &format!("{name}-{run}.txt"));
            sweeper.sweep("10.1.1.0/29", Some(&output)).await.unwrap();
            reports.push(fs::read_to_string(&output).unwrap());
        }
        assert!(reports.windows(2).all(|pair| pair[0] == pair[1]), "{name}");
        assert_eq!(reports[0].lines().count(), 6);
    }
}

#[tokio::test]
async fn report_has_no_duplicates_and_only_enumerated_addresses() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(StubProber::up(&["10.2.0.1", "10.2.0.6", "10.2.0.7", "10.3.0.1"]));
    let sweeper = Sweeper::new(prober, SweepConfig::default().with_jobs(3));
    let output = out_path(&dir, "hosts.txt");

    sweeper.sweep("10.2.0.0/29", Some(&output)).await.unwrap();

    let report = lines(Path::new(&output));
    let unique: HashSet<&String> = report.iter().collect();
    assert_eq!(report, vec!["10.2.0.1", "10.2.0.6"]);
    assert_eq!(unique.len(), report.len());
}

#[tokio::test]
async fn existing_report_is_truncated() {
    let dir = TempDir::new().unwrap();
    let output = out_path(&dir, "hosts.txt");
    fs::write(&output, "10.9.9.9\n10.9.9.8\n").unwrap();

    let sweeper = Sweeper::new(Arc::new(StubProber::all_down()), SweepConfig::default());
    sweeper.sweep("10.0.0.0/30", Some(&output)).await.unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[tokio::test]
async fn unwritable_output_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no-such-dir").join("hosts.txt");
    let prober = Arc::new(StubProber::up(&["10.0.0.1"]));
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default());

    let result = sweeper.sweep("10.0.0.0/30", output.to_str()).await;

    match result {
        Err(SweepError::Io { path, .. }) => assert_eq!(path, output),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert_eq!(prober.call_count(), 2);
}

#[tokio::test]
async fn ipv6_block_skips_subnet_router_address() {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(StubProber::up(&["2001:db8::3"]));
    let sweeper = Sweeper::new(prober.clone(), SweepConfig::default());
    let output = out_path(&dir, "hosts.txt");

    let outcome = sweeper.sweep("2001:db8::/126", Some(&output)).await.unwrap();

    assert_eq!(outcome.total_targets, 3);
    assert!(!prober.calls().contains(&"2001:db8::".parse::<IpAddr>().unwrap()));
    assert_eq!(fs::read_to_string(&output).unwrap(), "2001:db8::3\n");
}
