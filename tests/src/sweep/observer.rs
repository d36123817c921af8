#![cfg(test)]
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sweepr_common::config::SweepConfig;
use sweepr_common::network::spec::AddressSpec;
use sweepr_core::{SweepObserver, SweepOutcome, Sweeper};
use tempfile::TempDir;

use crate::stub::StubProber;

#[derive(Default)]
struct Recorder {
    started: Mutex<Option<(String, u128)>>,
    progress: Mutex<Vec<(u128, u128)>>,
    up: Mutex<Vec<IpAddr>>,
    finished: Mutex<Option<usize>>,
}

impl SweepObserver for Recorder {
    fn on_start(&self, spec: &AddressSpec, total: u128) {
        *self.started.lock().unwrap() = Some((spec.label(), total));
    }

    fn on_progress(&self, done: u128, total: u128) {
        self.progress.lock().unwrap().push((done, total));
    }

    fn on_host_up(&self, addr: IpAddr) {
        self.up.lock().unwrap().push(addr);
    }

    fn on_finish(&self, outcome: &SweepOutcome) {
        *self.finished.lock().unwrap() = Some(outcome.live_hosts.len());
    }
}

async fn run(jobs: usize, recorder: Arc<Recorder>) {
    let dir = TempDir::new().unwrap();
    let prober = Arc::new(
        StubProber::up(&["10.4.0.2", "10.4.0.9", "10.4.0.14"]).with_delay(Duration::from_millis(1)),
    );
    let sweeper = Sweeper::new(prober, SweepConfig::default().with_jobs(jobs))
        .with_observer(recorder);
    let output = dir.path().join("hosts.txt");

    sweeper
        .sweep("10.4.0.0/28", output.to_str())
        .await
        .unwrap();
}

#[tokio::test]
async fn progress_counts_every_address_once() {
    for jobs in [1, 5] {
        let recorder = Arc::new(Recorder::default());
        run(jobs, recorder.clone()).await;

        let progress = recorder.progress.lock().unwrap().clone();
        let expected: Vec<(u128, u128)> = (1..=14).map(|done| (done, 14)).collect();
        assert_eq!(progress, expected, "jobs = {jobs}");
    }
}

#[tokio::test]
async fn host_up_sequential_follows_enumeration_order() {
    let recorder = Arc::new(Recorder::default());
    run(1, recorder.clone()).await;

    let up: Vec<String> = recorder.up.lock().unwrap().iter().map(|a| a.to_string()).collect();
    assert_eq!(up, vec!["10.4.0.2", "10.4.0.9", "10.4.0.14"]);
}

#[tokio::test]
async fn host_up_parallel_reports_each_live_host() {
    let recorder = Arc::new(Recorder::default());
    run(5, recorder.clone()).await;

    let mut up: Vec<String> = recorder.up.lock().unwrap().iter().map(|a| a.to_string()).collect();
    up.sort();
    assert_eq!(up, vec!["10.4.0.14", "10.4.0.2", "10.4.0.9"]);
}

#[tokio::test]
async fn start_and_finish_bracket_the_sweep() {
    let recorder = Arc::new(Recorder::default());
    run(1, recorder.clone()).await;

    assert_eq!(
        *recorder.started.lock().unwrap(),
        Some(("10.4.0.0/28".to_string(), 14))
    );
    assert_eq!(*recorder.finished.lock().unwrap(), Some(3));
}
