pub mod sweep;

use std::time::Duration;

use clap::{ArgAction, Parser};
use sweepr_common::config::{Config, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "sweepr", version)]
#[command(about = "Find the live hosts of an IP block with a ping sweep.")]
pub struct CommandLine {
    /// IP address or CIDR block to sweep (asked for when omitted)
    pub target: Option<String>,

    /// File to store live hosts in [default: live_hosts_<block>.txt]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of probes in flight at once
    #[arg(short, long, default_value_t = SweepConfig::DEFAULT_JOBS, value_parser = parse_jobs)]
    pub jobs: usize,

    /// Seconds to wait for each echo reply
    #[arg(short, long, default_value = "1", value_parser = parse_seconds)]
    pub timeout: Duration,

    /// Echo requests sent to every address
    #[arg(short = 'c', long = "count", default_value_t = SweepConfig::DEFAULT_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: u32,

    /// Print less; repeat to keep only the summary
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::default()
            .with_jobs(self.jobs)
            .with_timeout(self.timeout)
            .with_attempts(self.attempts)
    }
}

fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(jobs) => Ok(jobs),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("not a number of seconds: {e}"))?;
    if !(secs > 0.0) {
        return Err("must be greater than zero".to_string());
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}
