use std::sync::Arc;

use colored::*;
use tracing::{Instrument, info_span};

use crate::sprint;
use crate::terminal::input::SweepRequest;
use crate::terminal::progress::TerminalObserver;
use crate::terminal::{colors, format, print};
use sweepr_common::config::{Config, SweepConfig};
use sweepr_common::success;
use sweepr_core::{PingProber, SweepOutcome, Sweeper};

pub async fn sweep(request: SweepRequest, sweep_cfg: SweepConfig, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("sweep", indicatif.pb_show = true);
    let observer = Arc::new(TerminalObserver::new(span.clone(), cfg.quiet));
    let sweeper = Sweeper::new(Arc::new(PingProber::new()), sweep_cfg).with_observer(observer);

    let run = sweeper.sweep(&request.target, request.output.as_deref());
    let outcome: SweepOutcome = if cfg.quiet < 2 {
        run.instrument(span).await?
    } else {
        run.await?
    };

    sweep_ends(&outcome, cfg);
    Ok(())
}

fn sweep_ends(outcome: &SweepOutcome, cfg: &Config) {
    if cfg.quiet > 0 {
        print_short_summary(outcome);
        return;
    }

    sprint!();
    if outcome.live_hosts.is_empty() {
        print::header("zero hosts detected", cfg.quiet);
        print::no_results();
    } else {
        print::header("sweep complete", cfg.quiet);
    }
    print_summary(outcome);
}

fn print_summary(outcome: &SweepOutcome) {
    let live: ColoredString = format::host_count(outcome.live_hosts.len()).bold().green();
    let total_time: ColoredString = format::elapsed(outcome.elapsed).bold().yellow();
    let headline: String = format!(
        "{live} out of {} addresses in {total_time}",
        outcome.total_targets
    );

    print::aligned_line("Block", outcome.spec.label());
    print::aligned_line(
        "Live hosts",
        outcome.live_hosts.len().to_string().color(colors::PROGRESS).bold(),
    );
    print::aligned_line(
        "Saved to",
        outcome.output_path.display().to_string().color(colors::PROGRESS),
    );
    print::fat_separator();
    print::centerln(&headline.color(colors::TEXT_DEFAULT).to_string());
}

fn print_short_summary(outcome: &SweepOutcome) {
    success!(
        "Total number of live hosts: {}",
        outcome.live_hosts.len().to_string().color(colors::PROGRESS)
    );
    success!(
        "Live hosts saved to: {}",
        outcome.output_path.display().to_string().color(colors::PROGRESS)
    );
}
