use std::net::IpAddr;

use colored::*;
use indicatif::ProgressStyle;
use sweepr_common::network::spec::AddressSpec;
use sweepr_common::{info, success};
use sweepr_core::SweepObserver;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::{colors, format};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.blue} Progress: {pos}/{len} {wide_bar:.magenta/bright_black} {elapsed_precise}";
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Presents sweep notifications on the terminal.
///
/// The progress bar belongs to `span`; it is only drawn while the sweep runs
/// inside that span.
pub struct TerminalObserver {
    span: Span,
    quiet: u8,
}

impl TerminalObserver {
    pub fn new(span: Span, quiet: u8) -> Self {
        Self { span, quiet }
    }
}

impl SweepObserver for TerminalObserver {
    fn on_start(&self, spec: &AddressSpec, total: u128) {
        if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            self.span.pb_set_style(&style.tick_strings(TICK_STRINGS));
        }
        self.span.pb_set_length(u64::try_from(total).unwrap_or(u64::MAX));

        if self.quiet < 2 {
            let unit: &str = if total == 1 { "address" } else { "addresses" };
            info!(
                "Sweeping {} ({} {unit})",
                spec.label().color(colors::PRIMARY),
                total.to_string().color(colors::ACCENT)
            );
        }
    }

    fn on_progress(&self, done: u128, _total: u128) {
        self.span.pb_set_position(u64::try_from(done).unwrap_or(u64::MAX));
    }

    fn on_host_up(&self, addr: IpAddr) {
        if self.quiet < 2 {
            success!("{} is up", format::address(&addr).bold());
        }
    }
}
