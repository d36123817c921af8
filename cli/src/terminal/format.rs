use crate::terminal::colors;
use colored::*;
use std::net::IpAddr;
use std::time::Duration;

pub fn address(addr: &IpAddr) -> ColoredString {
    match addr {
        IpAddr::V4(v4) => v4.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(v6) => v6.to_string().color(colors::IPV6_ADDR),
    }
}

pub fn host_count(count: usize) -> String {
    let unit: &str = if count == 1 { "live host" } else { "live hosts" };
    format!("{count} {unit}")
}

pub fn elapsed(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}
