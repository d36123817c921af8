use std::time::Duration;

/// Presentation settings shared by the terminal front-end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner printed at start-up.
    pub no_banner: bool,
    /// `0` prints everything, `1` drops decoration, `2` keeps only the summary.
    pub quiet: u8,
}

/// Knobs of a single sweep.
///
/// The defaults reproduce a plain `ping -c 1 -W 1` loop: one echo per
/// address, one second of patience, one probe in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// How long a single echo attempt may wait for a reply.
    pub timeout: Duration,
    /// Echo requests sent per address.
    pub attempts: u32,
    /// Upper bound on probes in flight at the same time.
    pub jobs: usize,
}

impl SweepConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
    pub const DEFAULT_ATTEMPTS: u32 = 1;
    pub const DEFAULT_JOBS: usize = 1;

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            attempts: Self::DEFAULT_ATTEMPTS,
            jobs: Self::DEFAULT_JOBS,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
