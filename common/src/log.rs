//! # Logging Macros
//!
//! Thin wrappers around [`tracing`] events.
//!
//! Every macro tags its event with a fixed target so the terminal front-end can
//! pick a status symbol without parsing the message. Library code should use
//! these instead of printing directly.

/// Target of positive outcomes (`[+]`).
pub const SUCCESS_TARGET: &str = "sweepr::success";
/// Target of neutral status lines (`[*]`).
pub const INFO_TARGET: &str = "sweepr::info";
/// Target of warnings (`[!]`).
pub const WARN_TARGET: &str = "sweepr::warn";
/// Target of errors (`[-]`).
pub const ERROR_TARGET: &str = "sweepr::error";
/// Target of diagnostics (`[?]`).
pub const DEBUG_TARGET: &str = "sweepr::debug";
/// Target of raw, pre-formatted lines.
pub const PRINT_TARGET: &str = "sweepr::print";

#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: $crate::log::INFO_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!(target: $crate::log::WARN_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!(target: $crate::log::ERROR_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!(target: $crate::log::DEBUG_TARGET, $($arg)*)
    };
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
