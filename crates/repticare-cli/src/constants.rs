//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (reptile, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Stored data failed to parse.
    pub const CORRUPT_DATA: i32 = 6;

    /// Stored data could not be read or written.
    pub const STORAGE_FAILED: i32 = 7;
}

/// Default timezone used to render timestamps.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Date format for human-readable output.
pub const DATE_FORMAT: &str = "%-d %B %Y, %H:%M";
