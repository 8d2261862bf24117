/// Application-wide constants
/// All magic numbers and constant values should be defined here

/// Maximum accepted request body size in bytes (16 MiB)
pub const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

/// How long browsers may cache a CORS preflight response, in seconds (1 hour)
pub const CORS_MAX_AGE_SECS: u64 = 3600;

/// Port to listen on when PORT is not set
pub const DEFAULT_PORT: u16 = 8080;
