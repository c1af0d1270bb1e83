//! Standard exit codes (BSD sysexits.h compatible)

/// Location rejected: inside another guild's protection radius
pub const CONFLICT: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (invalid roster)
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
