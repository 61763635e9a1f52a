//! Exit codes of the `reql-oracle` binary. Scripts depend on these.

pub const SUCCESS: i32 = 0;
pub const TEST_FAILED: i32 = 1; // At least one case failed, or `compare` mismatched
pub const CONFIG_ERROR: i32 = 2; // Unreadable suite, bad literal, bad arguments
