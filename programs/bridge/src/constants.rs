//! Compile-time configuration for the bridge core.
//!
//! On-chain programs have no runtime config file; these constants are the
//! program's configuration surface, fixed at build time.

/// Minimum validator set size. Below this a set cannot be initialized or
/// rotated into.
pub const MIN_VALIDATORS: usize = 4;

/// Maximum validator set size.
pub const MAX_VALIDATORS: usize = 19;

/// Fixed width of a `BridgingRequest.receiver` foreign-chain address.
pub const RECEIVER_LEN: usize = 32;

/// Seed for the singleton `ValidatorSet` PDA.
pub const VALIDATOR_SET_SEED: &[u8] = b"validator-set";

/// Seed prefix for a per-sender `BridgingRequest` PDA.
pub const BRIDGING_REQUEST_SEED: &[u8] = b"bridging_request";
