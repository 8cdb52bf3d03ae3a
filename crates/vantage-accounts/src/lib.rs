#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Account-domain primitives: number generation and activation matching.

pub mod activation;
pub mod number;

pub use activation::{
    ALREADY_ACTIVE_REASON, AccountStatus, ActivationStatus, MismatchReason, match_owner,
};
pub use number::{check_digit, generate, is_valid};
