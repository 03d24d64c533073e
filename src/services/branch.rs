//! Branch resolution policy.
//!
//! Landing pages tolerate a wrong guess (the readme fetch simply fails too),
//! so an empty reported default branch falls back to `main`. Arbitrary blob
//! paths must not be probed on a guessed branch, so the same condition is a
//! hard failure there.

/// Fallback branch for landing-page readme fetches.
pub const FALLBACK_BRANCH: &str = "main";

/// Provider reported no default branch on an endpoint that cannot guess one.
#[derive(Debug, thiserror::Error)]
#[error("provider did not report a default branch")]
pub struct MissingDefaultBranch;

/// Branch to read a landing-page readme from.
pub fn landing_branch(reported: &str) -> &str {
    if reported.is_empty() {
        FALLBACK_BRANCH
    } else {
        reported
    }
}

/// Branch to read an arbitrary blob path from.
pub fn blob_branch(reported: &str) -> Result<&str, MissingDefaultBranch> {
    if reported.is_empty() {
        Err(MissingDefaultBranch)
    } else {
        Ok(reported)
    }
}
