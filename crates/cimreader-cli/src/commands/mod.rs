pub mod auth;
pub mod chat;
pub mod convert;
pub mod history;

use cimreader_core::CimError;

/// Turns the controller's `Unauthenticated` into an actionable message;
/// every other error passes through unchanged.
pub(crate) fn surface(err: CimError) -> anyhow::Error {
    if err.is_unauthenticated() {
        anyhow::anyhow!("Not signed in. Run `cimreader auth login --token <token>` first.")
    } else {
        anyhow::anyhow!(err)
    }
}
