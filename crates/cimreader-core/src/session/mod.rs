//! Session model and the observable provider that owns it.

mod model;
mod provider;

pub use model::Session;
pub use provider::{SessionCallback, SessionProvider, SubscriptionHandle};
