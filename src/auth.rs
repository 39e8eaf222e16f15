//! Credential secrets and the bearer-token session model.

pub mod secret;
pub mod session;

pub use secret::*;
pub use session::*;
