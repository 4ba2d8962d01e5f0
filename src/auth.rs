//! Session-domain types: the bearer credential and the explicit session object.

pub mod credential;
pub mod session;

pub use credential::*;
pub use session::*;
