//! Best-effort device location resolution.
//!
//! A [`LocationResolver`] drives a tiered strategy against an injected
//! [`LocationProvider`]: cached fix first, then a live fix under a timeout,
//! then a fixed Kuala Lumpur fallback. Permission denial is a reported
//! state, not a failure; functional GPS failure always degrades to the
//! default coordinate.

mod error;
mod provider;
mod resolver;

pub use error::LocatorError;
pub use provider::{LocationProvider, PermissionState, PositionFix};
pub use resolver::{LocationResolver, ResolverState};
