//! Session verification for tokens issued by the external identity provider.
//!
//! The application never registers users or signs tokens; it only checks the
//! provider's signature and hands the opaque subject to handlers.

mod claims;
pub(crate) mod extractors;

pub use extractors::AuthSubject;
