pub mod error;
mod resolve;

pub use error::{Error, Result};
pub use resolve::{TenantSlug, resolve_subdomain};
