#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty host header")]
    EmptyHost,

    #[error("host '{0}' is not under the expected base domain")]
    ForeignHost(String),

    #[error("host '{0}' is the apex domain; no tenant subdomain present")]
    ApexHost(String),

    #[error("host '{0}' has a nested subdomain; tenant hosts are single-label")]
    NestedSubdomain(String),

    #[error("subdomain '{0}' is reserved")]
    ReservedSubdomain(String),

    #[error("'{0}' is not a valid tenant slug")]
    InvalidSlug(String),
}

pub type Result<T> = std::result::Result<T, Error>;
