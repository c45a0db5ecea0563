use crate::roles::Permission;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("auth user '{0}' has no email and no usable handle in metadata")]
    NoUsableHandle(String),

    #[error("'{0}' is not a valid member handle")]
    InvalidHandle(String),

    #[error("member '{handle}' lacks the '{permission}' permission")]
    Forbidden {
        handle: String,
        permission: Permission,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
