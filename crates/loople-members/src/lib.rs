mod context;
pub mod error;
mod models;
mod notify;
mod roles;

pub use context::RequestContext;
pub use error::{Error, Result};
pub use models::{AuthUser, Member, member_from_auth};
pub use notify::{MemberDirectory, mentioned_members};
pub use roles::{Badge, Permission, Role, Tone};
