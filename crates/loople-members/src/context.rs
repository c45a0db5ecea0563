use loople_tenant::TenantSlug;

use crate::error::{Error, Result};
use crate::models::Member;
use crate::roles::Permission;

/// Per-request context, passed explicitly into request-handling code rather
/// than held in ambient state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub tenant: TenantSlug,
    pub actor: Member,
}

impl RequestContext {
    pub fn new(tenant: TenantSlug, actor: Member) -> Self {
        Self { tenant, actor }
    }

    pub fn require(&self, permission: Permission) -> Result<()> {
        if self.actor.role.permits(permission) {
            Ok(())
        } else {
            Err(Error::Forbidden {
                handle: self.actor.handle.clone(),
                permission,
            })
        }
    }
}
