use loople_mentions::is_valid_handle;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::roles::Role;

/// The hosted auth provider's subject, as delivered in the session payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    pub email: Option<String>,
    pub role: Role,
}

/// Shape an auth subject into a member profile.
///
/// The handle comes from `metadata.handle` when present and valid, otherwise
/// it is derived from the email local part, folded to the mention handle
/// grammar. A metadata handle that fails validation is an error rather than
/// silently replaced.
pub fn member_from_auth(auth: &AuthUser, role: Role) -> Result<Member> {
    let handle = handle_for(auth)?;
    let display_name = auth.display_name.clone().unwrap_or_else(|| handle.clone());
    Ok(Member {
        id: auth.id.clone(),
        handle,
        display_name,
        email: auth.email.clone(),
        role,
    })
}

fn handle_for(auth: &AuthUser) -> Result<String> {
    if let Some(handle) = auth.metadata.get("handle").and_then(|value| value.as_str()) {
        if is_valid_handle(handle) {
            return Ok(handle.to_string());
        }
        return Err(Error::InvalidHandle(handle.to_string()));
    }

    let local_part = auth
        .email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .unwrap_or("");
    let sanitized = sanitize_handle(local_part);
    if sanitized.is_empty() {
        return Err(Error::NoUsableHandle(auth.id.clone()));
    }
    Ok(sanitized)
}

/// Fold arbitrary text into the handle grammar: ASCII alphanumerics pass
/// through lowercased, runs of anything else collapse to a single `_`,
/// leading and trailing separators dropped.
fn sanitize_handle(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
