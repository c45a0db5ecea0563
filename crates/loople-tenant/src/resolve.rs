use crate::error::{Error, Result};

// Labels kept for the application's own surfaces, never a tenant.
const RESERVED_SUBDOMAINS: &[&str] = &["www", "app", "api"];

// DNS label limit.
const MAX_SLUG_LEN: usize = 63;

/// A validated tenant identifier: lowercase ASCII alphanumerics and `-`,
/// not starting or ending with `-`, at most 63 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantSlug(String);

impl TenantSlug {
    pub fn new(slug: &str) -> Result<Self> {
        if is_valid_slug(slug) {
            Ok(Self(slug.to_string()))
        } else {
            Err(Error::InvalidSlug(slug.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the tenant from a `Host` header value.
///
/// `base_domain` is the domain the application is served under (for example
/// `loople.app`); the tenant is the single label in front of it. Matching is
/// case-insensitive, ports and a trailing dot on the host are ignored.
pub fn resolve_subdomain(host: &str, base_domain: &str) -> Result<TenantSlug> {
    let trimmed = strip_port(host.trim());
    if trimmed.is_empty() {
        return Err(Error::EmptyHost);
    }
    if trimmed.starts_with('[') {
        // Bracketed IPv6 literals are never tenant hosts.
        return Err(Error::ForeignHost(trimmed.to_string()));
    }

    let normalized = trimmed.trim_end_matches('.').to_ascii_lowercase();
    let base = base_domain.trim_end_matches('.').to_ascii_lowercase();

    if normalized == base {
        return Err(Error::ApexHost(normalized));
    }

    let label = match normalized
        .strip_suffix(&base)
        .and_then(|rest| rest.strip_suffix('.'))
    {
        Some(label) if !label.is_empty() => label,
        _ => return Err(Error::ForeignHost(normalized.clone())),
    };

    if label.contains('.') {
        return Err(Error::NestedSubdomain(normalized.clone()));
    }
    if RESERVED_SUBDOMAINS.contains(&label) {
        return Err(Error::ReservedSubdomain(label.to_string()));
    }

    TenantSlug::new(label)
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return host;
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
