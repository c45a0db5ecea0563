use std::collections::HashSet;

use loople_mentions::mentioned_handles;

use crate::models::Member;

/// Lookup seam onto the member store; an implementation answers handle
/// queries for a single tenant.
pub trait MemberDirectory {
    fn member_by_handle(&self, handle: &str) -> Option<Member>;
}

/// Members to notify for a post body: every distinct mentioned handle that
/// resolves in the directory, de-duplicated by member id. Unknown handles
/// are dropped.
pub fn mentioned_members<D: MemberDirectory>(directory: &D, body: &str) -> Vec<Member> {
    let mut seen = HashSet::new();
    mentioned_handles(body)
        .into_iter()
        .filter_map(|handle| directory.member_by_handle(handle))
        .filter(|member| seen.insert(member.id.clone()))
        .collect()
}
