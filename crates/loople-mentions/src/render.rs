use serde::Serialize;

use crate::segment::{Segment, segments};

/// One renderable span of a post body. The rendering layer emits `Plain` as
/// literal output and `ProfileLink` as a navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedSpan<'a> {
    Plain { text: &'a str },
    ProfileLink {
        label: String,
        href: String,
        handle: &'a str,
    },
}

pub fn profile_href(handle: &str) -> String {
    format!("/profile/{handle}")
}

/// Lazily map a body to renderable spans: literal text passes through,
/// mentions become profile links labeled with their source form.
pub fn rendered_spans(text: &str) -> impl Iterator<Item = RenderedSpan<'_>> {
    segments(text).map(|segment| match segment {
        Segment::Text(text) => RenderedSpan::Plain { text },
        Segment::Mention(handle) => RenderedSpan::ProfileLink {
            label: format!("@{handle}"),
            href: profile_href(handle),
            handle,
        },
    })
}
