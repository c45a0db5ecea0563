mod handles;
mod render;
mod segment;

pub use handles::{is_valid_handle, mentioned_handles};
pub use render::{RenderedSpan, profile_href, rendered_spans};
pub use segment::{MENTION_MARKER, Segment, Segments, is_handle_char, segments};
