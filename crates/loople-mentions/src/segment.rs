use serde::Serialize;

/// Marker character that introduces a mention.
pub const MENTION_MARKER: char = '@';

/// One classified span of a post body: literal text, or a mention handle
/// (without the leading marker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Segment<'a> {
    Text(&'a str),
    Mention(&'a str),
}

impl<'a> Segment<'a> {
    pub fn value(&self) -> &'a str {
        match self {
            Segment::Text(value) | Segment::Mention(value) => value,
        }
    }

    /// Byte length of the source span this segment was scanned from,
    /// including the marker for mentions.
    pub fn source_len(&self) -> usize {
        match self {
            Segment::Text(value) => value.len(),
            Segment::Mention(value) => MENTION_MARKER.len_utf8() + value.len(),
        }
    }
}

/// Split `text` into text and mention segments.
///
/// A mention is a marker immediately followed by one or more handle
/// characters (ASCII letters, digits, underscore), matched greedily. A
/// marker with no handle character after it stays literal text, and adjacent
/// literal runs come back as one coalesced `Text` segment. The concatenated
/// source form of all segments reproduces `text` exactly.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        match find_mention_start(self.rest) {
            Some(0) => {
                let handle_end = 1 + handle_len(&self.rest[1..]);
                let handle = &self.rest[1..handle_end];
                self.rest = &self.rest[handle_end..];
                Some(Segment::Mention(handle))
            }
            Some(start) => {
                let text = &self.rest[..start];
                self.rest = &self.rest[start..];
                Some(Segment::Text(text))
            }
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Segment::Text(text))
            }
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

pub fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_handle_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Byte offset of the first marker that opens a mention, i.e. a marker
/// immediately followed by a handle character. The scan is byte-wise; the
/// marker and the handle grammar are ASCII, so UTF-8 continuation bytes can
/// never match and every returned offset is a char boundary.
fn find_mention_start(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len()).find(|&idx| {
        bytes[idx] == b'@' && bytes.get(idx + 1).is_some_and(|&next| is_handle_byte(next))
    })
}

fn handle_len(s: &str) -> usize {
    s.bytes().take_while(|&byte| is_handle_byte(byte)).count()
}

#[cfg(test)]
mod tests {
    use super::{MENTION_MARKER, Segment, segments};

    fn reconstruct(input: &str) -> String {
        let mut out = String::new();
        for segment in segments(input) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Mention(handle) => {
                    out.push(MENTION_MARKER);
                    out.push_str(handle);
                }
            }
        }
        out
    }

    fn collect(input: &str) -> Vec<Segment<'_>> {
        segments(input).collect()
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(collect("hello world"), vec![Segment::Text("hello world")]);
    }

    #[test]
    fn mention_mid_sentence() {
        assert_eq!(
            collect("hi @alice how are you"),
            vec![
                Segment::Text("hi "),
                Segment::Mention("alice"),
                Segment::Text(" how are you"),
            ]
        );
    }

    #[test]
    fn adjacent_mentions_keep_separator_text() {
        assert_eq!(
            collect("@alice @bob"),
            vec![
                Segment::Mention("alice"),
                Segment::Text(" "),
                Segment::Mention("bob"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert_eq!(collect(""), Vec::new());
    }

    #[test]
    fn bare_marker_is_literal_text() {
        assert_eq!(collect("@"), vec![Segment::Text("@")]);
    }

    #[test]
    fn marker_before_invalid_char_stays_in_text_run() {
        // No backtracking and no split: the run stays one coalesced segment.
        assert_eq!(collect("a @ b @! c"), vec![Segment::Text("a @ b @! c")]);
    }

    #[test]
    fn greedy_match_consumes_whole_handle() {
        assert_eq!(
            collect("@ab@cd"),
            vec![Segment::Mention("ab"), Segment::Mention("cd")]
        );
    }

    #[test]
    fn doubled_marker_leaves_first_as_text() {
        assert_eq!(
            collect("@@ab"),
            vec![Segment::Text("@"), Segment::Mention("ab")]
        );
    }

    #[test]
    fn email_like_text_yields_a_mention() {
        // Chosen policy: the grammar has no word-boundary rule, so the `@`
        // inside an address starts a mention.
        assert_eq!(
            collect("email me at a@b.com"),
            vec![
                Segment::Text("email me at a"),
                Segment::Mention("b"),
                Segment::Text(".com"),
            ]
        );
    }

    #[test]
    fn handle_stops_at_first_non_handle_char() {
        assert_eq!(
            collect("@alice_1!"),
            vec![Segment::Mention("alice_1"), Segment::Text("!")]
        );
    }

    #[test]
    fn mention_at_end_of_input() {
        assert_eq!(
            collect("ping @bob"),
            vec![Segment::Text("ping "), Segment::Mention("bob")]
        );
    }

    #[test]
    fn non_ascii_char_does_not_open_a_mention() {
        assert_eq!(collect("hej @åsa"), vec![Segment::Text("hej @åsa")]);
    }

    #[test]
    fn non_ascii_text_around_mentions_survives() {
        assert_eq!(
            collect("你好 @alice 欢迎"),
            vec![
                Segment::Text("你好 "),
                Segment::Mention("alice"),
                Segment::Text(" 欢迎"),
            ]
        );
    }

    #[test]
    fn round_trip_reconstructs_input_exactly() {
        let inputs = [
            "",
            "@",
            "@@@",
            "hello world",
            "hi @alice how are you",
            "@alice @bob",
            "@ab@cd",
            "email me at a@b.com",
            "   ",
            "käse @bob@carol! fin @",
            "@end",
        ];
        for input in inputs {
            assert_eq!(reconstruct(input), input, "round-trip failed for {input:?}");
            let total: usize = segments(input).map(|segment| segment.source_len()).sum();
            assert_eq!(total, input.len(), "source_len mismatch for {input:?}");
        }
    }

    #[test]
    fn no_two_adjacent_text_segments() {
        let inputs = ["a @ b @! c", "x@1 y@2", "@a@b c d @", "plain", "@@x@@y"];
        for input in inputs {
            let all = collect(input);
            for pair in all.windows(2) {
                assert!(
                    !matches!(pair, [Segment::Text(_), Segment::Text(_)]),
                    "adjacent text segments in {input:?}: {all:?}"
                );
            }
        }
    }

    #[test]
    fn serializes_as_tagged_records() {
        let all = collect("hi @alice");
        let json = serde_json::to_string(&all).expect("serialize");
        assert_eq!(
            json,
            r#"[{"type":"text","value":"hi "},{"type":"mention","value":"alice"}]"#
        );
    }
}
