//! A shallow scan for the offsets where top-level definitions begin, used to
//! split text that mixes type system and executable definitions.

const DEFINITION_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "fragment",
    "input",
    "interface",
    "mutation",
    "query",
    "scalar",
    "schema",
    "subscription",
    "type",
    "union",
];

/// Byte offsets, ascending, where a top-level definition may begin.
///
/// A candidate start is a definition keyword outside any brackets, the
/// description string before one, or a `{` that opens an anonymous query
/// right after another block. Keywords used as names also produce candidates,
/// so callers must be prepared to rejoin neighboring pieces.
pub(super) fn definition_starts(src: &str) -> Vec<usize> {
    let bytes = src.as_bytes();
    let mut starts = vec![];
    let mut depth = 0usize;
    let mut after_description = false;
    let mut after_block = true;
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' | b',' => pos += 1,

            b'#' => {
                while pos < bytes.len() && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
                    pos += 1;
                }
            },

            b'"' => {
                let start = pos;
                pos = skip_string(bytes, pos);
                if depth == 0 {
                    if !after_description {
                        starts.push(start);
                    }
                    after_description = true;
                    after_block = false;
                }
            },

            b'{' | b'(' | b'[' => {
                if depth == 0 {
                    if byte == b'{' && after_block && !after_description {
                        starts.push(pos);
                    }
                    after_description = false;
                    after_block = false;
                }
                depth += 1;
                pos += 1;
            },

            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    after_block = byte == b'}';
                    after_description = false;
                }
                pos += 1;
            },

            b'_' | b'A'..=b'Z' | b'a'..=b'z' => {
                let start = pos;
                while pos < bytes.len() && is_name_continue(bytes[pos]) {
                    pos += 1;
                }
                if depth == 0 {
                    if !after_description && DEFINITION_KEYWORDS.contains(&&src[start..pos]) {
                        starts.push(start);
                    }
                    after_description = false;
                    after_block = false;
                }
            },

            _ => {
                if depth == 0 {
                    after_description = false;
                    after_block = false;
                }
                pos += 1;
            },
        }
    }

    starts
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Returns the offset just past the string (block or single-line) that
/// starts at `pos`. Unterminated strings run to the end of their line, or of
/// the source for block strings.
fn skip_string(bytes: &[u8], mut pos: usize) -> usize {
    if bytes[pos..].starts_with(b"\"\"\"") {
        pos += 3;
        while pos < bytes.len() {
            if bytes[pos..].starts_with(b"\\\"\"\"") {
                pos += 4;
            } else if bytes[pos..].starts_with(b"\"\"\"") {
                return pos + 3;
            } else {
                pos += 1;
            }
        }
        return bytes.len();
    }

    pos += 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => return pos + 1,
            b'\n' | b'\r' => return pos,
            _ => pos += 1,
        }
    }
    bytes.len()
}
