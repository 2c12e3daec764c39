//! Single-pass segment scanner.
//!
//! Walks the scheme-less input once, left to right, recording where the
//! structural bytes `/`, `:` and `+` sit and rejecting every other byte that
//! cannot appear in a component. The result is a set of borrowed spans into
//! the input; nothing is copied and nothing is allocated.

use crate::part::Part;
use crate::path_ref::ModelPathRef;

/// At most two slashes: `domain/namespace/name`.
const MAX_SLASHES: usize = 2;

/// Scans `s` into component spans.
///
/// Returns `None` for any structural or character-set violation.
pub(crate) fn scan(s: &str) -> Option<ModelPathRef<'_>> {
    let mut slashes = [0usize; MAX_SLASHES];
    let mut slash_count = 0;
    let mut colon = None;
    let mut plus = None;

    for (i, b) in s.bytes().enumerate() {
        match b {
            b'/' => {
                // The name-bearing segment is always last.
                if colon.is_some() || plus.is_some() || slash_count == MAX_SLASHES {
                    return None;
                }
                slashes[slash_count] = i;
                slash_count += 1;
            }
            b':' => {
                if colon.is_some() || plus.is_some() {
                    return None;
                }
                colon = Some(i);
            }
            b'+' => {
                if plus.is_some() {
                    return None;
                }
                plus = Some(i);
            }
            b if Part::is_valid_byte(b) => {}
            _ => return None,
        }
    }

    let (domain, namespace, head) = match slashes[..slash_count] {
        [] => ("", "", 0),
        [ns_end] => ("", span(s, 0, ns_end)?, ns_end + 1),
        [domain_end, ns_end] => (
            span(s, 0, domain_end)?,
            span(s, domain_end + 1, ns_end)?,
            ns_end + 1,
        ),
        _ => return None,
    };

    let name = span(s, head, colon.or(plus).unwrap_or(s.len()))?;
    let tag = match colon {
        Some(at) => span(s, at + 1, plus.unwrap_or(s.len()))?,
        None => "",
    };
    let build = match plus {
        Some(at) => span(s, at + 1, s.len())?,
        None => "",
    };

    Some(ModelPathRef {
        domain,
        namespace,
        name,
        tag,
        build,
    })
}

/// Returns `s[start..end]` if it is a valid component.
fn span(s: &str, start: usize, end: usize) -> Option<&str> {
    s.get(start..end).filter(|c| Part::is_valid_component(c))
}
