//! Bounded model-checking proofs for model path parsing.
//!
//! An `Arbitrary` impl builds short well-formed references, and a separate
//! generator mixes component bytes with `/ : +` and rejected bytes. The
//! proofs check that:
//!
//! - rendering a parsed path and parsing it again yields the same path
//! - any input parses to a valid path or to exactly the zero value
//! - the build component never holds a lower-case letter
//! - `merge` takes each component from the primary path when it is present
//!
//! Compiled only under `cfg(kani)`; run with `cargo kani --features kani`.

use crate::{ModelPath, Part, merge};

/// Bytes allowed inside a component
const COMPONENT_CHARS: &[u8] = b"abcXYZ019.-_";

/// Bytes the scanner treats specially, plus a few it must reject
const STRUCTURAL_CHARS: &[u8] = b"/:+ @";

fn arbitrary_component_char() -> char {
    let idx: usize = kani::any();
    COMPONENT_CHARS[idx % COMPONENT_CHARS.len()] as char
}

/// Generate a 1-4 byte component for tractability
fn arbitrary_component() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| arbitrary_component_char()).collect()
}

/// Generate a short input mixing component and structural bytes
fn arbitrary_input() -> String {
    let len: usize = kani::any();
    let len = len % 6;
    (0..len)
        .map(|_| {
            let structural: bool = kani::any();
            if structural {
                let idx: usize = kani::any();
                STRUCTURAL_CHARS[idx % STRUCTURAL_CHARS.len()] as char
            } else {
                arbitrary_component_char()
            }
        })
        .collect()
}

impl kani::Arbitrary for ModelPath {
    fn any() -> Self {
        let mut s = String::new();

        let segments: usize = kani::any();
        match segments % 3 {
            2 => {
                s.push_str(&arbitrary_component());
                s.push('/');
                s.push_str(&arbitrary_component());
                s.push('/');
            }
            1 => {
                s.push_str(&arbitrary_component());
                s.push('/');
            }
            _ => {}
        }
        s.push_str(&arbitrary_component());

        let has_tag: bool = kani::any();
        if has_tag {
            s.push(':');
            s.push_str(&arbitrary_component());
        }
        let has_build: bool = kani::any();
        if has_build {
            s.push('+');
            s.push_str(&arbitrary_component());
        }

        ModelPath::try_parse(&s).expect("valid path by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Display then parse equals original
#[kani::proof]
#[kani::unwind(12)]
fn proof_parse_roundtrip() {
    let p: ModelPath = kani::any();
    assert_eq!(ModelPath::parse(&p.to_string()), p);
}

/// Proof: Any input is either valid or exactly the zero value
#[kani::proof]
#[kani::unwind(8)]
fn proof_invalid_is_zero() {
    let s = arbitrary_input();
    let p = ModelPath::parse(&s);
    assert!(p.is_valid() || p == ModelPath::default());
    assert_eq!(p.is_valid(), !p.name().is_empty());
}

/// Proof: Build is always stored upper-cased
#[kani::proof]
#[kani::unwind(12)]
fn proof_build_upper_case() {
    let p: ModelPath = kani::any();
    assert!(!p.build().bytes().any(|b| b.is_ascii_lowercase()));
}

/// Proof: Merge takes each component from the primary when present
#[kani::proof]
#[kani::unwind(12)]
fn proof_merge_precedence() {
    let a: ModelPath = kani::any();
    let b: ModelPath = kani::any();
    let m = merge(&a, &b);

    for part in Part::ALL {
        let want = if a.get(part).is_empty() {
            b.get(part)
        } else {
            a.get(part)
        };
        assert_eq!(m.get(part), want);
    }
}
