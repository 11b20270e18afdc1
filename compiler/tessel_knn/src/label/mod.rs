//! Label codes and layout decisions.
//!
//! A [`LabelCode`] is the integer stored next to each exemplar. Its low byte
//! is a category tag; the bits above carry the payload:
//!
//! ```text
//! bits  31..16        15..8           7..0
//!       child index   count / delta   tag
//! ```
//!
//! Newline and whitespace counts use bits 8..24. Corpora written with this
//! layout stay readable by any build.

use std::fmt;

/// Category tags (low byte of a [`LabelCode`]).
pub mod tags {
    pub const INJECT_NEWLINE: i32 = 100;
    pub const INJECT_WHITESPACE: i32 = 200;
    pub const ALIGN_WITH_ANCESTOR_CHILD: i32 = 10;
    pub const INDENT_FROM_ANCESTOR_FIRST_TOKEN: i32 = 20;
    pub const INDENT: i32 = 30;
}

/// One layout decision for one token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Decision {
    /// No recognised tag: no newline, no whitespace, no alignment.
    #[default]
    None,
    InjectNewline(u16),
    InjectWhitespace(u16),
    /// Previous content line's first column plus the indent width.
    Indent,
    /// Column of child `child` of the ancestor `delta` hops above the
    /// token's earliest ancestor.
    AlignWithAncestorChild { delta: u8, child: u16 },
    /// First-token column of the ancestor `delta` hops above the token's
    /// earliest ancestor, plus the indent width.
    IndentFromAncestorFirstToken { delta: u8 },
}

impl Decision {
    /// Newlines requested by this decision.
    pub fn newlines(self) -> u16 {
        match self {
            Decision::InjectNewline(n) => n,
            _ => 0,
        }
    }

    /// Spaces requested by this decision.
    pub fn spaces(self) -> u16 {
        match self {
            Decision::InjectWhitespace(n) => n,
            _ => 0,
        }
    }

    #[inline]
    pub fn encode(self) -> LabelCode {
        LabelCode::encode(self)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Decision::None => f.write_str("none"),
            Decision::InjectNewline(n) => write!(f, "newline({n})"),
            Decision::InjectWhitespace(n) => write!(f, "whitespace({n})"),
            Decision::Indent => f.write_str("indent"),
            Decision::AlignWithAncestorChild { delta, child } => {
                write!(f, "align(ancestor +{delta}, child {child})")
            }
            Decision::IndentFromAncestorFirstToken { delta } => {
                write!(f, "indent(ancestor +{delta})")
            }
        }
    }
}

/// Packed decision as stored in a corpus.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct LabelCode(pub i32);

impl LabelCode {
    /// "No match / unaligned".
    pub const NONE: LabelCode = LabelCode(0);

    /// Category tag: the low byte.
    #[inline]
    pub fn tag(self) -> i32 {
        self.0 & 0xFF
    }

    #[inline]
    fn bits(self) -> u32 {
        u32::from_ne_bytes(self.0.to_ne_bytes())
    }

    #[inline]
    fn from_bits(bits: u32) -> LabelCode {
        LabelCode(i32::from_ne_bytes(bits.to_ne_bytes()))
    }

    /// Pack a decision. `Decision::None` packs to [`LabelCode::NONE`].
    pub fn encode(decision: Decision) -> LabelCode {
        let tag = i32::unsigned_abs;
        let bits = match decision {
            Decision::None => 0,
            Decision::InjectNewline(n) => tag(tags::INJECT_NEWLINE) | (u32::from(n) << 8),
            Decision::InjectWhitespace(n) => tag(tags::INJECT_WHITESPACE) | (u32::from(n) << 8),
            Decision::Indent => tag(tags::INDENT),
            Decision::AlignWithAncestorChild { delta, child } => {
                tag(tags::ALIGN_WITH_ANCESTOR_CHILD)
                    | (u32::from(delta) << 8)
                    | (u32::from(child) << 16)
            }
            Decision::IndentFromAncestorFirstToken { delta } => {
                tag(tags::INDENT_FROM_ANCESTOR_FIRST_TOKEN) | (u32::from(delta) << 8)
            }
        };
        LabelCode::from_bits(bits)
    }

    /// Unpack the decision; unrecognised tags decode to `Decision::None`.
    pub fn decode(self) -> Decision {
        let bits = self.bits();
        let count = (bits >> 8) as u16;
        let delta = (bits >> 8) as u8;
        let child = (bits >> 16) as u16;
        match self.tag() {
            tags::INJECT_NEWLINE => Decision::InjectNewline(count),
            tags::INJECT_WHITESPACE => Decision::InjectWhitespace(count),
            tags::INDENT => Decision::Indent,
            tags::ALIGN_WITH_ANCESTOR_CHILD => Decision::AlignWithAncestorChild { delta, child },
            tags::INDENT_FROM_ANCESTOR_FIRST_TOKEN => {
                Decision::IndentFromAncestorFirstToken { delta }
            }
            _ => Decision::None,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.decode() == Decision::None
    }
}

impl From<Decision> for LabelCode {
    fn from(decision: Decision) -> Self {
        LabelCode::encode(decision)
    }
}

impl fmt::Debug for LabelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelCode({:#x} = {})", self.0, self.decode())
    }
}

impl fmt::Display for LabelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.decode(), f)
    }
}
