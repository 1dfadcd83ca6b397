//! Per-kind marker detection with owned delimiters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Fence signature of a line, if its trimmed remainder opens or closes one.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    /// A fence only closes on the same marker family it opened with.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        sig == Some(open)
    }
}

pub struct Bullet;

impl Bullet {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Strip an unordered list marker, returning the item text.
    pub fn strip(text: &str) -> Option<&str> {
        let mut chars = text.chars();
        let marker = chars.next()?;
        if Self::MARKERS.contains(&marker) && chars.next() == Some(' ') {
            Some(&text[2..])
        } else {
            None
        }
    }
}

/// Heading marker depth (1-6 `#` followed by a space), at column 0 only.
pub fn heading_depth(line: &str) -> Option<u8> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Ordered list markers (`1. `, `2) `) are recognized only to warn about them;
/// they pass through as plain paragraph text.
pub fn ordered_marker(text: &str) -> bool {
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    let rest = &text[digits..];
    (rest.starts_with('.') || rest.starts_with(')')) && rest[1..].starts_with(' ')
}
