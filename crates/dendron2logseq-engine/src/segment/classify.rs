use super::kinds::{Bullet, CodeFence, FenceSig, heading_depth, ordered_marker};

/// How many columns of leading whitespace make one nesting level of input.
pub const INDENT_WIDTH: usize = 4;

/// Classification of a single line containing only local facts.
///
/// Phase 1 of segmentation: each line is classified independently, without
/// reference to surrounding context. The builder decides what the facts mean.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line with leading tabs normalized to four spaces, no line ending.
    pub text: String,
    pub blank: bool,
    /// Leading-whitespace depth in units of [`INDENT_WIDTH`].
    pub indent: usize,
    /// Leading whitespace in columns, for fence re-alignment.
    pub indent_cols: usize,
    /// Set when the trimmed line opens or closes a fence.
    pub fence_sig: Option<FenceSig>,
    /// Indented by at least one code-block unit.
    pub indented: bool,
    /// Starts a blockquote line (after leading whitespace).
    pub quote: bool,
    pub heading: Option<u8>,
    /// Unordered list marker: `(indent level, item text)`.
    pub bullet: Option<(usize, String)>,
    pub thematic_break: bool,
    pub ordered: bool,
}

/// Classifies individual lines for the segmentation phase.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, raw: &str) -> LineClass {
        let text = normalize_leading_tabs(raw.trim_end_matches(['\r', '\n']));
        let trimmed = text.trim_start();
        let blank = trimmed.is_empty();
        let indent_cols = text.len() - trimmed.len();
        let indent = indent_cols / INDENT_WIDTH;

        let bullet = Bullet::strip(trimmed).map(|item| (indent, item.to_string()));
        let stripped = text.trim();

        LineClass {
            blank,
            indent,
            indent_cols,
            fence_sig: CodeFence::sig(trimmed),
            indented: text.starts_with("    "),
            quote: trimmed.starts_with('>'),
            heading: heading_depth(&text),
            bullet,
            thematic_break: stripped == "---" || stripped == "***",
            ordered: ordered_marker(trimmed),
            text,
        }
    }
}

/// Leading tabs count as one indent level each; the rest of the line is kept
/// byte-identical.
fn normalize_leading_tabs(line: &str) -> String {
    let tabs = line.chars().take_while(|&c| c == '\t').count();
    if tabs == 0 {
        return line.to_string();
    }
    format!("{}{}", "    ".repeat(tabs), &line[tabs..])
}
