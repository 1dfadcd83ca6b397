use crate::frontmatter::Frontmatter;

/// The structural kind of one outline block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A `#`-marked heading; the markers are kept in the bullet text.
    Heading { depth: u8 },
    /// A run of contiguous plain text lines (one bullet, however many lines).
    Paragraph,
    /// A fenced code block; indented code is normalized into this kind with
    /// synthetic fence markers.
    FencedCode,
    /// A run of contiguous `>`-prefixed lines.
    Blockquote,
    /// One unordered list item and everything nested inside it.
    ListItem,
    /// A `---` or `***` rule on its own line.
    ThematicBreak,
    /// A run of consecutive blank lines, resolved by the emitter's policy.
    Blank { count: usize },
}

/// A contiguous run of source lines assigned one kind and one outline level.
///
/// `lines[0]` is the bullet text (structural markers stripped for list items,
/// kept for headings and blockquotes); the remaining lines are continuation
/// content aligned under the bullet. Blocks are terminal once emitted by the
/// segmenter; they are never merged or split afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Outline depth: number of indent units before the bullet.
    pub level: usize,
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind, level: usize) -> Self {
        Self {
            kind,
            level,
            lines: Vec::new(),
        }
    }
}

/// One transformation run's intermediate product: ordered blocks plus the
/// processed frontmatter, owned by a single run and never shared.
#[derive(Debug)]
pub struct OutlineDocument {
    pub frontmatter: Option<Frontmatter>,
    pub blocks: Vec<Block>,
}
