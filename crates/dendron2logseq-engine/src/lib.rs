//! Core conversion engine: turns Dendron-flavored markdown documents into
//! Logseq outline pages.
//!
//! The engine is single-threaded and synchronous; each document is transformed
//! start-to-finish with no shared state, except the title registry
//! ([`check_title_uniqueness`]) which must run as a pre-pass over every
//! document before any output is written.

pub mod emit;
pub mod frontmatter;
pub mod io;
pub mod models;
pub mod registry;
pub mod rewrite;
pub mod segment;
pub mod warning;

pub use models::{EmptyLines, NoteName, Options, SourceNote, TitleMode};
pub use registry::{DuplicateTitles, FrontmatterInfo, TitleConflict, check_title_uniqueness};
pub use segment::{Block, BlockKind, OutlineDocument};
pub use warning::Warning;

/// The result of transforming one document.
#[derive(Debug)]
pub struct TransformOutput {
    /// Final page text, ready to write.
    pub text: String,
    /// Feeds the cross-document title-uniqueness check.
    pub info: FrontmatterInfo,
    pub warnings: Vec<Warning>,
}

/// Transform one source document into outline text.
///
/// Never fails: malformed markdown degrades to best-effort output plus
/// [`Warning`]s. The one fatal condition, duplicate titles under
/// [`TitleMode::Property`], is checked separately via
/// [`check_title_uniqueness`] so a batch can abort before writing anything.
pub fn transform(note: &SourceNote, options: &Options) -> TransformOutput {
    let lines: Vec<&str> = note.text.lines().collect();
    let split = frontmatter::split(&lines);

    let mut warnings = Vec::new();
    warnings.extend(split.warning);

    let classifier = segment::LineClassifier;
    let mut builder = segment::BlockBuilder::new(split.body_start);
    for line in &lines[split.body_start..] {
        builder.push(&classifier.classify(line));
    }
    let (blocks, segment_warnings) = builder.finish();
    warnings.extend(segment_warnings);

    let title = split
        .frontmatter
        .as_ref()
        .and_then(|fm| fm.title().map(String::from));
    let doc = OutlineDocument {
        frontmatter: split.frontmatter,
        blocks,
    };

    TransformOutput {
        text: emit::emit(&doc, options),
        info: FrontmatterInfo {
            note: note.name.clone(),
            title,
        },
        warnings,
    }
}
