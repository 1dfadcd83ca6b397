//! Outline serialization.
//!
//! Walks the ordered block list plus the processed frontmatter and produces
//! the final Logseq page text: one bullet per block, `level × indent_unit`
//! leading whitespace, continuation lines aligned two columns under their
//! bullet, blank runs resolved by the configured empty-line policy.

use crate::frontmatter::Frontmatter;
use crate::models::{EmptyLines, Options, TitleMode};
use crate::segment::{Block, BlockKind, OutlineDocument};

pub fn emit(doc: &OutlineDocument, options: &Options) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(fm) = &doc.frontmatter {
        emit_frontmatter(&mut out, fm, options);
    }
    emit_body(&mut out, &doc.blocks, options);

    if out.is_empty() {
        return String::new();
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn emit_frontmatter(out: &mut Vec<String>, fm: &Frontmatter, options: &Options) {
    let promoted = match options.title_mode {
        TitleMode::None => None,
        TitleMode::Alias => fm.title().map(|t| format!("alias:: {t}")),
        TitleMode::Property => fm.title().map(|t| format!("title:: {t}")),
    };
    if let Some(line) = promoted {
        out.push(line);
    }
    if options.remove_frontmatter {
        return;
    }

    // The literal frontmatter survives as a fenced code block; a promoted
    // title is not duplicated inside it.
    out.push("- ```".to_string());
    out.push("  ---".to_string());
    for line in fm.block_lines(options.title_mode != TitleMode::None) {
        out.push(format!("  {line}"));
    }
    out.push("  ---".to_string());
    out.push("  ```".to_string());
}

fn emit_body(out: &mut Vec<String>, blocks: &[Block], options: &Options) {
    let unit = options.indent_unit();
    let mut body_started = false;
    let mut after_heading = false;

    for block in blocks {
        if let BlockKind::Blank { count } = block.kind {
            let indent = unit.repeat(block.level);
            match options.empty_lines {
                EmptyLines::All => {}
                EmptyLines::None => {
                    for _ in 0..count {
                        out.push(format!("{indent}-"));
                    }
                }
                EmptyLines::Trim => {
                    // Runs collapse to one bullet, except at the start of the
                    // body and right after a heading where they vanish.
                    if body_started && !after_heading {
                        out.push(format!("{indent}-"));
                    }
                }
            }
            continue;
        }

        let indent = unit.repeat(block.level);
        let mut lines = block.lines.iter();
        if let Some(first) = lines.next() {
            if first.is_empty() {
                out.push(format!("{indent}-"));
            } else {
                out.push(format!("{indent}- {first}"));
            }
        }
        for line in lines {
            out.push(format!("{indent}  {line}"));
        }

        body_started = true;
        after_heading = matches!(block.kind, BlockKind::Heading { .. });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(blocks: Vec<Block>) -> OutlineDocument {
        OutlineDocument {
            frontmatter: None,
            blocks,
        }
    }

    fn block(kind: BlockKind, level: usize, lines: &[&str]) -> Block {
        Block {
            kind,
            level,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn bullets_indent_by_level() {
        let d = doc(vec![
            block(BlockKind::Heading { depth: 1 }, 0, &["# top"]),
            block(BlockKind::Paragraph, 1, &["text"]),
        ]);
        assert_eq!(emit(&d, &Options::default()), "- # top\n\t- text\n");
    }

    #[test]
    fn four_space_indent_option() {
        let d = doc(vec![block(BlockKind::ListItem, 2, &["deep"])]);
        let options = Options {
            four_space_indent: true,
            ..Options::default()
        };
        assert_eq!(emit(&d, &options), "        - deep\n");
    }

    #[test]
    fn continuation_lines_align_under_the_bullet() {
        let d = doc(vec![block(
            BlockKind::Paragraph,
            1,
            &["first", "second"],
        )]);
        assert_eq!(emit(&d, &Options::default()), "\t- first\n\t  second\n");
    }

    #[test]
    fn trim_drops_blanks_after_heading_and_at_start() {
        let d = doc(vec![
            block(BlockKind::Blank { count: 2 }, 0, &[]),
            block(BlockKind::Heading { depth: 1 }, 0, &["# h"]),
            block(BlockKind::Blank { count: 1 }, 1, &[]),
            block(BlockKind::Paragraph, 1, &["a"]),
            block(BlockKind::Blank { count: 3 }, 1, &[]),
            block(BlockKind::Paragraph, 1, &["b"]),
        ]);
        assert_eq!(
            emit(&d, &Options::default()),
            "- # h\n\t- a\n\t-\n\t- b\n"
        );
    }

    #[test]
    fn empty_lines_none_preserves_every_blank() {
        let d = doc(vec![
            block(BlockKind::Paragraph, 0, &["a"]),
            block(BlockKind::Blank { count: 2 }, 0, &[]),
            block(BlockKind::Paragraph, 0, &["b"]),
        ]);
        let options = Options {
            empty_lines: EmptyLines::None,
            ..Options::default()
        };
        assert_eq!(emit(&d, &options), "- a\n-\n-\n- b\n");
    }

    #[test]
    fn empty_lines_all_removes_every_blank() {
        let d = doc(vec![
            block(BlockKind::Paragraph, 0, &["a"]),
            block(BlockKind::Blank { count: 2 }, 0, &[]),
            block(BlockKind::Paragraph, 0, &["b"]),
        ]);
        let options = Options {
            empty_lines: EmptyLines::All,
            ..Options::default()
        };
        assert_eq!(emit(&d, &options), "- a\n- b\n");
    }

    #[test]
    fn empty_document_emits_nothing() {
        assert_eq!(emit(&doc(vec![]), &Options::default()), "");
    }
}
