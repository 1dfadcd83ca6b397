use crate::rewrite;
use crate::warning::Warning;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceSig},
    types::{Block, BlockKind},
};

/// Structural context currently open, kept as a no-repeat stack. The top of
/// the stack is the machine's state; an empty stack is the `BODY` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ctx {
    Heading,
    Paragraph,
    List,
    Blockquote,
    Fenced(FenceSig),
    Indented,
}

/// The line-based state machine that groups body lines into [`Block`]s.
///
/// Feed classified lines with [`push`](Self::push), then call
/// [`finish`](Self::finish). Every line is assigned to some block; unrecognized
/// syntax degrades to paragraph content rather than erroring.
pub struct BlockBuilder {
    stack: Vec<Ctx>,
    /// Marker depth of the innermost open heading (0 when none). Non-heading
    /// blocks nest at this base level.
    heading: usize,
    /// Indent level of the current list run.
    indent: usize,
    /// Leading columns stripped from buffered fence lines so the fence stays
    /// aligned from opening to closing marker.
    fence_strip: usize,
    fence_open_line: usize,
    open: Option<Block>,
    out: Vec<Block>,
    warnings: Vec<Warning>,
    line_no: usize,
}

impl BlockBuilder {
    /// `base_line` is the 0-based index of the first body line in the source
    /// document, so warnings carry document line numbers.
    pub fn new(base_line: usize) -> Self {
        Self {
            stack: Vec::new(),
            heading: 0,
            indent: 0,
            fence_strip: 0,
            fence_open_line: 0,
            open: None,
            out: Vec::new(),
            warnings: Vec::new(),
            line_no: base_line,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        self.line_no += 1;

        // FENCED_CODE: everything is data until the matching marker.
        if let Some(&Ctx::Fenced(sig)) = self.stack.last() {
            self.consume_fence_line(c, sig);
            return;
        }

        // INDENTED_CODE: continue, or close the synthetic fence and fall
        // through to classify this line normally.
        if self.stack.last() == Some(&Ctx::Indented) {
            if c.text.starts_with("    ") {
                self.open_mut().lines.push(c.text[4..].to_string());
                return;
            }
            self.open_mut().lines.push(CodeFence::BACKTICKS.to_string());
            self.stack.pop();
            self.flush();
        }

        if let Some(sig) = c.fence_sig {
            self.open_fence(c, sig);
            return;
        }

        // Indented code only starts at the top level or directly under a
        // heading; inside a paragraph or list the line is a continuation.
        if c.indented && !c.blank && (self.stack.is_empty() || self.stack.last() == Some(&Ctx::Heading)) {
            self.close_heading_ctx();
            self.flush();
            let mut block = Block::new(BlockKind::FencedCode, self.heading);
            block.lines.push(CodeFence::BACKTICKS.to_string());
            block.lines.push(c.text[4..].to_string());
            self.open = Some(block);
            self.push_ctx(Ctx::Indented);
            return;
        }

        if c.blank {
            if self.stack.last() != Some(&Ctx::Heading) {
                self.indent = 0;
                self.stack.clear();
            }
            self.flush();
            match self.out.last_mut() {
                Some(Block {
                    kind: BlockKind::Blank { count },
                    ..
                }) => *count += 1,
                _ => self
                    .out
                    .push(Block::new(BlockKind::Blank { count: 1 }, self.heading)),
            }
            return;
        }

        if c.thematic_break {
            self.flush();
            let mut block = Block::new(BlockKind::ThematicBreak, self.heading);
            block.lines.push(c.text.trim().to_string());
            self.out.push(block);
            return;
        }

        if let Some(depth) = c.heading {
            self.flush();
            self.indent = 0;
            self.stack.clear();
            self.heading = depth as usize;
            let text = self.rewritten(c.text.trim_end());
            let mut block = Block::new(BlockKind::Heading { depth }, self.heading - 1);
            block.lines.push(text);
            self.out.push(block);
            self.push_ctx(Ctx::Heading);
            return;
        }

        if c.quote {
            self.push_quote_line(c);
            return;
        }

        if let Some((depth, item)) = &c.bullet {
            self.flush();
            self.indent = *depth;
            let text = self.rewritten(item.trim_end());
            let mut block = Block::new(BlockKind::ListItem, self.heading + depth);
            block.lines.push(text);
            self.open = Some(block);
            self.push_ctx(Ctx::List);
            return;
        }

        self.push_text_line(c);
    }

    pub fn finish(mut self) -> (Vec<Block>, Vec<Warning>) {
        match self.stack.last() {
            Some(Ctx::Fenced(_)) => self.warnings.push(Warning::UnclosedFence {
                line: self.fence_open_line,
            }),
            Some(Ctx::Indented) => {
                self.open_mut().lines.push(CodeFence::BACKTICKS.to_string());
            }
            _ => {}
        }
        self.flush();
        (self.out, self.warnings)
    }

    fn consume_fence_line(&mut self, c: &LineClass, sig: FenceSig) {
        let line = strip_columns(&c.text, self.fence_strip);
        self.open_mut().lines.push(line);
        if CodeFence::closes(sig, c.fence_sig) {
            self.stack.pop();
            if matches!(
                self.open.as_ref().map(|b| &b.kind),
                Some(BlockKind::FencedCode)
            ) {
                self.flush();
            }
        }
    }

    fn open_fence(&mut self, c: &LineClass, sig: FenceSig) {
        self.fence_open_line = self.line_no;
        self.fence_strip = c.indent_cols;
        self.close_heading_ctx();

        if self.in_list() && c.indent >= self.indent && self.open.is_some() {
            // Fence stays inside the current list item.
            self.open_mut().lines.push(strip_columns(&c.text, c.indent_cols));
        } else if self.in_list() {
            // Outdented fence opens a new bullet inside the list run.
            self.flush();
            self.indent = c.indent;
            let mut block = Block::new(BlockKind::FencedCode, self.heading + c.indent);
            block.lines.push(strip_columns(&c.text, c.indent_cols));
            self.open = Some(block);
        } else if self.stack.last() == Some(&Ctx::Paragraph) && self.open.is_some() {
            // Fence directly after paragraph text shares the paragraph bullet.
            self.open_mut().lines.push(strip_columns(&c.text, c.indent_cols));
        } else {
            self.flush();
            self.indent = 0;
            self.stack.clear();
            let mut block = Block::new(BlockKind::FencedCode, self.heading);
            block.lines.push(strip_columns(&c.text, c.indent_cols));
            self.open = Some(block);
        }
        self.push_ctx(Ctx::Fenced(sig));
    }

    fn push_quote_line(&mut self, c: &LineClass) {
        let text = self.rewritten(c.text.trim_start().trim_end());
        if self.in_list() {
            if c.indent >= self.indent && self.open.is_some() {
                self.open_mut().lines.push(text);
            } else {
                self.flush();
                self.indent = c.indent;
                let mut block = Block::new(BlockKind::Blockquote, self.heading + c.indent);
                block.lines.push(text);
                self.open = Some(block);
                self.push_ctx(Ctx::Blockquote);
            }
        } else if self.stack.last() == Some(&Ctx::Blockquote) && self.open.is_some() {
            self.open_mut().lines.push(text);
        } else {
            self.flush();
            self.indent = 0;
            self.stack.clear();
            let mut block = Block::new(BlockKind::Blockquote, self.heading);
            block.lines.push(text);
            self.open = Some(block);
            self.push_ctx(Ctx::Blockquote);
        }
    }

    /// Plain text: lazy continuation of the open block, or a new paragraph.
    /// Blockquotes are not continued this way; a non-`>` line closes them.
    fn push_text_line(&mut self, c: &LineClass) {
        let continuable = matches!(
            self.open.as_ref().map(|b| &b.kind),
            Some(BlockKind::Paragraph | BlockKind::ListItem)
        );
        if continuable && c.indent >= self.indent {
            let text = self.rewritten(c.text.trim_start().trim_end());
            self.open_mut().lines.push(text);
            return;
        }
        if c.ordered {
            self.warnings.push(Warning::OrderedList { line: self.line_no });
        }
        self.flush();
        self.indent = 0;
        self.stack.clear();
        let text = self.rewritten(c.text.trim_end());
        let mut block = Block::new(BlockKind::Paragraph, self.heading);
        block.lines.push(text);
        self.open = Some(block);
        self.push_ctx(Ctx::Paragraph);
    }

    fn rewritten(&mut self, line: &str) -> String {
        if rewrite::has_dangling_link(line) {
            self.warnings
                .push(Warning::CrossLineLink { line: self.line_no });
        }
        rewrite::rewrite_line(line)
    }

    fn flush(&mut self) {
        if let Some(block) = self.open.take() {
            self.out.push(block);
        }
    }

    fn open_mut(&mut self) -> &mut Block {
        self.open.as_mut().expect("state implies an open block")
    }

    fn in_list(&self) -> bool {
        self.stack.contains(&Ctx::List)
    }

    fn push_ctx(&mut self, ctx: Ctx) {
        if self.stack.last() != Some(&ctx) {
            self.stack.push(ctx);
        }
    }

    /// Content after a heading leaves the heading-only state.
    fn close_heading_ctx(&mut self) {
        if self.stack.last() == Some(&Ctx::Heading) {
            self.indent = 0;
            self.stack.clear();
        }
    }
}

/// Drop up to `n` leading space columns, keeping deeper relative indentation.
fn strip_columns(line: &str, n: usize) -> String {
    let leading = line.len() - line.trim_start_matches(' ').len();
    line[leading.min(n)..].to_string()
}
