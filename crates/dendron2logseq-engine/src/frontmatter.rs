//! Frontmatter detection and title extraction.
//!
//! A frontmatter block is a leading `---` line, interior `key: value` lines
//! kept as opaque text, and a closing `---` line. Nested YAML is not parsed;
//! only `title` is interpreted. A block that never closes is treated as
//! absent and the whole document becomes body text.

use crate::warning::Warning;

const DELIMITER: &str = "---";
const TITLE_KEY: &str = "title:";

/// A parsed frontmatter block: interior lines verbatim plus the title, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    lines: Vec<String>,
    title: Option<String>,
    title_line: Option<usize>,
}

impl Frontmatter {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Interior lines for the kept-as-code-block rendering. When the title has
    /// been promoted to a property it must not be duplicated inside the block.
    pub fn block_lines(&self, exclude_title: bool) -> impl Iterator<Item = &str> {
        self.lines.iter().enumerate().filter_map(move |(i, line)| {
            if exclude_title && Some(i) == self.title_line {
                None
            } else {
                Some(line.as_str())
            }
        })
    }
}

/// Result of peeling frontmatter off a document's lines.
#[derive(Debug)]
pub struct FrontmatterSplit {
    pub frontmatter: Option<Frontmatter>,
    /// Index of the first body line.
    pub body_start: usize,
    pub warning: Option<Warning>,
}

/// Decide whether `lines` opens with a frontmatter block and locate its end.
pub fn split(lines: &[&str]) -> FrontmatterSplit {
    if lines.first().is_none_or(|l| !opens_block(l)) {
        return FrontmatterSplit {
            frontmatter: None,
            body_start: 0,
            warning: None,
        };
    }

    let Some(close) = lines[1..].iter().position(|l| opens_block(l)) else {
        // Unterminated: recoverable, every line is body.
        return FrontmatterSplit {
            frontmatter: None,
            body_start: 0,
            warning: Some(Warning::UnterminatedFrontmatter { line: 1 }),
        };
    };
    let close = close + 1;

    let interior: Vec<String> = lines[1..close].iter().map(|l| l.to_string()).collect();
    let title_line = interior.iter().position(|l| l.starts_with(TITLE_KEY));
    let title = title_line.map(|i| parse_title_value(&interior[i][TITLE_KEY.len()..]));

    FrontmatterSplit {
        frontmatter: Some(Frontmatter {
            lines: interior,
            title,
            title_line,
        }),
        body_start: close + 1,
        warning: None,
    }
}

/// Extract just the title, for the cross-document pre-pass.
pub fn scan_title(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    split(&lines).frontmatter.and_then(|fm| fm.title)
}

fn opens_block(line: &str) -> bool {
    line.trim_end().starts_with(DELIMITER)
}

fn parse_title_value(value: &str) -> String {
    let value = value.trim();
    let mut chars = value.chars();
    if let (Some(first), Some(last)) = (chars.next(), chars.next_back())
        && (first == '"' || first == '\'')
        && first == last
    {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}
