use serde::{Deserialize, Serialize};

/// What to do with a frontmatter `title` key.
///
/// `Alias` and `Property` are mutually exclusive at the CLI boundary;
/// `Property` additionally requires batch-wide unique titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleMode {
    /// Leave the title where it is (inside the frontmatter code block, if kept).
    #[default]
    None,
    /// Promote the title to an `alias::` property line.
    Alias,
    /// Promote the title to a `title::` property line.
    Property,
}

/// Empty-line policy applied by the outline emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyLines {
    /// Keep every blank line as an empty bullet.
    None,
    /// Delete every blank line.
    All,
    /// Delete blank lines after headings and at the start of the body,
    /// collapse the rest to at most one.
    #[default]
    Trim,
}

/// Conversion options for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Drop frontmatter entirely instead of keeping it as a code block.
    pub remove_frontmatter: bool,
    pub title_mode: TitleMode,
    /// Indent bullets with four spaces instead of one tab.
    pub four_space_indent: bool,
    pub empty_lines: EmptyLines,
}

impl Options {
    /// One level of outline indentation.
    pub fn indent_unit(&self) -> &'static str {
        if self.four_space_indent { "    " } else { "\t" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behavior() {
        let options = Options::default();
        assert!(!options.remove_frontmatter);
        assert_eq!(options.title_mode, TitleMode::None);
        assert_eq!(options.empty_lines, EmptyLines::Trim);
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn four_space_indent_switches_unit() {
        let options = Options {
            four_space_indent: true,
            ..Options::default()
        };
        assert_eq!(options.indent_unit(), "    ");
    }
}
