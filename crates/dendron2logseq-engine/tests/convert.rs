//! End-to-end transformation tests: raw Dendron note text in, Logseq page
//! text out.

use dendron2logseq_engine::{
    EmptyLines, Options, SourceNote, TitleMode, check_title_uniqueness, transform,
};
use pretty_assertions::assert_eq;

fn convert(text: &str, options: &Options) -> String {
    transform(&SourceNote::new("test.note", text), options).text
}

fn converted_default(text: &str) -> String {
    convert(text, &Options::default())
}

#[test]
fn full_document_with_frontmatter_headings_and_lists() {
    let input = "\
---
id: x1
title: Design Notes
---

# Overview

Some intro with [[proj.alpha.design#^abc123]] and ![diagram](/assets/img.png).

## Details

- first
    - nested ![[proj.alpha.design#start:#end]]
";
    let expected = "\
- ```
  ---
  id: x1
  title: Design Notes
  ---
  ```
- # Overview
\t- Some intro with [[proj/alpha/design]] and ![diagram](../assets/img.png).
\t-
\t- ## Details
\t\t- first
\t\t\t- nested {{embed [[proj/alpha/design]]}}
";
    assert_eq!(converted_default(input), expected);
}

#[test]
fn hard_line_break_stays_in_one_bullet() {
    assert_eq!(
        converted_default("line one  \nline two\n"),
        "- line one\n  line two\n"
    );
}

#[test]
fn fence_nested_two_list_levels_keeps_alignment() {
    let input = "\
- a
    - b
      ```rust
      let x = 1;
      ```
";
    let expected = "\
- a
\t- b
\t  ```rust
\t  let x = 1;
\t  ```
";
    assert_eq!(converted_default(input), expected);
}

#[test]
fn four_space_indent_option_changes_the_unit() {
    let options = Options {
        four_space_indent: true,
        ..Options::default()
    };
    assert_eq!(
        convert("# h\ntext\n", &options),
        "- # h\n    - text\n"
    );
}

#[test]
fn title_as_alias_promotes_and_deduplicates() {
    let input = "---\nid: x1\ntitle: Design Notes\n---\nbody\n";
    let options = Options {
        title_mode: TitleMode::Alias,
        ..Options::default()
    };
    let expected = "\
alias:: Design Notes
- ```
  ---
  id: x1
  ---
  ```
- body
";
    assert_eq!(convert(input, &options), expected);
}

#[test]
fn title_as_property_promotes_to_title_line() {
    let input = "---\ntitle: Design Notes\n---\nbody\n";
    let options = Options {
        title_mode: TitleMode::Property,
        remove_frontmatter: true,
        ..Options::default()
    };
    assert_eq!(convert(input, &options), "title:: Design Notes\n- body\n");
}

#[test]
fn remove_frontmatter_drops_the_block() {
    let input = "---\nid: x1\ntitle: T\n---\nbody\n";
    let options = Options {
        remove_frontmatter: true,
        ..Options::default()
    };
    assert_eq!(convert(input, &options), "- body\n");
}

#[test]
fn kept_frontmatter_without_promotion_keeps_title_inside() {
    let input = "---\ntitle: T\n---\nbody\n";
    let out = converted_default(input);
    assert!(out.contains("  title: T\n"));
    assert!(!out.contains("alias::"));
}

#[test]
fn empty_lines_none_preserves_the_blank_count() {
    let input = "a\n\n\nb\n\nc\n";
    let options = Options {
        empty_lines: EmptyLines::None,
        ..Options::default()
    };
    let out = convert(input, &options);
    let blanks = out.lines().filter(|l| l.trim() == "-").count();
    assert_eq!(blanks, 3);
}

#[test]
fn empty_lines_all_removes_every_blank() {
    let input = "a\n\n\nb\n\nc\n";
    let options = Options {
        empty_lines: EmptyLines::All,
        ..Options::default()
    };
    assert_eq!(convert(input, &options), "- a\n- b\n- c\n");
}

#[test]
fn empty_lines_trim_never_emits_two_consecutive_blanks() {
    let input = "# h\n\n\na\n\n\n\nb\n";
    let out = converted_default(input);
    assert_eq!(out, "- # h\n\t- a\n\t-\n\t- b\n");
}

#[test]
fn heading_children_are_strictly_deeper() {
    let input = "# one\npara\n- item\n## two\npara\n# back\npara\n";
    let note = SourceNote::new("levels", input);
    let output = transform(&note, &Options::default());
    // Reconstruct levels from the emitted indentation.
    let levels: Vec<(usize, bool)> = output
        .text
        .lines()
        .map(|l| {
            let tabs = l.chars().take_while(|&c| c == '\t').count();
            (tabs, l.trim_start().starts_with("- #"))
        })
        .collect();
    let mut heading_level = None;
    for (level, is_heading) in levels {
        if is_heading {
            heading_level = Some(level);
        } else if let Some(h) = heading_level {
            assert!(level >= h + 1, "child at {level} under heading at {h}");
        }
    }
}

#[test]
fn duplicate_titles_are_a_whole_run_error() {
    let options = Options {
        title_mode: TitleMode::Property,
        ..Options::default()
    };
    let a = transform(
        &SourceNote::new("proj.one", "---\ntitle: Notes\n---\n"),
        &options,
    );
    let b = transform(
        &SourceNote::new("proj.two", "---\ntitle: Notes\n---\n"),
        &options,
    );
    let err = check_title_uniqueness(&[a.info, b.info]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("proj.one.md"));
    assert!(message.contains("proj.two.md"));
}

#[test]
fn unterminated_frontmatter_becomes_body() {
    let out = converted_default("---\ntitle: oops\nbody line\n");
    // The would-be delimiter is a thematic break in the body; the two
    // contiguous text lines collapse into one bullet.
    assert_eq!(out, "- ---\n- title: oops\n  body line\n");
}

#[test]
fn indented_code_is_normalized_to_a_fence() {
    let input = "# h\n\n    fn main() {}\n\nafter\n";
    let expected = "\
- # h
\t- ```
\t  fn main() {}
\t  ```
\t-
\t- after
";
    assert_eq!(converted_default(input), expected);
}

#[test]
fn blockquote_collapses_to_one_bullet() {
    let input = "> first\n> second\n\ntext\n";
    assert_eq!(
        converted_default(input),
        "- > first\n  > second\n-\n- text\n"
    );
}

#[test]
fn markers_are_normalized_to_dashes() {
    assert_eq!(converted_default("* star\n+ plus\n"), "- star\n- plus\n");
}
