//! Inline syntax rewriting.
//!
//! Three independent, per-line substitutions:
//!
//! - wikilinks: `[[alias|proj.alpha.design#anchor]]` → `[[proj/alpha/design]]`
//! - embeds: `![[proj.alpha.design#start:#end]]` → `{{embed [[proj/alpha/design]]}}`
//! - asset images: `![alt](/assets/img.png)` → `![alt](../assets/img.png)`
//!
//! Text inside inline code spans is never rewritten. A construct whose
//! delimiters are split across lines does not match and is left verbatim;
//! the engine only ever sees one line at a time.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn inline_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`[^`]*`").expect("invalid inline code regex"))
}

fn embed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!\[\[(?:[^\]|#]*\|)?([^\]|#]+)(?:#[^\]]*)?\]\]")
            .expect("invalid embed regex")
    })
}

fn wikilink_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[\[(?:[^\]|#]*\|)?([^\]|#]+)(?:#[^\]]*)?\]\]")
            .expect("invalid wikilink regex")
    })
}

fn asset_image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(!\[[^\]]*\]\()/assets/([^)]*\))").expect("invalid asset image regex")
    })
}

/// Apply all three rewrites to one line, leaving inline code spans untouched.
pub fn rewrite_line(line: &str) -> String {
    map_outside_code(line, |text| {
        // Embeds first so their `[[...]]` interior is already in target form
        // when the wikilink pass runs.
        let text = rewrite_embeds(text);
        let text = rewrite_wikilinks(&text);
        rewrite_asset_images(&text)
    })
}

/// True when the line has an odd `[[` / `]]` balance outside code spans,
/// i.e. a link or embed probably continues on another line.
pub fn has_dangling_link(line: &str) -> bool {
    let mut opens = 0;
    let mut closes = 0;
    let _ = map_outside_code(line, |text| {
        opens += text.matches("[[").count();
        closes += text.matches("]]").count();
        text.to_string()
    });
    opens != closes
}

fn rewrite_embeds(text: &str) -> String {
    embed_re()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{{{{embed [[{}]]}}}}", caps[1].replace('.', "/"))
        })
        .into_owned()
}

fn rewrite_wikilinks(text: &str) -> String {
    wikilink_re()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("[[{}]]", caps[1].replace('.', "/"))
        })
        .into_owned()
}

fn rewrite_asset_images(text: &str) -> String {
    asset_image_re()
        .replace_all(text, "${1}../assets/${2}")
        .into_owned()
}

/// Split the line on inline code spans, apply `f` to the parts outside them
/// and recombine, keeping the code spans byte-identical.
fn map_outside_code<F: FnMut(&str) -> String>(line: &str, mut f: F) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in inline_code_re().find_iter(line) {
        out.push_str(&f(&line[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&f(&line[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("[[proj.alpha.design]]", "[[proj/alpha/design]]")]
    #[case("[[proj.alpha.design#^abc123]]", "[[proj/alpha/design]]")]
    #[case("[[proj.alpha.design#some-heading]]", "[[proj/alpha/design]]")]
    #[case("[[shown text|proj.alpha.design]]", "[[proj/alpha/design]]")]
    #[case("see [[a.b]] and [[c.d]]", "see [[a/b]] and [[c/d]]")]
    fn rewrites_wikilinks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite_line(input), expected);
    }

    #[rstest]
    #[case("![[proj.alpha.design]]", "{{embed [[proj/alpha/design]]}}")]
    #[case("![[proj.alpha.design#start:#end]]", "{{embed [[proj/alpha/design]]}}")]
    #[case("![[alias|proj.alpha.design#^ref]]", "{{embed [[proj/alpha/design]]}}")]
    fn rewrites_embeds(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite_line(input), expected);
    }

    #[test]
    fn rewrites_asset_images() {
        assert_eq!(
            rewrite_line("![diagram](/assets/img.png)"),
            "![diagram](../assets/img.png)"
        );
    }

    #[test]
    fn leaves_inline_code_untouched() {
        assert_eq!(
            rewrite_line("use `[[a.b]]` like [[a.b]]"),
            "use `[[a.b]]` like [[a/b]]"
        );
    }

    #[test]
    fn leaves_unbalanced_brackets_untouched() {
        assert_eq!(rewrite_line("[[proj.alpha"), "[[proj.alpha");
        assert!(has_dangling_link("[[proj.alpha"));
        assert!(!has_dangling_link("[[proj.alpha]]"));
        assert!(!has_dangling_link("`[[proj.alpha`"));
    }

    #[test]
    fn rewriting_is_idempotent() {
        let once = rewrite_line("![[a.b#x]] [[c.d|e.f]] ![p](/assets/p.png)");
        assert_eq!(rewrite_line(&once), once);
    }

    #[test]
    fn non_asset_images_are_left_alone() {
        assert_eq!(
            rewrite_line("![x](https://example.com/a.png)"),
            "![x](https://example.com/a.png)"
        );
    }
}
