//! Cross-document title registry.
//!
//! Logseq requires page titles to be unique, so `title::` promotion needs a
//! read-all-then-decide barrier: collect every document's frontmatter first,
//! check for duplicates, and only then start writing output. Outside this
//! pre-pass documents are independent.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::NoteName;

/// Per-document frontmatter summary produced by [`transform`](crate::transform)
/// (or by a cheap pre-pass scan) and fed to the uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterInfo {
    pub note: NoteName,
    pub title: Option<String>,
}

/// One title claimed by more than one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleConflict {
    pub title: String,
    pub notes: Vec<NoteName>,
}

/// Fatal whole-run error under `TitleMode::Property`: every conflicting
/// identifier is listed so the run can abort before writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate titles found:\n{}", self.describe())]
pub struct DuplicateTitles {
    pub conflicts: Vec<TitleConflict>,
}

impl DuplicateTitles {
    fn describe(&self) -> String {
        self.conflicts
            .iter()
            .map(|c| {
                let notes: Vec<String> = c.notes.iter().map(|n| n.to_string()).collect();
                format!("  * title {:?} in files {}", c.title, notes.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check that no two documents share a frontmatter title. Untitled documents
/// never conflict. Conflicts are reported in title order with notes in
/// first-seen order.
pub fn check_title_uniqueness(infos: &[FrontmatterInfo]) -> Result<(), DuplicateTitles> {
    let mut by_title: BTreeMap<&str, Vec<&NoteName>> = BTreeMap::new();
    for info in infos {
        if let Some(title) = info.title.as_deref() {
            by_title.entry(title).or_default().push(&info.note);
        }
    }

    let conflicts: Vec<TitleConflict> = by_title
        .into_iter()
        .filter(|(_, notes)| notes.len() > 1)
        .map(|(title, notes)| TitleConflict {
            title: title.to_string(),
            notes: notes.into_iter().cloned().collect(),
        })
        .collect();

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(DuplicateTitles { conflicts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(note: &str, title: Option<&str>) -> FrontmatterInfo {
        FrontmatterInfo {
            note: NoteName::new(note),
            title: title.map(String::from),
        }
    }

    #[test]
    fn unique_titles_pass() {
        let infos = vec![info("a", Some("One")), info("b", Some("Two")), info("c", None)];
        assert!(check_title_uniqueness(&infos).is_ok());
    }

    #[test]
    fn untitled_notes_never_conflict() {
        let infos = vec![info("a", None), info("b", None)];
        assert!(check_title_uniqueness(&infos).is_ok());
    }

    #[test]
    fn duplicates_list_every_conflicting_note() {
        let infos = vec![
            info("proj.one", Some("Notes")),
            info("proj.two", Some("Notes")),
            info("other", Some("Unique")),
        ];
        let err = check_title_uniqueness(&infos).unwrap_err();
        assert_eq!(err.conflicts.len(), 1);
        assert_eq!(err.conflicts[0].title, "Notes");
        assert_eq!(
            err.conflicts[0].notes,
            vec![NoteName::new("proj.one"), NoteName::new("proj.two")]
        );
        let message = err.to_string();
        assert!(message.contains("proj.one.md"));
        assert!(message.contains("proj.two.md"));
    }
}
