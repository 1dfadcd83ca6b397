use relative_path::RelativePath;

/// A Dendron note identifier: the dot-separated file stem encoding the note's
/// position in the hierarchy (e.g. `proj.alpha.design`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteName {
    stem: String,
}

impl NoteName {
    pub fn new(stem: impl Into<String>) -> Self {
        Self { stem: stem.into() }
    }

    /// Create from a vault-relative path, stripping the `.md` extension.
    /// Returns `None` for paths without a file name.
    pub fn from_relative_path(path: &RelativePath) -> Option<Self> {
        path.file_name()
            .map(|name| Self::new(name.strip_suffix(".md").unwrap_or(name)))
    }

    /// The dot-separated stem as it appears in the vault.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The Logseq page path: hierarchy separator changes from `.` to `/`.
    pub fn page_path(&self) -> String {
        self.stem.replace('.', "/")
    }

    /// The renamed output file: dot segments become triple underscores.
    pub fn output_file_name(&self) -> String {
        format!("{}.md", self.stem.replace('.', "___"))
    }
}

impl From<&str> for NoteName {
    fn from(stem: &str) -> Self {
        Self::new(stem)
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.md", self.stem)
    }
}

/// A source document: note identifier plus raw text. Immutable input to the
/// transformation engine.
#[derive(Debug, Clone)]
pub struct SourceNote {
    pub name: NoteName,
    pub text: String,
}

impl SourceNote {
    pub fn new(name: impl Into<NoteName>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
