//! Vault scanning and output writing.
//!
//! Thin I/O wrappers around the transformation engine's single-document
//! contract: enumerate a flat Dendron vault, read notes, write renamed Logseq
//! pages, and copy the `assets` directory.

use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::{NoteName, SourceNote};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vault directory: {0}")]
    InvalidVaultDir(String),
}

/// One markdown note found in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEntry {
    pub name: NoteName,
    /// Path of the source file relative to the vault root.
    pub relative_path: RelativePathBuf,
}

/// Everything a scan found under the vault root.
#[derive(Debug, Default)]
pub struct Vault {
    pub notes: Vec<VaultEntry>,
    pub assets_dir: Option<PathBuf>,
    /// Dotfiles and `.yml` files, ignored by design.
    pub ignored: Vec<PathBuf>,
    /// Anything else the converter does not handle.
    pub unhandled: Vec<PathBuf>,
}

pub fn validate_vault_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidVaultDir(
            "directory does not exist".to_string(),
        ));
    }
    Ok(())
}

/// Enumerate the vault root. Dendron vaults are flat: only direct children are
/// considered. Notes come back sorted by name for a deterministic run order.
pub fn scan_vault(vault_root: &Path) -> Result<Vault, IoError> {
    validate_vault_dir(vault_root)?;

    let mut vault = Vault::default();
    for entry in fs::read_dir(vault_root)? {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            vault.unhandled.push(path);
            continue;
        };

        if file_name.starts_with('.') || file_name.ends_with(".yml") {
            vault.ignored.push(path);
        } else if path.is_dir() && file_name == "assets" {
            vault.assets_dir = Some(path);
        } else if let Some(stem) = file_name.strip_suffix(".md") {
            vault.notes.push(VaultEntry {
                name: NoteName::new(stem),
                relative_path: RelativePathBuf::from(file_name),
            });
        } else {
            vault.unhandled.push(path);
        }
    }
    vault.notes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(vault)
}

/// Read one note's raw text.
pub fn read_note(entry: &VaultEntry, vault_root: &Path) -> Result<SourceNote, IoError> {
    let absolute = entry.relative_path.to_path(vault_root);
    if !absolute.exists() {
        return Err(IoError::NotFound(absolute));
    }
    let text = fs::read_to_string(&absolute)?;
    Ok(SourceNote::new(entry.name.clone(), text))
}

/// Write one converted page under the destination root, using the renamed
/// (`.` → `___`) file name. Returns the path written.
pub fn write_page(output_root: &Path, name: &NoteName, text: &str) -> Result<PathBuf, IoError> {
    let path = RelativePath::new(&name.output_file_name()).to_path(output_root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, text)?;
    Ok(path)
}

/// Recursively copy the vault's assets directory to `<output_root>/assets`.
/// Existing files are overwritten; returns the number of files copied.
pub fn copy_assets(assets_dir: &Path, output_root: &Path) -> Result<usize, IoError> {
    let dest = output_root.join("assets");
    copy_dir_recursive(assets_dir, &dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            copied += copy_dir_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
