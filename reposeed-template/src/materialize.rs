//! Template workspace materialization.
//!
//! # Steps
//!
//! 1. Copy the template tree (hidden files included) into the scratch dir.
//! 2. Strip VCS metadata (`.git/`) from the copy — idempotent if absent.
//! 3. Substitute `{{ .name }}` / `{{ .go_version }}` in every UTF-8 file.
//! 4. Mark every regular file under `tools/` executable (Unix).
//!
//! Substitution is literal text replacement, not a template engine; unknown
//! `{{ ... }}` markers pass through byte-identical.

use std::path::{Path, PathBuf};

use crate::error::{io_err, TemplateError};

/// Subdirectory whose files are marked executable after materialization.
pub const TOOLS_DIR: &str = "tools";

/// VCS metadata directory stripped from the copy and excluded from
/// substitution.
const VCS_DIR: &str = ".git";

const NAME_TOKEN: &str = ".name";
const VERSION_TOKEN: &str = ".go_version";

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace every `{{ .name }}` and `{{ .go_version }}` occurrence.
///
/// Whitespace inside the braces is tolerated; both tokens follow the same
/// exact-match rule. Input without placeholders comes back byte-identical.
pub fn substitute(input: &str, name: &str, version_tag: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let inner = &after[..close];
                match inner.trim() {
                    NAME_TOKEN => {
                        out.push_str(name);
                        rest = &after[close + 2..];
                    }
                    VERSION_TOKEN => {
                        out.push_str(version_tag);
                        rest = &after[close + 2..];
                    }
                    // Unknown marker: emit the opener, but rescan from any
                    // nested opener so a real token after a stray `{{` is
                    // still replaced.
                    _ => match inner.find("{{") {
                        Some(nested) => {
                            out.push_str("{{");
                            out.push_str(&inner[..nested]);
                            rest = &after[nested..];
                        }
                        None => {
                            out.push_str("{{");
                            out.push_str(inner);
                            out.push_str("}}");
                            rest = &after[close + 2..];
                        }
                    },
                }
            }
            // Unterminated opener: nothing left to match.
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Tree walking
// ---------------------------------------------------------------------------

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), TemplateError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            if path.file_name().and_then(|n| n.to_str()) == Some(VCS_DIR) {
                continue;
            }
            collect_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<(), TemplateError> {
    std::fs::create_dir_all(dst).map_err(|e| io_err(dst, e))?;
    let entries = std::fs::read_dir(src).map_err(|e| io_err(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(src, e))?;
        let path = entry.path();
        let target = dst.join(entry.file_name());
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            copy_tree(&path, &target)?;
        } else if meta.is_file() {
            std::fs::copy(&path, &target).map_err(|e| io_err(&path, e))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Materialization
// ---------------------------------------------------------------------------

/// Materialize `template_dir` into `scratch` with resolved values.
///
/// Fails with [`TemplateError::TemplateMissing`] if `template_dir` is not a
/// directory. The scratch directory is created if needed and is never
/// cleaned up here.
pub fn materialize(
    template_dir: &Path,
    scratch: &Path,
    name: &str,
    version_tag: &str,
) -> Result<(), TemplateError> {
    if !template_dir.is_dir() {
        return Err(TemplateError::TemplateMissing {
            path: template_dir.to_path_buf(),
        });
    }

    copy_tree(template_dir, scratch)?;
    strip_vcs_metadata(scratch)?;
    substitute_tree(scratch, name, version_tag)?;
    mark_tools_executable(&scratch.join(TOOLS_DIR))?;

    tracing::info!("materialized template into {}", scratch.display());
    Ok(())
}

/// Remove `.git/` from the copied tree. Idempotent if absent.
fn strip_vcs_metadata(scratch: &Path) -> Result<(), TemplateError> {
    let vcs = scratch.join(VCS_DIR);
    if vcs.exists() {
        std::fs::remove_dir_all(&vcs).map_err(|e| io_err(&vcs, e))?;
        tracing::debug!("stripped VCS metadata at {}", vcs.display());
    }
    Ok(())
}

/// Substitute placeholders in every regular UTF-8 file under `scratch`.
///
/// Files that are not valid UTF-8 are copied verbatim and skipped here;
/// unchanged files are not rewritten.
fn substitute_tree(scratch: &Path, name: &str, version_tag: &str) -> Result<(), TemplateError> {
    let mut files = Vec::new();
    collect_files(scratch, &mut files)?;
    for path in files {
        let bytes = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                tracing::debug!("skipping non-UTF-8 file: {}", path.display());
                continue;
            }
        };
        let replaced = substitute(&text, name, version_tag);
        if replaced != text {
            std::fs::write(&path, replaced).map_err(|e| io_err(&path, e))?;
            tracing::debug!("substituted placeholders in {}", path.display());
        }
    }
    Ok(())
}

/// Mark every regular file under `dir` executable. Missing `dir` is fine.
#[cfg(unix)]
fn mark_tools_executable(dir: &Path) -> Result<(), TemplateError> {
    use std::os::unix::fs::PermissionsExt;

    if !dir.is_dir() {
        return Ok(());
    }
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    for path in files {
        let meta = std::fs::metadata(&path).map_err(|e| io_err(&path, e))?;
        let mut perms = meta.permissions();
        perms.set_mode(perms.mode() | 0o111);
        std::fs::set_permissions(&path, perms).map_err(|e| io_err(&path, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn mark_tools_executable(_dir: &Path) -> Result<(), TemplateError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
