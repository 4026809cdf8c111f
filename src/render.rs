//! Surge rule-file rendering and output.

use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::config::RuleFileMeta;
use crate::Result;

/// Format of the `# UPDATED:` header value.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the rule file text for an already sorted list of rules.
///
/// The output ends with a newline; both header counts equal `rules.len()`.
pub fn render_rule_file(rules: &[String], meta: &RuleFileMeta, updated: NaiveDateTime) -> String {
    let total = rules.len();
    let mut out = String::with_capacity(256 + rules.len() * 32);

    // Writing into a String cannot fail
    let _ = writeln!(out, "# NAME: {}", meta.name);
    let _ = writeln!(out, "# AUTHOR: {}", meta.author);
    let _ = writeln!(out, "# REPO: {}", meta.repo);
    let _ = writeln!(out, "# UPDATED: {}", updated.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "# DOMAIN-SUFFIX: {}", total);
    let _ = writeln!(out, "# TOTAL: {}", total);

    for rule in rules {
        let _ = writeln!(out, "DOMAIN-SUFFIX,{}", rule);
    }

    out
}

/// Replace `path` with `content`.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed over the destination, so readers never observe a truncated file.
/// Missing parent directories are created.
pub fn write_rule_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    if let Some(permissions) = output_permissions(path) {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;

    log::debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Permissions the written file should carry: those of the file being
/// replaced, or `0644` for a new file.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
