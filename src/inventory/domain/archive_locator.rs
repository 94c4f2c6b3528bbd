use std::fmt;
use std::path::{Path, PathBuf};

/// Separator between an archive and an entry nested inside it.
pub const NESTED_SEPARATOR: &str = "!/";

const ARCHIVE_EXTENSIONS: [&str; 4] = [".jar", ".war", ".ear", ".zip"];

/// Returns true if the name follows the archive extension convention.
///
/// A trailing `!/` (as reported by nested code sources) is ignored.
pub fn is_archive_name(name: &str) -> bool {
    let name = name.strip_suffix(NESTED_SEPARATOR).unwrap_or(name);
    let lower = name.to_ascii_lowercase();
    ARCHIVE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// ArchiveLocator value object: an archive on disk plus a chain of nested entries
///
/// `/srv/app.war!/WEB-INF/lib/lib-a.jar` is the file `/srv/app.war` with a
/// single nested entry `WEB-INF/lib/lib-a.jar`. The chain may be arbitrarily
/// deep.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveLocator {
    path: PathBuf,
    entries: Vec<String>,
}

impl ArchiveLocator {
    /// Parses an origin location into a locator.
    ///
    /// Accepts plain paths, `file:` URLs and `jar:file:` URLs. URL forms are
    /// percent-decoded. Returns `None` when the innermost element is not an
    /// archive (class directories, synthetic origins, ...).
    pub fn parse(origin: &str) -> Option<Self> {
        let trimmed = origin.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut rest = trimmed;
        while let Some(stripped) = rest.strip_suffix(NESTED_SEPARATOR) {
            rest = stripped;
        }

        let mut is_url = false;
        if let Some(stripped) = rest.strip_prefix("jar:") {
            rest = stripped;
            is_url = true;
        }
        if let Some(stripped) = rest.strip_prefix("file://") {
            rest = stripped;
            is_url = true;
        } else if let Some(stripped) = rest.strip_prefix("file:") {
            rest = stripped;
            is_url = true;
        }

        let decoded = if is_url {
            urlencoding::decode(rest)
                .map(|d| d.into_owned())
                .unwrap_or_else(|_| rest.to_string())
        } else {
            rest.to_string()
        };
        let normalized = strip_drive_prefix(&decoded.replace('\\', "/")).to_string();

        let mut parts = normalized
            .split(NESTED_SEPARATOR)
            .map(|p| p.trim_start_matches('/'))
            .filter(|p| !p.is_empty());

        let head = parts.next()?;
        let path = if normalized.starts_with('/') {
            PathBuf::from(format!("/{}", head))
        } else {
            PathBuf::from(head)
        };
        let entries: Vec<String> = parts.map(str::to_string).collect();

        let innermost = entries
            .last()
            .cloned()
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        if !is_archive_name(&innermost) {
            return None;
        }

        Some(Self { path, entries })
    }

    /// The outermost archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Nested entry names, outermost first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_nested(&self) -> bool {
        !self.entries.is_empty()
    }

    /// File name of the innermost archive (`lib-a-1.0.jar`).
    pub fn file_name(&self) -> String {
        let innermost = match self.entries.last() {
            Some(entry) => entry.as_str(),
            None => return self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        innermost
            .rsplit('/')
            .next()
            .unwrap_or(innermost)
            .to_string()
    }
}

impl fmt::Display for ArchiveLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        for entry in &self.entries {
            write!(f, "{}{}", NESTED_SEPARATOR, entry)?;
        }
        Ok(())
    }
}

/// `file:/C:/libs/a.jar` decodes to `/C:/libs/a.jar`; drop the leading slash.
fn strip_drive_prefix(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':'
    {
        &path[1..]
    } else {
        path
    }
}
