//! Version-scoped changelog extraction.
//!
//! A changelog is a Markdown document where each released version gets a
//! level-2 heading (`## 1.2.3`). Sections are located by literal substring
//! search, not by parsing the document into entries.

use crate::error::Error;
use crate::version;

/// Extract the release notes for one version from a changelog document.
///
/// The section starts at the heading `## <version>` and ends at the next
/// line beginning `## `, or at the end of the document. The returned body
/// is trimmed of leading and trailing whitespace.
pub fn extract<'a>(document: &'a str, requested: &str) -> Result<&'a str, Error> {
    let version = version::normalize(requested);
    version::validate(&version)?;

    let marker = format!("## {version}");
    let heading = document
        .find(&marker)
        .ok_or_else(|| Error::VersionNotFound(version.clone()))?;

    // Body starts on the line after the heading. A heading with no line
    // terminator has nothing below it.
    let body_start = match document[heading..].find('\n') {
        Some(offset) => heading + offset + 1,
        None => document.len(),
    };

    let body_end = document[body_start..]
        .find("\n## ")
        .map(|offset| body_start + offset)
        .unwrap_or(document.len());

    Ok(document[body_start..body_end].trim())
}

/// List every version heading in the document, in order of appearance.
pub fn list_versions(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(str::trim)
        .collect()
}
