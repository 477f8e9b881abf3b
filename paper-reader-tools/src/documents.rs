use crate::error::ToolError;
use crate::extraction::TextExtractor;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, warn};

pub const FILE_NOT_FOUND_TEXT: &str = "File not found.";

/// A document whose text has been extracted.
#[derive(Debug, Clone)]
pub struct Paper {
    pub path: PathBuf,
    pub text: String,
    pub pages: usize,
}

/// Outcome of looking a path up on disk. A missing file is a normal outcome.
#[derive(Debug, Clone)]
pub enum Lookup {
    Missing(PathBuf),
    Found(Paper),
}

/// Resolves path arguments and runs the extractor over the file contents.
#[derive(Clone)]
pub struct DocumentLoader {
    extractor: Arc<dyn TextExtractor>,
}

impl DocumentLoader {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    /// Absolute, lexically normalized form of a path argument. Relative paths
    /// resolve against the working directory; `.` and `..` are folded without
    /// touching the filesystem.
    pub fn resolve(raw: &str) -> Result<PathBuf, ToolError> {
        if raw.is_empty() {
            return Err(ToolError::ValidationError("Path must not be empty".into()));
        }
        let absolute = std::path::absolute(Path::new(raw))?;
        Ok(normalize(&absolute))
    }

    pub async fn load(&self, raw: &str) -> Result<Lookup, ToolError> {
        let path = Self::resolve(raw)?;

        // Anything the OS refuses to stat (ENOENT, ENOTDIR, EACCES) counts as missing
        if let Err(e) = fs::metadata(&path).await {
            warn!("File not found: {} ({})", path.display(), e);
            return Ok(Lookup::Missing(path));
        }

        let bytes = fs::read(&path).await?;
        debug!(bytes = bytes.len(), "Read {}", path.display());

        let extractor = self.extractor.clone();
        let extracted = tokio::task::spawn_blocking(move || extractor.extract_text(&bytes))
            .await
            .map_err(|_| ToolError::Internal)??;

        Ok(Lookup::Found(Paper {
            path,
            text: extracted.text,
            pages: extracted.pages,
        }))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // popping at the root is a no-op, so `/..` stays `/`
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_parent_and_current() {
        assert_eq!(
            normalize(Path::new("/data/nosuchdir/../papers/./ok.pdf")),
            PathBuf::from("/data/papers/ok.pdf")
        );
    }

    #[test]
    fn test_normalize_stops_at_root() {
        assert_eq!(normalize(Path::new("/../../ok.pdf")), PathBuf::from("/ok.pdf"));
    }

    #[test]
    fn test_resolve_normalizes() {
        assert_eq!(
            DocumentLoader::resolve("/tmp/a/../b/./c.pdf").unwrap(),
            PathBuf::from("/tmp/b/c.pdf")
        );
    }
}
