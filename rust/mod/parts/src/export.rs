//! Static export — renders the index and one page per catalog entry to disk.
//!
//! ```text
//! out-dir/
//! ├── index.html
//! └── parts/
//!     ├── p1/index.html
//!     └── p2/index.html
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use partyard_catalog::NotFound;
use thiserror::Error;
use tracing::{debug, info};

use crate::render;
use crate::service::PartsService;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The id cannot be used as a single path segment.
    #[error("part id '{0}' cannot be used as a file name")]
    UnsafeId(String),

    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    NotFound(#[from] NotFound),
}

/// Write the whole site under `out_dir`. Returns the number of part pages written.
///
/// Every id is checked before anything is written, so a bad id leaves the
/// output directory untouched.
pub fn export_site(service: &PartsService, out_dir: &Path) -> Result<usize, ExportError> {
    let entries = service.catalog().enumerate_ids();
    if let Some(bad) = entries.iter().find(|e| !is_safe_segment(&e.id)) {
        return Err(ExportError::UnsafeId(bad.id.clone()));
    }

    let index = render::index_page(service.catalog().parts(), service.site_title());
    write_file(&out_dir.join("index.html"), &index)?;

    let mut written = HashSet::new();
    for entry in &entries {
        // Later duplicates resolve to the same part and the same file.
        if !written.insert(entry.id.as_str()) {
            continue;
        }
        let part = service.catalog().resolve(&entry.id)?;
        let path = out_dir.join("parts").join(&entry.id).join("index.html");
        write_file(&path, &render::part_page(part, service.site_title()))?;
        debug!("export: wrote {:?}", path);
    }
    let count = written.len();

    info!("export: {} part pages written to {:?}", count, out_dir);
    Ok(count)
}

fn is_safe_segment(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use partyard_catalog::Catalog;

    use super::*;
    use crate::service::tests::{sample, service};

    #[test]
    fn writes_index_and_one_page_per_part() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");

        let count = export_site(&service(), &out).unwrap();
        assert_eq!(count, 2);

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("/parts/p1"));
        let page = fs::read_to_string(out.join("parts/p2/index.html")).unwrap();
        assert!(page.contains("<h1>Transfer case</h1>"));
    }

    #[test]
    fn empty_catalog_writes_only_index() {
        let dir = tempfile::tempdir().unwrap();
        let svc = PartsService::new(Catalog::default(), "Partyard");

        assert_eq!(export_site(&svc, dir.path()).unwrap(), 0);
        assert!(dir.path().join("index.html").is_file());
        assert!(!dir.path().join("parts").exists());
    }

    #[test]
    fn rejects_path_like_ids_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let svc = PartsService::new(
            Catalog::new(vec![sample("ok", "Fine"), sample("../escape", "Bad")]),
            "Partyard",
        );

        let err = export_site(&svc, dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::UnsafeId(ref id) if id == "../escape"));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn duplicate_ids_are_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let svc = PartsService::new(
            Catalog::new(vec![
                sample("dup", "First"),
                sample("dup", "Second"),
                sample("x", "Other"),
            ]),
            "Partyard",
        );

        assert_eq!(export_site(&svc, dir.path()).unwrap(), 2);
        let page = fs::read_to_string(dir.path().join("parts/dup/index.html")).unwrap();
        assert!(page.contains("<h1>First</h1>"));
    }

    #[test]
    fn safe_segment_rules() {
        assert!(is_safe_segment("p-100_a.b"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment("a\\b"));
    }
}
