use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::part::Part;
use crate::store::Catalog;

/// CatalogLoader builds a [`Catalog`] from a data directory:
///
/// ```text
/// data-dir/
/// ├── parts.yaml             → sequence of parts, loaded first, in file order
/// └── parts/
///     ├── 0001-alternator.yaml  → one part per file, appended by file name
///     └── 0002-radiator.yaml
/// ```
///
/// Both sources are optional. A missing data directory yields an empty catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(data_dir: &Path) -> Result<Catalog, CatalogError> {
        if !data_dir.is_dir() {
            debug!("CatalogLoader: data dir {:?} does not exist, skipping", data_dir);
            return Ok(Catalog::default());
        }

        let mut parts = Vec::new();

        for name in ["parts.yaml", "parts.yml"] {
            let path = data_dir.join(name);
            if path.is_file() {
                parts.extend(Self::load_sequence(&path)?);
            }
        }

        let parts_dir = data_dir.join("parts");
        if parts_dir.is_dir() {
            parts.extend(Self::load_directory(&parts_dir)?);
        }

        for part in &parts {
            part.check().map_err(|reason| CatalogError::Invalid {
                id: part.id.clone(),
                reason,
            })?;
        }
        Self::warn_duplicates(&parts);

        info!("CatalogLoader: loaded {} parts from {:?}", parts.len(), data_dir);
        Ok(Catalog::new(parts))
    }

    /// Load a YAML file holding a sequence of parts.
    fn load_sequence(path: &Path) -> Result<Vec<Part>, CatalogError> {
        let data = Self::read(path)?;
        let parts: Vec<Part> = serde_yml::from_str(&data).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!("CatalogLoader: {} parts from {:?}", parts.len(), path);
        Ok(parts)
    }

    /// Load every YAML file in `dir`, one part per file, sorted by file name.
    fn load_directory(dir: &Path) -> Result<Vec<Part>, CatalogError> {
        let entries = fs::read_dir(dir).map_err(|e| CatalogError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() && Self::is_yaml(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut parts = Vec::with_capacity(files.len());
        for path in files {
            let data = Self::read(&path)?;
            let part: Part = serde_yml::from_str(&data).map_err(|e| CatalogError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
            debug!("CatalogLoader: part '{}' from {:?}", part.id, path);
            parts.push(part);
        }
        Ok(parts)
    }

    fn read(path: &Path) -> Result<String, CatalogError> {
        fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    // Duplicates stay in the catalog; lookups return the first one.
    fn warn_duplicates(parts: &[Part]) {
        let mut seen = HashSet::new();
        for part in parts {
            if !seen.insert(part.id.as_str()) {
                warn!(
                    "CatalogLoader: duplicate part id '{}', later entries are unreachable",
                    part.id
                );
            }
        }
    }

    fn is_yaml(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_yaml(id: &str, price: &str) -> String {
        format!(
            r#"id: {id}
name: Part {id}
price: {price}
category: body
condition: used
model: Civic
year: "2001"
mileage: 120000
shortDescription: short {id}
fullDescription: full {id}
tags: [door, left]
image: /images/{id}.jpg
"#
        )
    }

    #[test]
    fn missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogLoader::load(&dir.path().join("nope")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn loads_sequence_then_directory() {
        let dir = tempfile::tempdir().unwrap();
        let seq = format!(
            "- {}\n- {}",
            part_yaml("s1", "10").replace('\n', "\n  "),
            part_yaml("s2", "20").replace('\n', "\n  "),
        );
        fs::write(dir.path().join("parts.yaml"), seq).unwrap();

        let parts_dir = dir.path().join("parts");
        fs::create_dir(&parts_dir).unwrap();
        fs::write(parts_dir.join("b.yaml"), part_yaml("fb", "2")).unwrap();
        fs::write(parts_dir.join("a.yml"), part_yaml("fa", "1")).unwrap();
        fs::write(parts_dir.join("notes.txt"), "ignored").unwrap();

        let catalog = CatalogLoader::load(dir.path()).unwrap();
        let ids: Vec<String> = catalog.enumerate_ids().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["s1", "s2", "fa", "fb"]);

        let part = catalog.resolve("fb").unwrap();
        assert_eq!(part.tags, vec!["door", "left"]);
        assert_eq!(part.year, "2001");
        assert_eq!(part.mileage, 120_000);
    }

    #[test]
    fn rejects_negative_price() {
        let dir = tempfile::tempdir().unwrap();
        let parts_dir = dir.path().join("parts");
        fs::create_dir(&parts_dir).unwrap();
        fs::write(parts_dir.join("x.yaml"), part_yaml("x", "-5")).unwrap();

        let err = CatalogLoader::load(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { ref id, .. } if id == "x"));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("parts.yaml"), "id: [unterminated").unwrap();

        let err = CatalogLoader::load(dir.path()).unwrap_err();
        match err {
            CatalogError::Parse { path, .. } => assert!(path.ends_with("parts.yaml")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn bundled_sample_data_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
        let catalog = CatalogLoader::load(&dir).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.enumerate_ids()[0].id, "hilux-alternator-01");
        assert_eq!(catalog.resolve("lc80-transfer-case").unwrap().price, 420.5);
    }

    #[test]
    fn duplicates_are_kept_first_wins() {
        let dir = tempfile::tempdir().unwrap();
        let parts_dir = dir.path().join("parts");
        fs::create_dir(&parts_dir).unwrap();
        fs::write(parts_dir.join("1.yaml"), part_yaml("dup", "1")).unwrap();
        fs::write(parts_dir.join("2.yaml"), part_yaml("dup", "2")).unwrap();

        let catalog = CatalogLoader::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("dup").unwrap().price, 1.0);
    }
}
