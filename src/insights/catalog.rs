use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::insights::types::{ContentItem, ContentType, Difficulty};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate catalog item id {0}")]
    DuplicateId(u32),
}

/// Immutable set of recommendable content. Built once at startup and shared
/// read-only between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

fn item(
    id: u32,
    content_type: ContentType,
    title: &str,
    difficulty: Difficulty,
    topics: &[&str],
    estimated_time: u32,
) -> ContentItem {
    ContentItem {
        id,
        content_type,
        title: title.to_string(),
        difficulty,
        topics: topics.iter().map(|t| t.to_string()).collect(),
        estimated_time,
    }
}

impl Catalog {
    pub fn new(items: Vec<ContentItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for it in &items {
            if !seen.insert(it.id) {
                return Err(CatalogError::DuplicateId(it.id));
            }
        }
        Ok(Self { items })
    }

    pub fn builtin() -> Self {
        Self {
            items: vec![
                item(
                    1,
                    ContentType::Quiz,
                    "JavaScript Fundamentals",
                    Difficulty::Easy,
                    &["variables", "functions", "loops"],
                    15,
                ),
                item(
                    2,
                    ContentType::Quiz,
                    "React Basics",
                    Difficulty::Medium,
                    &["components", "props", "state"],
                    20,
                ),
                item(
                    3,
                    ContentType::Lesson,
                    "Advanced JavaScript",
                    Difficulty::Hard,
                    &["closures", "promises", "async"],
                    45,
                ),
                item(
                    4,
                    ContentType::Quiz,
                    "Database Design",
                    Difficulty::Medium,
                    &["sql", "normalization", "indexes"],
                    25,
                ),
            ],
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<ContentItem> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads the file when a path is configured, otherwise the built-in set.
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_catalog_has_four_items() {
        let c = Catalog::builtin();
        assert_eq!(c.len(), 4);
        assert_eq!(c.items()[2].title, "Advanced JavaScript");
        assert_eq!(c.items()[2].difficulty, Difficulty::Hard);
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[{{"id":7,"type":"lesson","title":"Rust Ownership","difficulty":"hard","topics":["borrowing"],"estimatedTime":30}}]"#
        )
        .unwrap();

        let c = Catalog::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.items()[0].content_type, ContentType::Lesson);
        assert_eq!(c.items()[0].estimated_time, 30);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert!(matches!(Catalog::from_json_str("[]"), Err(CatalogError::Empty)));

        let mut items = Catalog::builtin().items().to_vec();
        items[1].id = items[0].id;
        assert!(matches!(Catalog::new(items), Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
