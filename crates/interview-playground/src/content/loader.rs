use super::domain::PlaygroundQuestion;
use super::rubric::RubricDimension;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {table} from {}: {source}", .path.display())]
    Io {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {table} JSON: {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{table} table is empty")]
    Empty { table: &'static str },
    #[error("{table} table repeats id '{id}'")]
    DuplicateId { table: &'static str, id: String },
}

/// Anything a content table can be keyed by.
trait Identified {
    fn table_id(&self) -> &str;
}

impl Identified for PlaygroundQuestion {
    fn table_id(&self) -> &str {
        &self.id
    }
}

impl Identified for RubricDimension {
    fn table_id(&self) -> &str {
        &self.id
    }
}

const QUESTIONS: &str = "questions";
const DIMENSIONS: &str = "rubric dimensions";

/// Reads JSON arrays that replace the built-in content tables.
pub struct ContentImporter;

impl ContentImporter {
    pub fn questions_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<PlaygroundQuestion>, ContentError> {
        let file = open(QUESTIONS, path.as_ref())?;
        Self::questions_from_reader(file)
    }

    pub fn questions_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<PlaygroundQuestion>, ContentError> {
        read_table(QUESTIONS, reader)
    }

    pub fn dimensions_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<RubricDimension>, ContentError> {
        let file = open(DIMENSIONS, path.as_ref())?;
        Self::dimensions_from_reader(file)
    }

    pub fn dimensions_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<RubricDimension>, ContentError> {
        read_table(DIMENSIONS, reader)
    }
}

fn open(table: &'static str, path: &Path) -> Result<std::fs::File, ContentError> {
    std::fs::File::open(path).map_err(|source| ContentError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })
}

fn read_table<T, R>(table: &'static str, reader: R) -> Result<Vec<T>, ContentError>
where
    T: DeserializeOwned + Identified,
    R: Read,
{
    let rows: Vec<T> =
        serde_json::from_reader(reader).map_err(|source| ContentError::Json { table, source })?;

    if rows.is_empty() {
        return Err(ContentError::Empty { table });
    }

    let mut seen = HashSet::new();
    for row in &rows {
        if !seen.insert(row.table_id()) {
            return Err(ContentError::DuplicateId {
                table,
                id: row.table_id().to_string(),
            });
        }
    }

    debug!(table, rows = rows.len(), "loaded content table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DIMENSIONS_JSON: &str = r#"[
        {"id": "depth", "name": "Depth", "description": "Goes deep", "default_weight": 60,
         "examples": {"weak": "shallow", "strong": "deep"}},
        {"id": "breadth", "name": "Breadth", "description": "Goes wide", "default_weight": 40,
         "examples": {"weak": "narrow", "strong": "wide"}}
    ]"#;

    #[test]
    fn reads_dimension_overrides() {
        let dimensions = ContentImporter::dimensions_from_reader(Cursor::new(DIMENSIONS_JSON))
            .expect("dimensions parse");
        assert_eq!(dimensions.len(), 2);
        assert_eq!(dimensions[0].id, "depth");
        assert_eq!(dimensions[1].default_weight, 40);
    }

    #[test]
    fn rejects_empty_tables() {
        match ContentImporter::questions_from_reader(Cursor::new("[]")) {
            Err(ContentError::Empty { table }) => assert_eq!(table, "questions"),
            other => panic!("expected empty table error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = DIMENSIONS_JSON.replace("\"breadth\"", "\"depth\"");
        match ContentImporter::dimensions_from_reader(Cursor::new(json)) {
            Err(ContentError::DuplicateId { id, .. }) => assert_eq!(id, "depth"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn reports_malformed_json_and_missing_files() {
        let err = ContentImporter::questions_from_reader(Cursor::new("{not json"))
            .expect_err("malformed json");
        assert!(matches!(err, ContentError::Json { table: "questions", .. }));

        let err = ContentImporter::dimensions_from_path("/nonexistent/rubric.json")
            .expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/rubric.json"));
    }
}
