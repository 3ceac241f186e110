use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::CliError;

pub fn print_schema(text: &str) {
    anstream::println!("{text}");
}

/// The file an output name is persisted to: `<name>.json`, relative to the
/// working directory.
pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.json"))
}

/// Write `text` verbatim to `<name>.json`, replacing any existing file.
pub fn write_schema(name: &str, text: &str) -> Result<PathBuf, CliError> {
    let path = output_path(name);
    fs::write(&path, text).map_err(|source| CliError::Persist {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote schema");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_schema_appends_json_extension() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("todo");
        let path = write_schema(name.to_str().unwrap(), "test content").unwrap();

        assert_eq!(path, dir.path().join("todo.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "test content");
    }

    #[test]
    fn test_write_schema_overwrites() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("schema.json");
        let name = name.to_str().unwrap();
        write_schema(name, "first, longer content").unwrap();
        let path = write_schema(name, "second").unwrap();

        assert!(path.ends_with("schema.json.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_write_schema_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("no-such-dir").join("out");
        let err = write_schema(name.to_str().unwrap(), "{}").unwrap_err();

        let CliError::Persist { path, .. } = &err else {
            panic!("expected persist error, got {:?}", err);
        };
        assert!(path.ends_with("out.json"));
        assert!(err.to_string().starts_with("Error writing to file"));
    }
}
