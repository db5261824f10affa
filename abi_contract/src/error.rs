//! Errors surfaced to front ends

use crate::config::ConfigError;
use crate::parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ContractError>;

/// Reads and parses a header file
pub fn load_header(path: impl Into<PathBuf>) -> Result<Vec<crate::model::Declaration>> {
    let path = path.into();
    let source = std::fs::read_to_string(&path).map_err(|source| ContractError::Io {
        path: path.clone(),
        source,
    })?;
    crate::parser::parse_header(&source).map_err(|source| ContractError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "extern void zx_f(\n    void) __LEAF_FN;").unwrap();
        let decls = load_header(file.path()).unwrap();
        assert_eq!(decls.len(), 1);
    }

    #[test]
    fn test_load_header_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "extern void zx_f(\n    void) __BOGUS;").unwrap();
        let err = load_header(file.path()).unwrap_err();
        assert!(matches!(err, ContractError::Parse { .. }));
        let message = err.to_string();
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.ends_with("line 2: unknown function attribute `__BOGUS`"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_header(dir.path().join("absent.h")).unwrap_err();
        assert!(matches!(err, ContractError::Io { .. }));
    }
}
