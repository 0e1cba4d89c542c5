//! Case registry: the parsed form of a `cases.txt` file.
//!
//! Each non-blank line is `case/original` or `case/original/renamed`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::utils::io;

const FIELD_SEPARATOR: char = '/';

/// One file's name before and, optionally, after renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNameMapping {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed: Option<String>,
}

impl FileNameMapping {
    pub fn new(original: impl Into<String>, renamed: Option<String>) -> Self {
        Self {
            original: original.into(),
            renamed,
        }
    }

    pub fn unchanged(original: impl Into<String>) -> Self {
        Self::new(original, None)
    }

    pub fn renamed(original: impl Into<String>, renamed: impl Into<String>) -> Self {
        Self::new(original, Some(renamed.into()))
    }

    /// The name the file has after processing.
    pub fn target(&self) -> &str {
        self.renamed.as_deref().unwrap_or(&self.original)
    }

    /// Both names placed under `subdir`.
    ///
    /// `subdir` is usually a symbolic reference such as `@[SUB_DIR]@` that the
    /// test framework resolves later, so it is joined as an opaque component.
    pub fn in_subdir(&self, subdir: &str) -> FileNameMapping {
        FileNameMapping {
            original: join(subdir, &self.original),
            renamed: self.renamed.as_deref().map(|renamed| join(subdir, renamed)),
        }
    }
}

fn join(dir: &str, file: &str) -> String {
    let joined: PathBuf = Path::new(dir).join(file).components().collect();
    joined.to_string_lossy().into_owned()
}

/// Ordered mapping from case name to its file name mapping.
///
/// Iteration follows the order in which case names first appear. Inserting an
/// existing name replaces its mapping without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseRegistry {
    cases: Vec<(String, FileNameMapping)>,
}

impl CaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = io::read_file(path, &format!("read cases file {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut registry = Self::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (name, mapping) = parse_line(index + 1, line)?;
            registry.insert(name, mapping);
        }
        Ok(registry)
    }

    /// Returns the replaced mapping when `name` was already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        mapping: FileNameMapping,
    ) -> Option<FileNameMapping> {
        let name = name.into();
        match self.cases.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, mapping)),
            None => {
                self.cases.push((name, mapping));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileNameMapping> {
        self.cases
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, mapping)| mapping)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileNameMapping)> {
        self.cases
            .iter()
            .map(|(name, mapping)| (name.as_str(), mapping))
    }

    pub fn names(&self) -> Vec<String> {
        self.cases.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Every mapping, in registry order.
    pub fn variants(&self) -> Vec<FileNameMapping> {
        self.cases.iter().map(|(_, mapping)| mapping.clone()).collect()
    }
}

fn parse_line(line_number: usize, line: &str) -> Result<(String, FileNameMapping)> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let (name, mapping) = match fields.as_slice() {
        [name, original] => (*name, FileNameMapping::unchanged(*original)),
        [name, original, renamed] => (*name, FileNameMapping::renamed(*original, *renamed)),
        _ => return Err(Error::cases_malformed_line(line_number, line, fields.len())),
    };

    if let Some(problem) = case_name_problem(name) {
        return Err(Error::cases_invalid_name(line_number, line, problem));
    }
    if mapping.original.is_empty() {
        return Err(Error::cases_invalid_name(
            line_number,
            line,
            "original file name is empty",
        ));
    }
    if mapping.renamed.as_deref() == Some("") {
        return Err(Error::cases_invalid_name(
            line_number,
            line,
            "renamed file name is empty",
        ));
    }

    Ok((name.to_string(), mapping))
}

/// Case names become directory names.
fn case_name_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("case name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Some(format!("case name '{}' is not a directory name", name));
    }
    if name.contains(|c| c == '\\' || c == '\0') {
        return Some(format!(
            "case name '{}' contains a path separator or NUL",
            name
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_two_and_three_field_lines() {
        let registry = CaseRegistry::parse("caseA/foo.TXT\ncaseB/foo.JPG/foo.jpg\n").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("caseA"),
            Some(&FileNameMapping::unchanged("foo.TXT"))
        );
        assert_eq!(
            registry.get("caseB"),
            Some(&FileNameMapping::renamed("foo.JPG", "foo.jpg"))
        );
    }

    #[test]
    fn keeps_file_order() {
        let registry = CaseRegistry::parse("z/a\ny/b\nx/c").unwrap();
        assert_eq!(registry.names(), vec!["z", "y", "x"]);
    }

    #[test]
    fn duplicate_name_last_write_wins_in_first_position() {
        let registry = CaseRegistry::parse("a/one\nb/two\na/three/THREE").unwrap();

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(
            registry.variants(),
            vec![
                FileNameMapping::renamed("three", "THREE"),
                FileNameMapping::unchanged("two"),
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_accepts_crlf() {
        let registry = CaseRegistry::parse("\na/x.A\r\n   \nb/y.B/y.b\r\n\n").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().original, "x.A");
        assert_eq!(registry.get("b").unwrap().target(), "y.b");
    }

    #[test]
    fn rejects_wrong_field_count_with_line_number() {
        let err = CaseRegistry::parse("ok/x\nonly-one-field").unwrap_err();
        assert_eq!(err.code, ErrorCode::CasesMalformedLine);
        assert_eq!(err.details["lineNumber"], 2);
        assert_eq!(err.details["line"], "only-one-field");

        let err = CaseRegistry::parse("a/b/c/d").unwrap_err();
        assert_eq!(err.code, ErrorCode::CasesMalformedLine);
        assert!(err.message.contains("found 4"));
    }

    #[test]
    fn rejects_unusable_case_names_and_empty_files() {
        for line in ["/x", "../x", "./x", "a\\b/x", "a/", "a/x/"] {
            let err = CaseRegistry::parse(line).unwrap_err();
            assert_eq!(err.code, ErrorCode::CasesInvalidName, "line {:?}", line);
        }
    }

    #[test]
    fn read_loads_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "c/README.MD/README.md\n").unwrap();

        let registry = CaseRegistry::read(file.path()).unwrap();
        assert_eq!(registry.names(), vec!["c"]);
    }

    #[test]
    fn empty_content_gives_empty_registry() {
        assert!(CaseRegistry::parse("").unwrap().is_empty());
    }

    #[test]
    fn in_subdir_prefixes_both_names() {
        let projected = FileNameMapping::renamed("a.TXT", "a.txt").in_subdir("@[SUB_DIR]@");
        assert_eq!(projected.original, "@[SUB_DIR]@/a.TXT");
        assert_eq!(projected.renamed.as_deref(), Some("@[SUB_DIR]@/a.txt"));

        let projected = FileNameMapping::unchanged("b").in_subdir("@[SUB_DIR]@");
        assert_eq!(projected.original, "@[SUB_DIR]@/b");
        assert_eq!(projected.renamed, None);
    }

    #[test]
    fn in_subdir_normalizes_like_a_path_join() {
        let projected = FileNameMapping::unchanged("./dir/./f.X").in_subdir("@[SUB_DIR]@");
        assert_eq!(projected.original, "@[SUB_DIR]@/dir/f.X");
    }
}
