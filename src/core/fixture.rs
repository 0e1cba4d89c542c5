//! Fixture materialization: template copies completed with a generated
//! definitions file.
//!
//! Nothing is cleaned up on failure. A copy that fails part way leaves the
//! destination as the copy left it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cases::{CaseRegistry, FileNameMapping};
use crate::defaults::SetupLayout;
use crate::defs;
use crate::error::Result;
use crate::reporter::Reporter;
use crate::utils::{io, validation};

/// A validated setup directory: a cases file and a template directory.
#[derive(Debug, Clone)]
pub struct SetupDir {
    pub root: PathBuf,
    pub cases_file: PathBuf,
    pub template_dir: PathBuf,
    pub layout: SetupLayout,
}

impl SetupDir {
    pub fn resolve(root: &Path) -> Result<Self> {
        let layout = SetupLayout::load(root)?;
        let cases_file = root.join(&layout.cases_file);
        let template_dir = root.join(&layout.template_dir);

        validation::require_file(&cases_file, "CASES-FILE")?;
        validation::require_dir(&template_dir, "TEMPLATE-DIR")?;

        Ok(Self {
            root: root.to_path_buf(),
            cases_file,
            template_dir,
            layout,
        })
    }

    pub fn read_cases(&self) -> Result<CaseRegistry> {
        CaseRegistry::read(&self.cases_file)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializeOutput {
    pub mode: &'static str,
    pub destination: String,
    pub cases: Vec<String>,
    pub files_written: Vec<String>,
}

/// Copy `template` to `dst` and write the definitions for `variants` into it.
///
/// Returns the path of the written definitions file.
pub fn materialize_tree(
    dst: &Path,
    template: &Path,
    variants: &[FileNameMapping],
    layout: &SetupLayout,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    validation::require_absent(dst, "DST-DIR")?;
    validation::require_dir(template, "TEMPLATE-DIR")?;

    let definitions_text = defs::render_now(variants);

    reporter.step("Copying template dir");
    io::copy_dir_recursive(template, dst)?;

    let definitions_path = dst.join(&layout.definitions_file);
    reporter.step(&format!(
        "Writing definitions file {}",
        definitions_path.display()
    ));
    io::write_file(&definitions_path, &definitions_text, "write definitions file")?;

    Ok(definitions_path)
}

/// One fixture holding every case's variant in a single definitions file.
pub fn materialize_all(
    setup: &SetupDir,
    cases: &CaseRegistry,
    dst: &Path,
    reporter: &mut dyn Reporter,
) -> Result<MaterializeOutput> {
    let definitions_path = materialize_tree(
        dst,
        &setup.template_dir,
        &cases.variants(),
        &setup.layout,
        reporter,
    )?;

    Ok(MaterializeOutput {
        mode: "all",
        destination: dst.display().to_string(),
        cases: cases.names(),
        files_written: vec![definitions_path.display().to_string()],
    })
}

/// One fixture per case under `dst/<case>`, plus a suite index and a common
/// include file in `dst` itself.
pub fn materialize_individual(
    setup: &SetupDir,
    cases: &CaseRegistry,
    dst: &Path,
    reporter: &mut dyn Reporter,
) -> Result<MaterializeOutput> {
    validation::require_existing_dir(dst, "DST-DIR")?;

    let mut files_written = Vec::new();
    for (case_name, mapping) in cases.iter() {
        reporter.step(&format!("Generating variant: {}", case_name));
        let definitions_path = materialize_tree(
            &dst.join(case_name),
            &setup.template_dir,
            std::slice::from_ref(mapping),
            &setup.layout,
            reporter,
        )?;
        files_written.push(definitions_path.display().to_string());
    }

    let suite_path = dst.join(&setup.layout.suite_file);
    reporter.step(&format!("Creating suite: {}", suite_path.display()));
    io::write_file(&suite_path, &suite_text(&cases.names()), "write suite file")?;
    files_written.push(suite_path.display().to_string());

    let common_path = dst.join(&setup.layout.common_file);
    reporter.step(&format!("Creating: {}", common_path.display()));
    io::write_file(&common_path, COMMON_TEXT, "write common file")?;
    files_written.push(common_path.display().to_string());

    Ok(MaterializeOutput {
        mode: "individual",
        destination: dst.display().to_string(),
        cases: cases.names(),
        files_written,
    })
}

/// Suite index listing each case directory.
pub fn suite_text(case_names: &[String]) -> String {
    format!("[suites]\n\n{}\n", case_names.join("\n"))
}

/// Include of the suite-wide common file one level up. The target is fixed:
/// a `commonFile` override only renames the file written here.
pub const COMMON_TEXT: &str = "including ../common.xly\n";
