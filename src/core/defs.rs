//! Rendering of the `defs.xly` definitions file.
//!
//! Every block is an independent function of the same mapping slice; the
//! document is assembled by substituting them into [`DEFINITIONS_TEMPLATE`].

use chrono::{DateTime, Utc};

use crate::cases::FileNameMapping;
use crate::utils::template;

/// Symbol defined in the generated file and referenced by the `_subdir` lists.
pub const SUB_DIR_SYMBOL: &str = "SUB_DIR";

const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

pub struct DefsVars;

impl DefsVars {
    pub const GENERATION_TIME_STAMP: &'static str = "GENERATION_TIME_STAMP";
    pub const SUB_DIR_SYMBOL: &'static str = "SUB_DIR_SYMBOL";
    pub const ORIGINAL_FILE_LIST: &'static str = "ORIGINAL_FILE_LIST";
    pub const RENAMINGS_FILE_LIST: &'static str = "RENAMINGS_FILE_LIST";
    pub const ORIGINAL_FILE_LIST_SUBDIR: &'static str = "ORIGINAL_FILE_LIST__SUBDIR";
    pub const RENAMINGS_FILE_LIST_SUBDIR: &'static str = "RENAMINGS_FILE_LIST__SUBDIR";
    pub const FILES: &'static str = "FILES";
    pub const ORIGINAL_FILES_MATCHERS: &'static str = "ORIGINAL_FILES_MATCHERS";
    pub const RENAMED_FILES_MATCHERS: &'static str = "RENAMED_FILES_MATCHERS";
}

pub const DEFINITIONS_TEMPLATE: &str = "\
# Generated {{GENERATION_TIME_STAMP}}

def string {{SUB_DIR_SYMBOL}} = subdir.SUBEXT

def string ORIGINAL_FILE_LIST =
<<EOF
{{ORIGINAL_FILE_LIST}}
EOF

def string RENAMINGS_FILE_LIST =
<<EOF
{{RENAMINGS_FILE_LIST}}
EOF

def string ORIGINAL_FILE_LIST_subdir =
<<EOF
{{ORIGINAL_FILE_LIST__SUBDIR}}
EOF

def string RENAMINGS_FILE_LIST_subdir =
<<EOF
{{RENAMINGS_FILE_LIST__SUBDIR}}
EOF

def files-source FILES =
{
{{FILES}}
}

def files-matcher MATCHES_ORIGINAL_FILES = matches -full
{
{{ORIGINAL_FILES_MATCHERS}}
}

def files-matcher MATCHES_RENAMED_FILES = matches -full
{
{{RENAMED_FILES_MATCHERS}}
}
";

/// Render the definitions file stamped with the current UTC time.
pub fn render_now(variants: &[FileNameMapping]) -> String {
    render(variants, Utc::now())
}

pub fn render(variants: &[FileNameMapping], generated_at: DateTime<Utc>) -> String {
    let subdir_ref = sym_ref(SUB_DIR_SYMBOL);
    let subdir_variants: Vec<FileNameMapping> = variants
        .iter()
        .map(|mapping| mapping.in_subdir(&subdir_ref))
        .collect();

    let timestamp = format_timestamp(generated_at);
    let original_list = original_file_list(variants);
    let renamings_list = renamings_file_list(variants);
    let original_list_subdir = original_file_list(&subdir_variants);
    let renamings_list_subdir = renamings_file_list(&subdir_variants);
    let files = files_block(variants);
    let original_matchers = original_files_matchers(variants);
    let renamed_matchers = renamed_files_matchers(variants);

    template::render(
        DEFINITIONS_TEMPLATE,
        &[
            (DefsVars::GENERATION_TIME_STAMP, timestamp.as_str()),
            (DefsVars::SUB_DIR_SYMBOL, SUB_DIR_SYMBOL),
            (DefsVars::ORIGINAL_FILE_LIST, original_list.as_str()),
            (DefsVars::RENAMINGS_FILE_LIST, renamings_list.as_str()),
            (DefsVars::ORIGINAL_FILE_LIST_SUBDIR, original_list_subdir.as_str()),
            (DefsVars::RENAMINGS_FILE_LIST_SUBDIR, renamings_list_subdir.as_str()),
            (DefsVars::FILES, files.as_str()),
            (DefsVars::ORIGINAL_FILES_MATCHERS, original_matchers.as_str()),
            (DefsVars::RENAMED_FILES_MATCHERS, renamed_matchers.as_str()),
        ],
    )
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Symbol reference syntax of the test framework: `@[NAME]@`.
pub fn sym_ref(symbol: &str) -> String {
    format!("@[{}]@", symbol)
}

pub fn original_file_list(variants: &[FileNameMapping]) -> String {
    lines(variants, |mapping| mapping.original.clone())
}

pub fn renamings_file_list(variants: &[FileNameMapping]) -> String {
    lines(variants, renaming)
}

pub fn files_block(variants: &[FileNameMapping]) -> String {
    lines(variants, |mapping| {
        format!("  file {}", str_lit(&mapping.original))
    })
}

pub fn original_files_matchers(variants: &[FileNameMapping]) -> String {
    lines(variants, |mapping| is_empty_file_matcher(&mapping.original))
}

pub fn renamed_files_matchers(variants: &[FileNameMapping]) -> String {
    lines(variants, |mapping| is_empty_file_matcher(mapping.target()))
}

fn renaming(mapping: &FileNameMapping) -> String {
    match &mapping.renamed {
        None => mapping.original.clone(),
        Some(renamed) => format!("{} -> {}", mapping.original, renamed),
    }
}

// Quotes inside `s` are emitted as-is; the test suite never uses them.
fn str_lit(s: &str) -> String {
    format!("'{}'", s)
}

fn is_empty_file_matcher(file_name: &str) -> String {
    format!("  {} : type file && contents is-empty", str_lit(file_name))
}

fn lines<F>(variants: &[FileNameMapping], format_line: F) -> String
where
    F: Fn(&FileNameMapping) -> String,
{
    variants
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}
