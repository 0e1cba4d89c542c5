use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    SetupNotAFile,
    SetupNotADirectory,

    DestinationExists,
    DestinationNotADirectory,

    CasesMalformedLine,
    CasesInvalidName,

    ConfigInvalidJson,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::SetupNotAFile => "setup.not_a_file",
            ErrorCode::SetupNotADirectory => "setup.not_a_directory",

            ErrorCode::DestinationExists => "destination.exists",
            ErrorCode::DestinationNotADirectory => "destination.not_a_directory",

            ErrorCode::CasesMalformedLine => "cases.malformed_line",
            ErrorCode::CasesInvalidName => "cases.invalid_name",

            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetails {
    /// Which argument or setup entry the path came from (e.g. `DST-DIR`).
    pub role: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLineDetails {
    pub line_number: usize,
    pub line: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let field = field.into();
        let problem = problem.into();
        let message = format!("{}: {}", field, problem);
        let details = to_details(InvalidArgumentDetails {
            field,
            problem,
            value,
        });

        Self::new(ErrorCode::ValidationInvalidArgument, message, details)
    }

    pub fn setup_not_a_file(role: impl Into<String>, path: impl Into<String>) -> Self {
        Self::path_error(ErrorCode::SetupNotAFile, "Not a regular file", role, path)
    }

    pub fn setup_not_a_directory(role: impl Into<String>, path: impl Into<String>) -> Self {
        Self::path_error(ErrorCode::SetupNotADirectory, "Not a dir", role, path)
    }

    pub fn destination_exists(role: impl Into<String>, path: impl Into<String>) -> Self {
        Self::path_error(ErrorCode::DestinationExists, "Must not exist", role, path)
    }

    pub fn destination_not_a_directory(role: impl Into<String>, path: impl Into<String>) -> Self {
        Self::path_error(
            ErrorCode::DestinationNotADirectory,
            "Must exist as a directory",
            role,
            path,
        )
    }

    fn path_error(
        code: ErrorCode,
        problem: &str,
        role: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        let role = role.into();
        let path = path.into();
        let message = format!("{}: {}: {}", role, problem, path);
        Self::new(code, message, to_details(PathDetails { role, path }))
    }

    pub fn cases_malformed_line(line_number: usize, line: impl Into<String>, fields: usize) -> Self {
        let line = line.into();
        let problem = format!("expected 2 or 3 '/'-separated fields, found {}", fields);
        let message = format!(
            "Malformed case line {}: {}: \"{}\"",
            line_number, problem, line
        );

        Self::new(
            ErrorCode::CasesMalformedLine,
            message,
            to_details(CaseLineDetails {
                line_number,
                line,
                problem,
            }),
        )
        .with_hint("Each line must be <case>/<original> or <case>/<original>/<renamed>")
    }

    pub fn cases_invalid_name(
        line_number: usize,
        line: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let line = line.into();
        let problem = problem.into();
        let message = format!("Invalid case line {}: {}: \"{}\"", line_number, problem, line);

        Self::new(
            ErrorCode::CasesInvalidName,
            message,
            to_details(CaseLineDetails {
                line_number,
                line,
                problem,
            }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let path = path.into();
        let message = format!("Invalid JSON in {}: {}", path, err);
        let details = to_details(ConfigInvalidJsonDetails {
            path,
            error: err.to_string(),
        });

        Self::new(ErrorCode::ConfigInvalidJson, message, details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let message = match &context {
            Some(context) => format!("IO error ({}): {}", context, error),
            None => format!("IO error: {}", error),
        };
        let details = to_details(InternalIoErrorDetails { error, context });

        Self::new(ErrorCode::InternalIoError, message, details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": error.into(),
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
