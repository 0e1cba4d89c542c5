//! CLI response formatting and output.
//!
//! Successful results go to stdout: a JSON envelope, or raw text for commands
//! whose output is itself a file format. Errors always go to stderr.

use serde::Serialize;
use x2l_testkit::{Error, Result};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

fn write_stdout(payload: &str) -> Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    write_stdout(&CliResponse::success(data).to_json()?)
}

pub fn print_error(err: &Error) {
    eprintln!("Error: {}", err.message);
    for hint in &err.hints {
        eprintln!("Hint: {}", hint.message);
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => (Err(err), 1),
    }
}

/// Print a JSON result, returning the exit code to use.
pub fn print_json_result(result: Result<serde_json::Value>, exit_code: i32) -> i32 {
    let printed = match result {
        Ok(data) => print_success(data),
        Err(err) => Err(err),
    };
    match printed {
        Ok(()) => exit_code,
        Err(err) => {
            print_error(&err);
            exit_code.max(1)
        }
    }
}

/// Print raw text output, returning the exit code to use.
pub fn print_raw_result(result: Result<(String, i32)>) -> i32 {
    match result.and_then(|(content, exit_code)| write_stdout(&content).map(|_| exit_code)) {
        Ok(exit_code) => exit_code,
        Err(err) => {
            print_error(&err);
            1
        }
    }
}
