use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

mod commands;
mod output;

use commands::{defs, MaterializeArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const AFTER_HELP: &str = "\
SETUP-DIR
  A directory containing:
    cases.txt
      File with one case per line:
        <case name>/<original file name>[/<renamed file name>]

      where
        <case name>          Name of test case usable as dir name (i.e. no strange chars)
        <original file name> Name of file before processing.
        <renamed file name>  Name of file after processing.
                             Omitted if the same as the original file name.

    template
      A directory with Exactly files to be complemented with \"defs.xly\"
      generated by this program. These files are copied and supplied with
      \"defs.xly\" to serve as test cases.

    setup.json (optional)
      Overrides of the names above, e.g. {\"casesFile\": \"variants.txt\"}.";

#[derive(Parser)]
#[command(name = "cases-gen")]
#[command(version = VERSION)]
#[command(about = "Generate Exactly test fixtures for file renaming cases")]
#[command(after_help = AFTER_HELP)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print contents of defs.xly on stdout
    Defs(defs::DefsArgs),
    /// Create an Exactly suite in DST-DIR representing cases for all renaming
    /// variants. DST-DIR must not exist.
    All(MaterializeArgs),
    /// Create directories in DST-DIR representing individual renaming
    /// variants. DST-DIR must exist as a directory.
    Individual(MaterializeArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Defs(_) => ResponseMode::Raw,
        Commands::All(_) | Commands::Individual(_) => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(e),
    };

    let exit_code = match response_mode(&cli.command) {
        ResponseMode::Raw => output::print_raw_result(commands::run_raw(cli.command)),
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command);
            output::print_json_result(json_result, exit_code)
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

/// Help and version requests succeed; every other parse failure is a usage
/// error with exit status 1.
fn usage_exit(e: clap::Error) -> std::process::ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::ExitCode::SUCCESS,
        _ => std::process::ExitCode::FAILURE,
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
