use clap::Args;

use x2l_testkit::utils::validation;

pub type CmdResult<T> = x2l_testkit::Result<(T, i32)>;

pub mod all;
pub mod defs;
pub mod individual;

/// Arguments shared by the commands that build fixture trees.
#[derive(Args, Debug)]
pub struct MaterializeArgs {
    /// Directory containing the cases file and the template directory
    #[arg(value_name = "SETUP-DIR")]
    pub setup_dir: String,

    /// Where the fixtures are written
    #[arg(value_name = "DST-DIR")]
    pub dst_dir: String,
}

impl MaterializeArgs {
    fn validate(&self) -> x2l_testkit::Result<()> {
        validation::require_non_empty(&self.setup_dir, "SETUP-DIR", "must not be empty")?;
        validation::require_non_empty(&self.dst_dir, "DST-DIR", "must not be empty")?;
        Ok(())
    }
}

pub(crate) fn run_json(command: crate::Commands) -> (x2l_testkit::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::All(args) => crate::output::map_cmd_result_to_json(all::run(args)),
        crate::Commands::Individual(args) => {
            crate::output::map_cmd_result_to_json(individual::run(args))
        }
        crate::Commands::Defs(_) => (
            Err(x2l_testkit::Error::validation_invalid_argument(
                "command",
                "defs prints raw text, not JSON",
                None,
            )),
            1,
        ),
    }
}

pub(crate) fn run_raw(command: crate::Commands) -> CmdResult<String> {
    match command {
        crate::Commands::Defs(args) => defs::run(args),
        _ => Err(x2l_testkit::Error::validation_invalid_argument(
            "command",
            "command does not produce raw output",
            None,
        )),
    }
}
