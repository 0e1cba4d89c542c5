use std::path::Path;

use x2l_testkit::fixture::{self, MaterializeOutput, SetupDir};
use x2l_testkit::reporter::StderrReporter;
use x2l_testkit::utils::validation;

use super::{CmdResult, MaterializeArgs};

pub fn run(args: MaterializeArgs) -> CmdResult<MaterializeOutput> {
    args.validate()?;
    let setup = SetupDir::resolve(Path::new(&args.setup_dir))?;

    let dst = Path::new(&args.dst_dir);
    validation::require_existing_dir(dst, "DST-DIR")?;

    let cases = setup.read_cases()?;
    let mut reporter = StderrReporter::new();
    let output = fixture::materialize_individual(&setup, &cases, dst, &mut reporter)?;
    Ok((output, 0))
}
