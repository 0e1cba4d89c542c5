use clap::Args;

use std::path::Path;

use x2l_testkit::cases::CaseRegistry;
use x2l_testkit::defs;
use x2l_testkit::utils::validation;

use super::CmdResult;

#[derive(Args, Debug)]
pub struct DefsArgs {
    /// File with one case per line
    #[arg(value_name = "CASES-FILE")]
    pub cases_file: String,
}

pub fn run(args: DefsArgs) -> CmdResult<String> {
    let cases_file = Path::new(&args.cases_file);
    validation::require_file(cases_file, "CASES-FILE")?;

    let cases = CaseRegistry::read(cases_file)?;
    Ok((defs::render_now(&cases.variants()), 0))
}
