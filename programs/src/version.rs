use brltool_core::errors::ProgramError;
use brltool_core::program::Program;

/// Prints the toolkit and core versions.
#[derive(Debug)]
pub struct VersionProgram;

impl VersionProgram {
    pub fn new(arguments: Vec<String>) -> Result<Self, ProgramError> {
        if let Some(excess) = arguments.into_iter().next() {
            return Err(ProgramError::ExcessParameters(excess));
        }
        Ok(Self)
    }

    /// The report `run` will write.
    pub fn report() -> String {
        format!(
            "{} {}\nbrltool-core {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            brltool_core::VERSION,
        )
    }
}

impl Program for VersionProgram {
    fn run(self: Box<Self>) -> Result<(), ProgramError> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", Self::report())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_arguments() {
        assert!(VersionProgram::new(Vec::new()).is_ok());
    }

    #[test]
    fn rejects_any_argument() {
        let err = VersionProgram::new(vec!["now".to_string()]).expect_err("must fail");
        assert!(matches!(err, ProgramError::ExcessParameters(ref v) if v == "now"));
    }

    #[test]
    fn reports_both_package_versions() {
        let report = VersionProgram::report();
        assert!(report.contains(env!("CARGO_PKG_VERSION")));
        assert!(report.contains(brltool_core::VERSION));
    }
}
