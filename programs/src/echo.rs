use brltool_core::errors::ProgramError;
use brltool_core::program::Program;

/// Echoes its forwarded arguments back on stdout.
pub struct EchoClient {
    text: String,
}

impl EchoClient {
    pub fn new(arguments: Vec<String>) -> Result<Self, ProgramError> {
        Ok(Self {
            text: arguments.join(" "),
        })
    }

    /// The line `run` will write.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Program for EchoClient {
    fn run(self: Box<Self>) -> Result<(), ProgramError> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", self.text)?;
        Ok(())
    }
}
