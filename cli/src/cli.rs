use clap::Parser;

/// Top-level argument surface.
///
/// Everything after the binary name is the invocation: the program/client
/// name followed by the arguments forwarded verbatim to it.
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Toolkit of programs and clients for braille terminal services"
)]
pub struct Args {
    /// Program or client name followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub invocation: Vec<String>,
}

/// This test verifies that the CLI can be built without panicking.
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Args::command().debug_assert()
}
