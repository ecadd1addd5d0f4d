mod dispatch_error;
mod program_error;
mod syntax_error;

pub use dispatch_error::DispatchError;
pub use program_error::ProgramError;
pub use syntax_error::SyntaxError;
