use std::time::Duration;

use brltool_core::errors::ProgramError;
use brltool_core::program::Program;

/// Waits for a caller-supplied number of seconds.
#[derive(Debug)]
pub struct PauseClient {
    duration: Duration,
}

impl PauseClient {
    pub fn new(arguments: Vec<String>) -> Result<Self, ProgramError> {
        let mut arguments = arguments.into_iter();
        let seconds = arguments
            .next()
            .ok_or(ProgramError::MissingParameter("duration"))?;

        if let Some(excess) = arguments.next() {
            return Err(ProgramError::ExcessParameters(excess));
        }

        Ok(Self {
            duration: Duration::from_secs(parse_seconds(&seconds)?),
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Parse the duration argument: a positive integer number of seconds.
fn parse_seconds(value: &str) -> Result<u64, ProgramError> {
    match value.parse::<u64>() {
        Ok(0) => Err(ProgramError::InvalidParameter {
            name: "duration",
            value: value.to_string(),
            reason: "must be positive".to_string(),
        }),
        Ok(seconds) => Ok(seconds),
        Err(e) => Err(ProgramError::InvalidParameter {
            name: "duration",
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

impl Program for PauseClient {
    fn run(self: Box<Self>) -> Result<(), ProgramError> {
        tracing::debug!(seconds = self.duration.as_secs(), "pausing");
        std::thread::sleep(self.duration);
        Ok(())
    }
}
