use std::process::ExitCode;

/// Outcome of a command, carried back to `main` as a process exit code.
#[derive(Debug)]
pub struct Exit {
    code: u8,
    message: Option<String>,
}

impl Exit {
    #[must_use]
    pub fn success() -> Self {
        Self {
            code: 0,
            message: None,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Self {
            code: 1,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Print the message, if any, then convert into the process exit code.
    ///
    /// Success messages go to stdout, failure messages to stderr.
    #[must_use]
    pub fn process(self) -> ExitCode {
        if let Some(message) = &self.message {
            if self.code == 0 {
                println!("{message}");
            } else {
                eprintln!("{message}");
            }
        }
        ExitCode::from(self.code)
    }
}
