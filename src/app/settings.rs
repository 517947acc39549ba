//! Per-invocation settings derived from flags and the environment.

use std::io::IsTerminal;

use crate::domain::MAX_SLOT_ATTEMPTS;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "PROMPTGEN_LOG";

/// Environment variable that disables interactive prompting when truthy.
pub const NO_INPUT_ENV: &str = "PROMPTGEN_NO_INPUT";

/// Whether missing values may be asked for on the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    Prompt { max_attempts: u32 },
    #[default]
    Disabled,
}

impl Interaction {
    /// Prompt only when input was not disabled and stdin is a terminal.
    pub fn detect(no_input: bool) -> Self {
        Self::from_parts(no_input, std::io::stdin().is_terminal())
    }

    pub fn from_parts(no_input: bool, stdin_is_terminal: bool) -> Self {
        if no_input || !stdin_is_terminal {
            Interaction::Disabled
        } else {
            Interaction::Prompt { max_attempts: MAX_SLOT_ATTEMPTS }
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Interaction::Prompt { .. })
    }
}

/// Default log filter for a `-v` count.
pub fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompting_requires_terminal_and_no_opt_out() {
        assert_eq!(
            Interaction::from_parts(false, true),
            Interaction::Prompt { max_attempts: MAX_SLOT_ATTEMPTS }
        );
        assert_eq!(Interaction::from_parts(true, true), Interaction::Disabled);
        assert_eq!(Interaction::from_parts(false, false), Interaction::Disabled);
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(log_directive(0), "warn");
        assert_eq!(log_directive(1), "info");
        assert_eq!(log_directive(5), "debug");
    }
}
