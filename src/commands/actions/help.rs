//! Help command handler.
//!
//! This is a stateless command that always returns the same help message.

use log::debug;

use crate::{commands::markdown_response::format_help, sequencer::Step};

/// Returns the help text as a single immediate step.
pub fn handle_help() -> Vec<Step> {
    debug!("handling help command");

    vec![Step::now(format_help())]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_handle_help() {
        let steps = handle_help();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].delay, Duration::ZERO);
        assert_eq!(steps[0].text, format_help());
    }
}
