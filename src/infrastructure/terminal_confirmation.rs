// Terminal confirmation - asks on stderr, reads the answer from stdin
use crate::application::confirmation::Confirmation;
use std::io::{self, BufRead, Write};

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if let Err(e) = write!(stderr, "{} [y/N] ", prompt).and_then(|_| stderr.flush()) {
            tracing::warn!("Could not write confirmation prompt: {}", e);
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Could not read confirmation answer: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
