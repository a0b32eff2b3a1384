// Operator confirmation port, used before overwriting an existing dashboard

/// Blocking yes/no question. Implementations may wait on a human.
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt the same way. Useful for unattended runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmation for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
