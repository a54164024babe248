//! Calculate options

/// Options for the calculate command
#[derive(Debug, Clone)]
pub struct CalculateOptions {
    /// Whether the result is appended to the ledger
    pub save: bool,
}

impl Default for CalculateOptions {
    fn default() -> Self {
        Self { save: true }
    }
}

impl CalculateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }
}
