use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected `name:linenum:contents`, found {found} of 2 `:` separators")]
    MissingSeparator { found: usize },
}

impl RecordError {
    pub fn hint(&self) -> &'static str {
        match self {
            Self::MissingSeparator { .. } => {
                "Feed search output with line numbers, e.g. `rg --line-number PATTERN | pathcrumbs`"
            }
        }
    }
}
