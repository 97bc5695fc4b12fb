use owo_colors::Style;
use std::io::IsTerminal;

/// Styling configuration based on terminal capabilities
pub(crate) struct Styles {
    use_color: bool,
}

impl Styles {
    pub(crate) fn new(no_color: bool) -> Self {
        let use_color =
            !no_color && std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { use_color }
    }

    #[cfg(test)]
    pub(crate) fn forced(use_color: bool) -> Self {
        Self { use_color }
    }

    pub(crate) fn crumb(&self) -> Style {
        if self.use_color {
            Style::new().cyan()
        } else {
            Style::new()
        }
    }

    pub(crate) fn line_number(&self) -> Style {
        if self.use_color {
            Style::new().yellow()
        } else {
            Style::new()
        }
    }

    pub(crate) fn punct(&self) -> Style {
        if self.use_color {
            Style::new().dimmed()
        } else {
            Style::new()
        }
    }
}
