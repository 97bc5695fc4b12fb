mod styles;

use crate::record::OutputRecord;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use styles::Styles;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `name:line:short:line:contents`, the format editor integrations parse
    #[default]
    Plain,
    /// One JSON object per line
    Json,
    /// `short:line: contents` for reading in a terminal
    Pretty,
}

pub struct Output {
    format: OutputFormat,
    styles: Styles,
}

impl Output {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self {
            format,
            styles: Styles::new(no_color),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write one record followed by a newline.
    pub fn write_record<W: Write>(&self, out: &mut W, record: &OutputRecord) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(out, "{record}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, record)?;
                out.write_all(b"\n")
            }
            OutputFormat::Pretty => {
                let colon = ":".style(self.styles.punct());
                writeln!(
                    out,
                    "{}{colon}{}{colon} {}",
                    record.short_filename.style(self.styles.crumb()),
                    record.line.style(self.styles.line_number()),
                    record.contents,
                )
            }
        }
    }
}
