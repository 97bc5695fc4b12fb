use crate::errors::RecordError;
use crate::shorten::Shortener;
use serde::Serialize;
use std::fmt;

const FIELD_SEP: char = ':';

/// One `name:linenum:contents` line, borrowed from the input.
#[derive(Debug, PartialEq, Eq)]
pub struct InputRecord<'a> {
    pub filename: &'a str,
    pub line: &'a str,
    pub contents: &'a str,
}

impl<'a> InputRecord<'a> {
    /// Split on the first two separators; the contents keep any further colons.
    pub fn parse(raw: &'a str) -> Result<Self, RecordError> {
        let mut parts = raw.splitn(3, FIELD_SEP);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(filename), Some(line), Some(contents)) => Ok(Self {
                filename,
                line,
                contents,
            }),
            (_, Some(_), None) => Err(RecordError::MissingSeparator { found: 1 }),
            _ => Err(RecordError::MissingSeparator { found: 0 }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub filename: String,
    pub line: String,
    pub short_filename: String,
    pub contents: String,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.filename,
            self.line,
            self.short_filename,
            self.line,
            self.contents,
            sep = FIELD_SEP
        )
    }
}

pub fn process_line(shortener: &Shortener, raw: &str) -> Result<OutputRecord, RecordError> {
    let input = InputRecord::parse(raw)?;
    let filename = shortener.normalize(input.filename);
    let short_filename = shortener.shorten(&filename);
    Ok(OutputRecord {
        filename,
        line: input.line.to_string(),
        short_filename,
        contents: input.contents.trim_end().to_string(),
    })
}
