//! Record and stats formatting for stdout.

use anyhow::Result;
use owo_colors::OwoColorize;
use sentence::{CorpusStats, Record};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Sentence followed by its attribution
    Text,
    /// One compact JSON object per line
    Json,
}

pub struct Printer {
    format: OutputFormat,
    color: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn format_record(&self, record: &Record) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string(record)?);
        }

        // Records without a sentence field fall back to their JSON form
        let Some(name) = record.name() else {
            return Ok(serde_json::to_string(record)?);
        };

        let mut out = if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        };
        if let Some(from) = record.attribution() {
            let line = format!("  -- {}", from);
            out.push('\n');
            if self.color {
                out.push_str(&line.dimmed().to_string());
            } else {
                out.push_str(&line);
            }
        }
        Ok(out)
    }

    pub fn print_record(&self, record: &Record) -> Result<()> {
        println!("{}", self.format_record(record)?);
        Ok(())
    }

    pub fn format_stats(&self, stats: &CorpusStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(stats)?),
            OutputFormat::Text => Ok(format!(
                "Lines:   {}\nSize:    {} bytes\nIndexed: {} bytes",
                stats.lines, stats.bytes, stats.indexed_bytes
            )),
        }
    }
}
