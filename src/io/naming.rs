//! Output file naming.
//!
//! A pattern mixes literal text with `{input}`, `{template}` and `{timestamp}`
//! tokens; `{{` and `}}` produce literal braces. Patterns are parsed once, up
//! front, so a typo fails the run before any image is processed.
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

pub const DEFAULT_NAME_PATTERN: &str = "{input}_{template}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Input,
    Template,
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    segments: Vec<Segment>,
}

impl Default for NamePattern {
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Input,
                Segment::Literal("_".to_string()),
                Segment::Template,
            ],
        }
    }
}

impl NamePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument {
            arg: "name_pattern",
            value: pattern.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => return Err(invalid()),
                        }
                    }
                    let token = match name.as_str() {
                        "input" => Segment::Input,
                        "template" => Segment::Template,
                        "timestamp" => Segment::Timestamp,
                        _ => return Err(invalid()),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(token);
                }
                '}' => return Err(invalid()),
                '/' | '\\' => return Err(invalid()),
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        if segments.is_empty() {
            return Err(invalid());
        }

        Ok(Self { segments })
    }

    /// File stem for one pair; the extension is added by [`output_path`].
    pub fn render(&self, input: &str, template: &str, timestamp: i64) -> String {
        let mut name = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => name.push_str(text),
                Segment::Input => name.push_str(input),
                Segment::Template => name.push_str(template),
                Segment::Timestamp => name.push_str(&timestamp.to_string()),
            }
        }
        name
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output path for a (case, template) pair inside `output_dir`.
pub fn output_path(
    output_dir: &Path,
    case_path: &Path,
    template_path: &Path,
    pattern: &NamePattern,
    format: OutputFormat,
) -> PathBuf {
    let timestamp = chrono::Utc::now().timestamp();
    let stem = pattern.render(&file_stem(case_path), &file_stem(template_path), timestamp);
    output_dir.join(format!("{}.{}", stem, format.extension()))
}
