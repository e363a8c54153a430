//! Per-section validation
//!
//! Sections describe their checks through a [`Validator`] scoped to the
//! section name, which collects every failure instead of stopping at the first.

pub use crate::error::{Problem, ValidationError};
use std::fmt::Display;

/// A top-level table of `config.toml`
pub trait ConfigSection: Default {
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Replaces this section's values with `other`'s
    fn merge(&mut self, other: Self);

    /// Table name, used as the prefix of field paths
    fn section_name(&self) -> &'static str;
}

/// Collects validation failures for one section
#[derive(Debug)]
pub struct Validator {
    section: &'static str,
    errors: Vec<ValidationError>,
}

impl Validator {
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            errors: Vec::new(),
        }
    }

    /// Shorthand for `Validator::new(section.section_name())`
    pub fn for_section<S: ConfigSection>(section: &S) -> Self {
        Self::new(section.section_name())
    }

    fn path(&self, field: &str) -> String {
        format!("{}.{}", self.section, field)
    }

    fn fail(&mut self, field: &str, problem: Problem) -> &mut Self {
        let path = self.path(field);
        self.errors.push(ValidationError::new(path, problem));
        self
    }

    /// `min <= value <= max`
    pub fn in_range<T>(&mut self, field: &str, value: T, min: T, max: T) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if value < min || value > max {
            return self.fail(
                field,
                Problem::OutOfRange {
                    value: value.to_string(),
                    min: min.to_string(),
                    max: max.to_string(),
                },
            );
        }
        self
    }

    /// `value < limit`, where `limit` is the sibling field `limit_field`
    pub fn below<T>(&mut self, field: &str, value: T, limit_field: &str, limit: T) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if value >= limit {
            let limit_field = self.path(limit_field);
            return self.fail(
                field,
                Problem::NotBelow {
                    value: value.to_string(),
                    limit_field,
                },
            );
        }
        self
    }

    /// Text holds more than whitespace
    pub fn not_blank(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            return self.fail(field, Problem::Blank);
        }
        self
    }

    /// At least one entry, and no blank ones
    pub fn non_empty_list<S: AsRef<str>>(&mut self, field: &str, values: &[S]) -> &mut Self {
        if values.is_empty() {
            return self.fail(field, Problem::NoEntries);
        }
        for (i, value) in values.iter().enumerate() {
            self.not_blank(&format!("{}[{}]", field, i), value.as_ref());
        }
        self
    }

    /// Records a failed custom check
    pub fn check(&mut self, field: &str, ok: bool, problem: Problem) -> &mut Self {
        if !ok {
            return self.fail(field, problem);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}
