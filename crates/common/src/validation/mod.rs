//! Field validation for wizard gates
//!
//! Each gate collects every failing check into a [`Validator`] instead of
//! bailing on the first bad field, so the console can report everything
//! wrong with a step in one pass. [`ValidationError`] carries the per-field
//! breakdown and renders as a single line for terminal output.

use std::fmt;

/// Result alias for operations that fail with field-level errors
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One problem with one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulated validation failures for one gate
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error carrying a single field problem
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { errors: vec![FieldError::new(field, message)] }
    }

    /// Record another field problem
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Fold another gate's failures into this one
    pub fn merge(&mut self, other: ValidationError) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// All problems recorded against one field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("Validation failed"),
            [only] => write!(f, "Validation failed: {}", only.message),
            many => {
                write!(f, "Validation failed with {} errors: ", many.len())?;
                for (i, error) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collects field checks for one gate
///
/// Checks chain and never fail early unless the validator was built with
/// [`Validator::stop_on_first`]; [`Validator::finalize`] turns whatever was
/// collected into a result.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
    prefix: Vec<String>,
    stop_on_first: bool,
}

impl Validator {
    /// Validator that records every failing check
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that keeps only the first failing check
    pub fn stop_on_first() -> Self {
        Self { stop_on_first: true, ..Self::default() }
    }

    /// Record a problem against a field, applying any scope prefix
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        if self.stop_on_first && !self.errors.is_empty() {
            return;
        }
        let field = field.into();
        if self.prefix.is_empty() {
            self.errors.push(field, message);
        } else {
            self.errors.push(format!("{}.{field}", self.prefix.join(".")), message);
        }
    }

    /// Require a non-blank string
    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
        self
    }

    /// Require a string to match a regex pattern
    pub fn require_match(&mut self, field: &str, value: &str, pattern: &str) -> &mut Self {
        match regex::Regex::new(pattern) {
            Ok(re) if re.is_match(value) => {}
            Ok(_) => self.add_error(field, format!("must match {pattern}")),
            Err(_) => self.add_error(field, "invalid pattern"),
        }
        self
    }

    /// Require a value at or above a lower bound
    pub fn require_at_least<T>(&mut self, field: &str, value: T, min: T) -> &mut Self
    where
        T: PartialOrd + fmt::Display,
    {
        if value < min {
            self.add_error(field, format!("must be at least {min}"));
        }
        self
    }

    /// Require a value at or below an upper bound
    pub fn require_at_most<T>(&mut self, field: &str, value: T, max: T) -> &mut Self
    where
        T: PartialOrd + fmt::Display,
    {
        if value > max {
            self.add_error(field, format!("must not exceed {max}"));
        }
        self
    }

    /// Require a minimum number of items
    pub fn require_items<T>(&mut self, field: &str, items: &[T], min: usize) -> &mut Self {
        if items.len() < min {
            self.add_error(field, format!("must contain at least {min} items"));
        }
        self
    }

    /// Run checks under a field scope; their errors read "scope.field"
    pub fn scoped<F>(&mut self, scope: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Validator),
    {
        self.prefix.push(scope.to_string());
        f(self);
        self.prefix.pop();
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.error_count()
    }

    /// Consume the validator, failing if any check recorded a problem
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
