//! Validator builder for fluent validation API.

use std::sync::Arc;

use crate::error::ValidationError;

/// Boxed whole-record rule.
type Rule<T> = Box<dyn Fn(&T) -> Result<(), ValidationError> + Send + Sync>;

/// Projection from a record to one of its string fields.
type Accessor<T> = Arc<dyn Fn(&T) -> &str + Send + Sync>;

/// Ordered list of rules over a record of type `T`.
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new()
///     .field(|r: &Signup| r.name.as_str())
///         .required(ValidationError::missing([Field::Username]))
///         .min_length(3, ValidationError::UsernameTooShort)
///     .build();
///
/// validator.validate(&signup)?;
/// ```
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T: 'static> Validator<T> {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a whole-record rule that produces its own error.
    pub fn check<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(f));
        self
    }

    /// Add a whole-record predicate that fails with `err`.
    pub fn rule<F>(self, f: F, err: ValidationError) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.check(move |target| if f(target) { Ok(()) } else { Err(err.clone()) })
    }

    /// Start adding rules for one string field.
    pub fn field<A>(self, accessor: A) -> FieldBuilder<T>
    where
        A: Fn(&T) -> &str + Send + Sync + 'static,
    {
        FieldBuilder {
            validator: self,
            accessor: Arc::new(accessor),
        }
    }

    /// Run the rules in order and return the first failure.
    pub fn validate(&self, target: &T) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule(target))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules were added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: 'static> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<T> {
    validator: Validator<T>,
    accessor: Accessor<T>,
}

impl<T: 'static> FieldBuilder<T> {
    /// Add a custom rule on the field value.
    pub fn rule<F>(mut self, f: F, err: ValidationError) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let accessor = Arc::clone(&self.accessor);
        self.validator = self.validator.rule(move |target| f(accessor(target)), err);
        self
    }

    /// Require the field to be non-empty. Whitespace counts as content.
    pub fn required(self, err: ValidationError) -> Self {
        self.rule(|v| !v.is_empty(), err)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, err: ValidationError) -> Self {
        self.rule(move |v| v.chars().count() >= min, err)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, err: ValidationError) -> Self {
        self.rule(move |v| v.chars().count() <= max, err)
    }

    /// Require the value to match a regex pattern.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn pattern(self, pattern: &str, err: ValidationError) -> Self {
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v| re.is_match(v), err)
    }

    /// Require the value to equal another field of the same record.
    pub fn equals_field<B>(mut self, other: B, err: ValidationError) -> Self
    where
        B: Fn(&T) -> &str + Send + Sync + 'static,
    {
        let accessor = Arc::clone(&self.accessor);
        self.validator = self
            .validator
            .rule(move |target| accessor(target) == other(target), err);
        self
    }

    /// Continue to the next field.
    pub fn field<A>(self, accessor: A) -> FieldBuilder<T>
    where
        A: Fn(&T) -> &str + Send + Sync + 'static,
    {
        self.validator.field(accessor)
    }

    /// Finish this field and add a whole-record rule.
    pub fn check<F>(self, f: F) -> Validator<T>
    where
        F: Fn(&T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validator.check(f)
    }

    /// Finish building.
    pub fn build(self) -> Validator<T> {
        self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    struct Pair {
        left: String,
        right: String,
    }

    fn pair(left: &str, right: &str) -> Pair {
        Pair {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    #[test]
    fn test_empty_validator_accepts_everything() {
        let validator: Validator<Pair> = Validator::new();
        assert!(validator.is_empty());
        assert_eq!(validator.validate(&pair("", "")), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let validator = Validator::new()
            .field(|p: &Pair| p.left.as_str())
            .required(ValidationError::missing([Field::Username]))
            .min_length(3, ValidationError::UsernameTooShort)
            .build();

        assert_eq!(validator.len(), 2);
        assert_eq!(
            validator.validate(&pair("", "")),
            Err(ValidationError::missing([Field::Username]))
        );
        assert_eq!(
            validator.validate(&pair("ab", "")),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(validator.validate(&pair("abc", "")), Ok(()));
    }

    #[test]
    fn test_required_keeps_whitespace() {
        let validator = Validator::new()
            .field(|p: &Pair| p.left.as_str())
            .required(ValidationError::missing([Field::Username]))
            .build();

        assert_eq!(validator.validate(&pair(" ", "")), Ok(()));
    }

    #[test]
    fn test_lengths_count_characters() {
        let validator = Validator::new()
            .field(|p: &Pair| p.left.as_str())
            .min_length(3, ValidationError::UsernameTooShort)
            .max_length(4, ValidationError::InvalidEmail)
            .build();

        // Three characters, six bytes.
        assert_eq!(validator.validate(&pair("éèê", "")), Ok(()));
        assert_eq!(
            validator.validate(&pair("abcde", "")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_equals_field() {
        let validator = Validator::new()
            .field(|p: &Pair| p.left.as_str())
            .equals_field(|p: &Pair| p.right.as_str(), ValidationError::PasswordMismatch)
            .build();

        assert_eq!(validator.validate(&pair("x", "x")), Ok(()));
        assert_eq!(
            validator.validate(&pair("x", "y")),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_pattern_and_check_chain() {
        let validator = Validator::new()
            .field(|p: &Pair| p.left.as_str())
            .pattern(r"^[0-9]+$", ValidationError::DateFormat)
            .check(|p: &Pair| {
                if p.right.is_empty() {
                    Err(ValidationError::missing([Field::Email]))
                } else {
                    Ok(())
                }
            })
            .rule(|p: &Pair| p.right != "bad", ValidationError::InvalidEmail);

        assert_eq!(
            validator.validate(&pair("12a", "ok")),
            Err(ValidationError::DateFormat)
        );
        assert_eq!(
            validator.validate(&pair("12", "")),
            Err(ValidationError::missing([Field::Email]))
        );
        assert_eq!(
            validator.validate(&pair("12", "bad")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validator.validate(&pair("12", "good")), Ok(()));
    }

    #[test]
    #[should_panic(expected = "Invalid regex pattern")]
    fn test_invalid_pattern_panics() {
        let _ = Validator::new()
            .field(|p: &Pair| p.left.as_str())
            .pattern("(", ValidationError::DateFormat);
    }
}
