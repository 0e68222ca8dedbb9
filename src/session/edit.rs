//! Editable coefficient form
//!
//! Presents the current coefficients as three named text fields and
//! validates a submission as a whole.

use std::fmt;

use thiserror::Error;

use crate::domain::Coefficients;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Invalid {name} value: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// A named, editable text field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
}

/// Form exposing `a`, `b` and `c` for editing
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientForm {
    pub fields: [Field; 3],
}

impl CoefficientForm {
    /// Prefill the fields with the current coefficients
    pub fn from_coefficients(coefs: &Coefficients) -> Self {
        let values = coefs.as_array();
        Self {
            fields: std::array::from_fn(|i| Field {
                name: Coefficients::NAMES[i],
                value: values[i].to_string(),
            }),
        }
    }

    /// Validate submitted text for all three fields
    ///
    /// Every value must parse as a finite number; the first bad field rejects
    /// the whole submission and the form keeps its previous values.
    pub fn submit<S: AsRef<str>>(&mut self, input: &[S; 3]) -> Result<Coefficients, EditError> {
        let mut parsed = [0.0; 3];
        for (i, text) in input.iter().enumerate() {
            parsed[i] = parse_finite(self.fields[i].name, text.as_ref())?;
        }
        for (field, text) in self.fields.iter_mut().zip(input) {
            field.value = text.as_ref().trim().to_string();
        }
        let [a, b, c] = parsed;
        Ok(Coefficients::new(a, b, c))
    }
}

impl fmt::Display for CoefficientForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", field.name, field.value)?;
        }
        Ok(())
    }
}

fn parse_finite(name: &'static str, text: &str) -> Result<f64, EditError> {
    let invalid = || EditError::InvalidValue {
        name,
        value: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CoefficientForm {
        CoefficientForm::from_coefficients(&Coefficients::new(1.0, -0.5, 2.0))
    }

    #[test]
    fn test_prefilled_fields() {
        let form = form();
        assert_eq!(form.fields[0].name, "a");
        assert_eq!(form.fields[1].value, "-0.5");
        assert_eq!(form.to_string(), "a = 1\nb = -0.5\nc = 2");
    }

    #[test]
    fn test_submit_valid() {
        let mut form = form();
        let coefs = form.submit(&[" 3", "0", "-1.25e1 "]).unwrap();
        assert_eq!(coefs, Coefficients::new(3.0, 0.0, -12.5));
        assert_eq!(form.fields[0].value, "3");
        assert_eq!(form.fields[2].value, "-1.25e1");
    }

    #[test]
    fn test_submit_rejects_whole_batch() {
        let mut form = form();
        let before = form.clone();
        let err = form.submit(&["2", "abc", "1"]).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidValue {
                name: "b",
                value: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid b value: \"abc\"");
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_rejects_non_finite_and_empty() {
        let mut form = form();
        assert!(form.submit(&["inf", "0", "0"]).is_err());
        assert!(form.submit(&["0", "NaN", "0"]).is_err());
        assert!(form.submit(&["0", "0", ""]).is_err());
    }
}
