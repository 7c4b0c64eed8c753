// Validation errors

use thiserror::Error;

/// The text field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Description => write!(f, "description"),
        }
    }
}

/// Raised by [`add`] when the title or description is blank after trimming.
///
/// The only error in the system. The store rejects the insertion with no
/// state change; surfacing it to the user is the rendering layer's job.
///
/// [`add`]: crate::store::TaskStore::add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} must not be empty")]
pub struct EmptyFieldError {
    pub field: Field,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_the_field() {
        let err = EmptyFieldError {
            field: Field::Title,
        };
        assert_eq!(err.to_string(), "title must not be empty");

        let err = EmptyFieldError {
            field: Field::Description,
        };
        assert_eq!(err.to_string(), "description must not be empty");
    }
}
