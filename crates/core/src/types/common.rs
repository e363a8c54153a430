//! Common traits shared across domain models

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_trait() {
        struct Shelf {
            capacity: i32,
        }

        impl Validator for Shelf {
            fn validate(&self) -> Result<(), Vec<String>> {
                if self.capacity < 0 {
                    Err(vec!["Capacity must be positive".to_string()])
                } else {
                    Ok(())
                }
            }
        }

        assert!(Shelf { capacity: 10 }.is_valid());
        assert!(!Shelf { capacity: -5 }.is_valid());
    }
}
