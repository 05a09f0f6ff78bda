//! Transient form input held by the tracker
//!
//! These are the raw strings behind the expense and budget inputs. They are
//! only interpreted when the user submits.

/// Raw text of the add/edit expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    /// Selected or typed category (empty = "Select Category")
    pub category: String,
    /// Amount as typed
    pub amount: String,
    /// Date as typed or picked
    pub date: String,
}

impl ExpenseForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every required field has a value
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty() && !self.amount.is_empty() && !self.date.is_empty()
    }

    /// Clear all inputs
    pub fn clear(&mut self) {
        self.category.clear();
        self.amount.clear();
        self.date.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ExpenseForm::new();
        assert!(!form.is_complete());
        assert_eq!(form, ExpenseForm::default());
    }

    #[test]
    fn test_is_complete_requires_all_fields() {
        let mut form = ExpenseForm {
            category: "Food".into(),
            amount: "12.5".into(),
            date: "2024-01-01".into(),
        };
        assert!(form.is_complete());

        form.amount.clear();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_zero_amount_counts_as_present() {
        let form = ExpenseForm {
            category: "Food".into(),
            amount: "0".into(),
            date: "2024-01-01".into(),
        };
        assert!(form.is_complete());
    }

    #[test]
    fn test_clear() {
        let mut form = ExpenseForm {
            category: "Food".into(),
            amount: "1".into(),
            date: "2024-01-01".into(),
        };
        form.clear();
        assert_eq!(form, ExpenseForm::new());
    }
}
