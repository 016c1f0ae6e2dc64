//! Spending category model
//!
//! A category is keyed by its name. Expenses refer to categories by name,
//! so names must be unique within a tracker.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MAX_AMOUNT};

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// A spending category with a budget for the viewed window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (unique key)
    pub name: String,

    /// Budgeted amount
    pub budget: Money,

    /// Emoji shown next to the name
    #[serde(default)]
    pub emoji: String,

    /// Display color as a hex string, e.g. "#74b1b2"
    #[serde(default)]
    pub color: String,
}

impl Category {
    /// Create a new category
    pub fn new(
        name: impl Into<String>,
        budget: Money,
        emoji: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            budget,
            emoji: emoji.into(),
            color: color.into(),
        }
    }

    /// Name prefixed with the emoji, as shown in lists
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.emoji, self.name)
        }
    }

    /// Parse the hex color into RGB components
    ///
    /// Accepts "#rrggbb" and "#rgb"; anything else yields `None`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some((
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some((digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !self.budget.is_positive() {
            return Err(CategoryValidationError::NonPositiveBudget);
        }

        if self.budget > MAX_AMOUNT {
            return Err(CategoryValidationError::BudgetTooLarge);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The categories a fresh tracker starts with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Entertainment", Money::from_units(200), "🎭", "#74b1b2"),
        Category::new("Food (Dine Out)", Money::from_units(400), "🍽️", "#db686b"),
        Category::new("Transport", Money::from_units(80), "🚗", "#bd96c2"),
        Category::new("Groceries", Money::from_units(50), "🛒", "#f2ca73"),
        Category::new(
            "Food (Dabao / Home Delivery)",
            Money::from_units(240),
            "🥡",
            "#a47b6a",
        ),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveBudget,
    BudgetTooLarge,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NonPositiveBudget => write!(f, "Budget must be greater than zero"),
            Self::BudgetTooLarge => {
                write!(f, "Budget exceeds the maximum of {}", MAX_AMOUNT.format_plain())
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Groceries", Money::from_units(50), "🛒", "#f2ca73");
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.budget.cents(), 5000);
        assert_eq!(category.label(), "🛒 Groceries");
    }

    #[test]
    fn test_label_without_emoji() {
        let category = Category::new("Gifts", Money::from_units(10), "", "");
        assert_eq!(category.label(), "Gifts");
    }

    #[test]
    fn test_rgb() {
        let mut category = Category::new("Transport", Money::from_units(80), "🚗", "#bd96c2");
        assert_eq!(category.rgb(), Some((0xbd, 0x96, 0xc2)));

        category.color = "#fff".into();
        assert_eq!(category.rgb(), Some((255, 255, 255)));

        category.color = "blue".into();
        assert_eq!(category.rgb(), None);

        category.color = "#12345g".into();
        assert_eq!(category.rgb(), None);
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Valid", Money::from_units(1), "", "");
        assert!(category.validate().is_ok());

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));

        category.name = "Valid".into();
        category.budget = Money::zero();
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NonPositiveBudget)
        );

        category.budget = MAX_AMOUNT + Money::from_cents(1);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::BudgetTooLarge)
        );
    }

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults[0].name, "Entertainment");
        assert_eq!(defaults[3].budget, Money::from_units(50));
        assert!(defaults.iter().all(|c| c.validate().is_ok()));
        assert!(defaults.iter().all(|c| c.rgb().is_some()));
    }
}
