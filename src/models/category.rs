//! Expense and budget category enumerations
//!
//! Every expense category maps into exactly one of the three budget buckets
//! (Necessities, Wants, Savings). The mapping table lives here, in one place,
//! and is used by both the store and the report layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    Shopping,
    Entertainment,
    Health,
    Education,
    Savings,
    Other,
}

/// One of the three top-level budget buckets of the 70-20-10 rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetCategory {
    Necessities,
    Wants,
    Savings,
}

impl ExpenseCategory {
    /// All expense categories, in display order
    pub const ALL: [ExpenseCategory; 9] = [
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Shopping,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Savings,
        Self::Other,
    ];

    /// The authoritative category-to-budget-bucket mapping
    pub const fn budget_category(&self) -> BudgetCategory {
        match self {
            Self::Food | Self::Transport | Self::Bills | Self::Health | Self::Education => {
                BudgetCategory::Necessities
            }
            Self::Shopping | Self::Entertainment | Self::Other => BudgetCategory::Wants,
            Self::Savings => BudgetCategory::Savings,
        }
    }

    /// The category name as shown to the user
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl BudgetCategory {
    /// All three budget buckets, in rule order
    pub const ALL: [BudgetCategory; 3] = [Self::Necessities, Self::Wants, Self::Savings];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Necessities => "Necessities",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Error returned when parsing an unrecognized category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        assert_eq!(ExpenseCategory::Food.budget_category(), BudgetCategory::Necessities);
        assert_eq!(ExpenseCategory::Transport.budget_category(), BudgetCategory::Necessities);
        assert_eq!(ExpenseCategory::Bills.budget_category(), BudgetCategory::Necessities);
        assert_eq!(ExpenseCategory::Health.budget_category(), BudgetCategory::Necessities);
        assert_eq!(ExpenseCategory::Education.budget_category(), BudgetCategory::Necessities);
        assert_eq!(ExpenseCategory::Shopping.budget_category(), BudgetCategory::Wants);
        assert_eq!(ExpenseCategory::Entertainment.budget_category(), BudgetCategory::Wants);
        assert_eq!(ExpenseCategory::Other.budget_category(), BudgetCategory::Wants);
        assert_eq!(ExpenseCategory::Savings.budget_category(), BudgetCategory::Savings);
    }

    #[test]
    fn test_every_category_maps_to_a_bucket() {
        for category in ExpenseCategory::ALL {
            let bucket = category.budget_category();
            assert!(BudgetCategory::ALL.contains(&bucket));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(" Transport ".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Transport);
        assert!("Groceries".parse::<ExpenseCategory>().is_err());

        assert_eq!("wants".parse::<BudgetCategory>().unwrap(), BudgetCategory::Wants);
        assert!("Luxuries".parse::<BudgetCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&ExpenseCategory::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");

        let bucket: BudgetCategory = serde_json::from_str("\"Necessities\"").unwrap();
        assert_eq!(bucket, BudgetCategory::Necessities);
    }
}
