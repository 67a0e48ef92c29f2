//! Expense categories
//!
//! The backend uses a fixed set of lowercase category names. Names outside
//! that set are kept verbatim as [`Category::Custom`] so they show up as
//! their own bucket instead of being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Healthcare,
    Education,
    Shopping,
    Rent,
    Other,
    /// A category name the known set doesn't cover
    Custom(String),
}

impl Category {
    /// The known categories, in the order the expense form lists them
    pub const KNOWN: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Education,
        Category::Shopping,
        Category::Rent,
        Category::Other,
    ];

    /// Resolve a category from its wire name
    ///
    /// Known names match case-insensitively; anything else becomes `Custom`.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "utilities" => Self::Utilities,
            "entertainment" => Self::Entertainment,
            "healthcare" => Self::Healthcare,
            "education" => Self::Education,
            "shopping" => Self::Shopping,
            "rent" => Self::Rent,
            "other" => Self::Other,
            _ => Self::Custom(trimmed.to_string()),
        }
    }

    /// The wire name (lowercase for known categories)
    pub fn name(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Shopping => "shopping",
            Self::Rent => "rent",
            Self::Other => "other",
            Self::Custom(name) => name,
        }
    }

    /// Check if this category is outside the known set
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_round_trip() {
        for category in Category::KNOWN.iter() {
            assert_eq!(&Category::from_name(category.name()), category);
            assert!(!category.is_custom());
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Category::from_name("Food"), Category::Food);
        assert_eq!(Category::from_name(" RENT "), Category::Rent);
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let category = Category::from_name("pets");
        assert_eq!(category, Category::Custom("pets".into()));
        assert!(category.is_custom());
        assert_eq!(category.to_string(), "pets");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Category::Healthcare).unwrap();
        assert_eq!(json, "\"healthcare\"");

        let custom: Category = serde_json::from_str("\"gifts\"").unwrap();
        assert_eq!(custom, Category::Custom("gifts".into()));
    }
}
