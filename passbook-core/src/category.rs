//! Spending categories matched deterministically from descriptions

use serde::{Deserialize, Serialize};

/// Transaction categories recognised by keyword
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "utilities")]
    Utilities,
}

/// Keyword table, checked in order. The first category with a hit wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["starbucks", "coffee", "restaurant", "pizza", "burger", "food", "cafe"],
    ),
    (
        Category::Transport,
        &["uber", "taxi", "ola", "bus", "train", "flight", "airport"],
    ),
    (
        Category::Shopping,
        &["amazon", "flipkart", "mall", "store", "shop", "order"],
    ),
    (
        Category::Utilities,
        &["electric", "water", "gas", "internet", "phone", "bill"],
    ),
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorize a (cleaned) description by case-insensitive substring match.
pub fn categorize(description: &str) -> Option<Category> {
    let desc = description.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_hits() {
        assert_eq!(categorize("STARBUCKS COFFEE MUMBAI"), Some(Category::Food));
        assert_eq!(categorize("Uber Ride Airport Drop"), Some(Category::Transport));
        assert_eq!(categorize("Amazon.in Order Shopping"), Some(Category::Shopping));
        assert_eq!(categorize("Electricity board"), Some(Category::Utilities));
    }

    #[test]
    fn test_table_order_wins() {
        // "coffee" (food) and "store" (shopping) both hit; food comes first
        assert_eq!(categorize("Coffee store"), Some(Category::Food));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(categorize("Salary ACME"), None);
        assert_eq!(categorize(""), None);
    }
}
