use core::fmt;
use core::str::FromStr;

/// The fixed set of shelf categories a [`Book`](crate::Book) belongs to.
///
/// Serialized (and displayed) with the human-readable names the original
/// collection format uses: `"Non-Fiction"`, `"Self-Help"`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Novels, short stories, and other invented narratives.
    Fiction,
    /// Factual prose that is not covered by a more specific category.
    #[cfg_attr(feature = "serde", serde(rename = "Non-Fiction"))]
    NonFiction,
    /// Programming, engineering, and computing.
    Technology,
    /// Personal development.
    #[cfg_attr(feature = "serde", serde(rename = "Self-Help"))]
    SelfHelp,
    /// Lives of real people.
    Biography,
    /// Natural sciences.
    Science,
    /// Historical accounts.
    History,
    /// Management, economics, and entrepreneurship.
    Business,
    /// Everything else.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 9] = [
        Category::Fiction,
        Category::NonFiction,
        Category::Technology,
        Category::SelfHelp,
        Category::Biography,
        Category::Science,
        Category::History,
        Category::Business,
        Category::Other,
    ];

    /// The human-readable name, identical to the serialized form.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::Technology => "Technology",
            Category::SelfHelp => "Self-Help",
            Category::Biography => "Biography",
            Category::Science => "Science",
            Category::History => "History",
            Category::Business => "Business",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category \"{}\" (expected one of: ", self.0)?;
        for (i, cat) in Category::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(cat.name())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|cat| cat.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A category selector for list views: everything, or one shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The sentinel meaning "no category restriction".
    All,
    /// Restrict to a single category.
    Only(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(cat) => f.write_str(cat.name()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("All") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(cat: Category) -> Self {
        CategoryFilter::Only(cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_through_from_str() {
        for cat in Category::ALL {
            assert_eq!(cat.name().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("fiction".parse::<Category>().unwrap(), Category::Fiction);
        assert_eq!("non-fiction".parse::<Category>().unwrap(), Category::NonFiction);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("Poetry".parse::<Category>().is_err());
    }

    #[test]
    fn filter_parses_all_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "History".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::History)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_original_names() {
        let json = serde_json::to_string(&Category::NonFiction).unwrap();
        assert_eq!(json, "\"Non-Fiction\"");
        let back: Category = serde_json::from_str("\"Self-Help\"").unwrap();
        assert_eq!(back, Category::SelfHelp);
    }
}
