//! Agent catalog
//!
//! The fixed in-memory agent list behind the store page, plus the
//! free-text/category filter applied to it.

use serde::{Deserialize, Serialize};

/// Category an agent is published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productivity,
    Travel,
    Finance,
    Social,
}

impl Category {
    /// Convert to the display string used by the store
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Productivity => "productivity",
            Category::Travel => "travel",
            Category::Finance => "finance",
            Category::Social => "social",
        }
    }

    /// Parse from a display string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "productivity" => Some(Category::Productivity),
            "travel" => Some(Category::Travel),
            "finance" => Some(Category::Finance),
            "social" => Some(Category::Social),
            _ => None,
        }
    }

    /// All categories, in store tab order
    pub fn all() -> &'static [Category] {
        &[
            Category::Productivity,
            Category::Travel,
            Category::Finance,
            Category::Social,
        ]
    }
}

/// Category selector on the store page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Convert to the display string used by the store tabs
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(cat) => cat.as_str(),
        }
    }

    /// Parse from a display string ("all" or a category name)
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            Some(CategoryFilter::All)
        } else {
            Category::parse(s).map(CategoryFilter::Only)
        }
    }

    /// Whether an agent in the given category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => *cat == category,
        }
    }

    /// All selector values, in store tab order ("all" first)
    pub fn all() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::all().iter().map(|c| CategoryFilter::Only(*c)));
        filters
    }
}

/// An agent offered in the store catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogAgent {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub rating: f32,
    pub installs: u32,
    pub creator: &'static str,
    pub tasks: &'static [&'static str],
}

/// The store catalog. Static; never mutated.
pub const CATALOG: &[CatalogAgent] = &[
    CatalogAgent {
        id: 1,
        name: "Email Assistant",
        description: "Compose, send, and manage emails with natural language commands",
        icon: "✉️",
        category: Category::Productivity,
        rating: 4.8,
        installs: 15432,
        creator: "ProductivityLabs",
        tasks: &["Compose Email", "Send Email", "Schedule Email"],
    },
    CatalogAgent {
        id: 2,
        name: "Travel Planner",
        description: "Book flights, hotels, and plan your entire trip through simple conversation",
        icon: "✈️",
        category: Category::Travel,
        rating: 4.7,
        installs: 12855,
        creator: "TravelGenius",
        tasks: &["Book Flight", "Find Hotels", "Create Itinerary"],
    },
    CatalogAgent {
        id: 3,
        name: "Finance Manager",
        description: "Track expenses, manage budgets, and get financial insights",
        icon: "💰",
        category: Category::Finance,
        rating: 4.5,
        installs: 9876,
        creator: "FinWizards",
        tasks: &["Track Expenses", "Create Budget", "Financial Reports"],
    },
    CatalogAgent {
        id: 4,
        name: "Social Media Assistant",
        description: "Create, schedule, and manage posts across all your social media accounts",
        icon: "📱",
        category: Category::Social,
        rating: 4.6,
        installs: 11430,
        creator: "SocialBoost",
        tasks: &["Create Posts", "Schedule Content", "Analyze Engagement"],
    },
    CatalogAgent {
        id: 5,
        name: "Meeting Scheduler",
        description: "Schedule meetings, send invites, and manage your calendar without the back-and-forth",
        icon: "📅",
        category: Category::Productivity,
        rating: 4.9,
        installs: 18753,
        creator: "ProductivityLabs",
        tasks: &["Schedule Meeting", "Send Invites", "Find Available Slots"],
    },
    CatalogAgent {
        id: 6,
        name: "Document Summarizer",
        description: "Automatically create concise summaries of long documents, articles, and reports",
        icon: "📄",
        category: Category::Productivity,
        rating: 4.7,
        installs: 14567,
        creator: "AIDocTools",
        tasks: &["Summarize Text", "Extract Key Points", "Create TL;DR"],
    },
];

/// Look up a catalog agent by id
pub fn find_agent(id: u32) -> Option<&'static CatalogAgent> {
    CATALOG.iter().find(|agent| agent.id == id)
}

/// Filter the catalog by free-text term and category selector.
///
/// An agent matches when its name or description contains the term
/// case-insensitively and its category passes the filter. Order is preserved.
pub fn filter_catalog<'a>(
    agents: &'a [CatalogAgent],
    term: &str,
    filter: CategoryFilter,
) -> Vec<&'a CatalogAgent> {
    let term = term.to_lowercase();
    agents
        .iter()
        .filter(|agent| {
            let matches_term = agent.name.to_lowercase().contains(&term)
                || agent.description.to_lowercase().contains(&term);
            matches_term && filter.matches(agent.category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<u32> = CATALOG.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let filtered = filter_catalog(CATALOG, "", CategoryFilter::All);
        assert_eq!(filtered.len(), CATALOG.len());
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let filtered = filter_catalog(CATALOG, "EMAIL", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Email Assistant");
    }

    #[test]
    fn test_filter_by_description() {
        // "budgets" appears only in the Finance Manager description
        let filtered = filter_catalog(CATALOG, "budgets", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Finance Manager");
    }

    #[test]
    fn test_filter_by_category() {
        let filtered = filter_catalog(CATALOG, "", CategoryFilter::Only(Category::Productivity));
        assert_eq!(filtered.len(), 3);
        assert!(
            filtered
                .iter()
                .all(|a| a.category == Category::Productivity)
        );
    }

    #[test]
    fn test_filter_term_and_category() {
        // "schedule" also matches the Social Media Assistant description, but
        // the category gate drops it
        let filtered = filter_catalog(
            CATALOG,
            "schedule",
            CategoryFilter::Only(Category::Productivity),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Meeting Scheduler");
    }

    #[test]
    fn test_filter_preserves_order() {
        let filtered = filter_catalog(CATALOG, "", CategoryFilter::Only(Category::Productivity));
        let ids: Vec<u32> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 5, 6]);
    }

    #[test]
    fn test_filter_no_match() {
        let filtered = filter_catalog(CATALOG, "blockchain", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("travel"),
            Some(CategoryFilter::Only(Category::Travel))
        );
        assert_eq!(CategoryFilter::parse("gaming"), None);
    }

    #[test]
    fn test_category_roundtrip() {
        for cat in Category::all() {
            assert_eq!(Category::parse(cat.as_str()), Some(*cat));
        }
    }

    #[test]
    fn test_find_agent() {
        assert_eq!(find_agent(2).map(|a| a.name), Some("Travel Planner"));
        assert!(find_agent(99).is_none());
    }
}
