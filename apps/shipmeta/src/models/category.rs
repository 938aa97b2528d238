//! Closed store category taxonomy.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The twelve categories the classifier can hint, plus the fallback.
///
/// Declaration order is the taxonomy order: when several categories are
/// hinted, the earliest one becomes the primary category.
pub enum Category {
    #[serde(rename = "HEALTH_AND_FITNESS")]
    HealthFitness,
    #[serde(rename = "PRODUCTIVITY")]
    Productivity,
    #[serde(rename = "FINANCE")]
    Finance,
    #[serde(rename = "EDUCATION")]
    Education,
    #[serde(rename = "FOOD_AND_DRINK")]
    FoodDrink,
    #[serde(rename = "TRAVEL")]
    Travel,
    #[serde(rename = "MUSIC")]
    Music,
    #[serde(rename = "PHOTO_AND_VIDEO")]
    Photography,
    #[serde(rename = "SOCIAL_NETWORKING")]
    Social,
    #[serde(rename = "LIFESTYLE")]
    Lifestyle,
    #[serde(rename = "WEATHER")]
    Weather,
    #[serde(rename = "GAMES")]
    Games,
    /// Used only when no category is hinted.
    #[serde(rename = "UTILITIES")]
    Utilities,
}

impl Category {
    /// Categories the classifier may return (fallback excluded).
    pub const TAXONOMY: [Category; 12] = [
        Category::HealthFitness,
        Category::Productivity,
        Category::Finance,
        Category::Education,
        Category::FoodDrink,
        Category::Travel,
        Category::Music,
        Category::Photography,
        Category::Social,
        Category::Lifestyle,
        Category::Weather,
        Category::Games,
    ];

    pub const FALLBACK: Category = Category::Utilities;

    /// Store-side category identifier.
    pub fn store_id(&self) -> &'static str {
        match self {
            Category::HealthFitness => "HEALTH_AND_FITNESS",
            Category::Productivity => "PRODUCTIVITY",
            Category::Finance => "FINANCE",
            Category::Education => "EDUCATION",
            Category::FoodDrink => "FOOD_AND_DRINK",
            Category::Travel => "TRAVEL",
            Category::Music => "MUSIC",
            Category::Photography => "PHOTO_AND_VIDEO",
            Category::Social => "SOCIAL_NETWORKING",
            Category::Lifestyle => "LIFESTYLE",
            Category::Weather => "WEATHER",
            Category::Games => "GAMES",
            Category::Utilities => "UTILITIES",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.store_id())
    }
}
