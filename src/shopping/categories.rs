use std::fmt;

use serde::{Deserialize, Serialize};

/// Supermarket section an ingredient is shelved under.
///
/// Declaration order is the classification order: the first section
/// with a matching keyword wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShoppingCategory {
    #[serde(rename = "Meat & Fish")]
    MeatAndFish,
    #[serde(rename = "Fresh Produce")]
    FreshProduce,
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    Pantry,
    Bakery,
    Frozen,
    Other,
}

impl ShoppingCategory {
    /// Classification order.
    pub const ALL: [ShoppingCategory; 7] = [
        ShoppingCategory::MeatAndFish,
        ShoppingCategory::FreshProduce,
        ShoppingCategory::DairyAndEggs,
        ShoppingCategory::Pantry,
        ShoppingCategory::Bakery,
        ShoppingCategory::Frozen,
        ShoppingCategory::Other,
    ];

    /// Order sections are walked in the shop.
    pub const DISPLAY_ORDER: [ShoppingCategory; 7] = [
        ShoppingCategory::FreshProduce,
        ShoppingCategory::MeatAndFish,
        ShoppingCategory::DairyAndEggs,
        ShoppingCategory::Bakery,
        ShoppingCategory::Pantry,
        ShoppingCategory::Frozen,
        ShoppingCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingCategory::MeatAndFish => "Meat & Fish",
            ShoppingCategory::FreshProduce => "Fresh Produce",
            ShoppingCategory::DairyAndEggs => "Dairy & Eggs",
            ShoppingCategory::Pantry => "Pantry",
            ShoppingCategory::Bakery => "Bakery",
            ShoppingCategory::Frozen => "Frozen",
            ShoppingCategory::Other => "Other",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ShoppingCategory::MeatAndFish => &[
                "chicken", "beef", "pork", "lamb", "fish", "salmon", "cod", "haddock", "tuna",
                "prawns", "mince", "sausage", "chop", "thigh", "breast", "fillet",
            ],
            ShoppingCategory::FreshProduce => &[
                "onion", "garlic", "carrot", "potato", "tomato", "pepper", "lettuce", "broccoli",
                "celery", "apple", "lemon", "vegetable", "salad", "herbs", "parsley", "dill",
            ],
            ShoppingCategory::DairyAndEggs => &[
                "milk",
                "butter",
                "cheese",
                "egg",
                "cream",
                "crème fraîche",
                "sour cream",
                "yogurt",
            ],
            ShoppingCategory::Pantry => &[
                "pasta",
                "rice",
                "flour",
                "oil",
                "stock",
                "sauce",
                "seasoning",
                "herbs",
                "spices",
                "salt",
                "pepper",
                "vinegar",
                "honey",
                "chutney",
                "ketchup",
                "breadcrumbs",
                "tin",
                "tomato purée",
                "beans",
                "chickpeas",
                "coconut milk",
                "soy sauce",
                "worcestershire",
            ],
            ShoppingCategory::Bakery => &["bread", "tortilla", "naan", "taco shells"],
            ShoppingCategory::Frozen => &["frozen", "peas", "sweetcorn", "stir-fry"],
            ShoppingCategory::Other => &[],
        }
    }

    /// Shelve an ingredient line by case-insensitive keyword match.
    pub fn classify(ingredient: &str) -> ShoppingCategory {
        let lower = ingredient.to_lowercase();
        ShoppingCategory::ALL
            .into_iter()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
            .unwrap_or(ShoppingCategory::Other)
    }
}

impl fmt::Display for ShoppingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ShoppingCategory::classify("Chicken breast"), ShoppingCategory::MeatAndFish);
        assert_eq!(ShoppingCategory::classify("Carrot"), ShoppingCategory::FreshProduce);
        assert_eq!(ShoppingCategory::classify("Quinoa"), ShoppingCategory::Other);
        assert_eq!(ShoppingCategory::classify("2 free-range EGGS"), ShoppingCategory::DairyAndEggs);
        assert_eq!(ShoppingCategory::classify("Wholemeal bread"), ShoppingCategory::Bakery);
    }

    #[test]
    fn test_first_category_in_order_wins() {
        // "pepper" is both produce and pantry; produce is declared first.
        assert_eq!(ShoppingCategory::classify("Black pepper"), ShoppingCategory::FreshProduce);
        // "chicken stock" hits meat before pantry.
        assert_eq!(ShoppingCategory::classify("500ml chicken stock"), ShoppingCategory::MeatAndFish);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ShoppingCategory::DairyAndEggs.to_string(), "Dairy & Eggs");
        assert_eq!(
            serde_json::to_string(&ShoppingCategory::MeatAndFish).unwrap(),
            "\"Meat & Fish\""
        );
    }
}
