use std::fmt;

use serde::{Deserialize, Serialize};

// structs and types

pub type ProductUuid = u32;

// the style filter offered on the catalog, besides "all"
pub const PRODUCT_CATEGORIES: [&str; 5] = ["IPA", "Lager", "Stout", "Wheat Beer", "Pilsner"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    #[serde(rename = "Limited Edition")]
    LimitedEdition,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    Archived,
}

impl Availability {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Available => "badge-available",
            Self::LimitedEdition => "badge-limited",
            Self::ComingSoon => "badge-coming-soon",
            Self::Archived => "badge-archived",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Available => "Available",
            Self::LimitedEdition => "Limited Edition",
            Self::ComingSoon => "Coming Soon",
            Self::Archived => "Archived",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductUuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rating: f32,
    pub review_count: u32,
    pub feedback_count: u32,
    pub growth: u32,
    pub status: Availability,
    pub category: String,
}

impl Product {
    // number of filled stars out of five
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

// tasting notes, strength and bitterness keyed by style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TastingProfile {
    pub notes: &'static str,
    pub abv: &'static str,
    pub ibu: &'static str,
}

pub fn tasting_profile(category: &str) -> TastingProfile {
    let notes = match category {
        "IPA" => "Bold hoppy flavor with citrus notes and a balanced malty backbone.",
        "Wheat Beer" => "Light and refreshing with a smooth wheat character and subtle spice.",
        "Stout" => "Rich and creamy with notes of chocolate, coffee, and roasted malt.",
        "Lager" => "Clean and crisp with a light body and refreshing finish.",
        "Pilsner" => "Light golden color with a delicate hop aroma and clean taste.",
        _ => "",
    };

    let (abv, ibu) = match category {
        "IPA" => ("6.2%", "65"),
        "Stout" => ("7.1%", "35"),
        "Wheat Beer" => ("4.8%", "15"),
        _ => ("5.2%", "25"),
    };

    TastingProfile { notes, abv, ibu }
}

// case-insensitive search over name and description, plus an exact style match
//
// a category of "all" disables the style filter
pub fn filter_products<'a>(products: &'a [Product], search: &str, category: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();

    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .filter(|product| category == "all" || product.category == category)
        .collect()
}

fn product(
    id: ProductUuid,
    name: &str,
    description: &str,
    image: &str,
    (rating, review_count, feedback_count, growth): (f32, u32, u32, u32),
    status: Availability,
    category: &str,
) -> Product {
    Product {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        rating,
        review_count,
        feedback_count,
        growth,
        status,
        category: category.to_owned(),
    }
}

pub fn catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Kingfisher Ultra",
            "Premium lager with 4.8% alcohol content. Smooth, crisp taste with balanced hop character.",
            "https://images.unsplash.com/photo-1608270586620-248524c67de9?w=400&h=300&fit=crop",
            (4.2, 1247, 342, 8),
            Availability::Available,
            "Lager",
        ),
        product(
            2,
            "Bira 91 White",
            "Belgian-style wheat beer with coriander and orange peel. Light, refreshing with citrus notes.",
            "https://images.unsplash.com/photo-1535958636474-b021ee887b13?w=400&h=300&fit=crop",
            (4.5, 892, 234, 15),
            Availability::Available,
            "Wheat Beer",
        ),
        product(
            3,
            "Simba Stout",
            "Rich, dark stout with roasted malt flavors. Notes of chocolate and coffee with creamy texture.",
            "https://images.unsplash.com/photo-1618885472179-5e474019f2a9?w=400&h=300&fit=crop",
            (4.6, 567, 178, 12),
            Availability::Available,
            "Stout",
        ),
        product(
            4,
            "Haywards 5000",
            "Strong beer with 7% alcohol content. Full-bodied with robust malt character and hoppy finish.",
            "https://images.unsplash.com/photo-1571613316887-6f8d5cbf7ef7?w=400&h=300&fit=crop",
            (4.1, 1834, 456, 6),
            Availability::Available,
            "Lager",
        ),
        product(
            5,
            "Toit Basmati Blonde Ale",
            "Craft blonde ale brewed with basmati rice. Light, smooth with subtle grain sweetness.",
            "https://images.unsplash.com/photo-1594736797933-d0401ba2fe65?w=400&h=300&fit=crop",
            (4.7, 423, 134, 22),
            Availability::LimitedEdition,
            "IPA",
        ),
        product(
            6,
            "Godfather Super 8",
            "Premium strong beer with 8% alcohol. Complex malt profile with balanced bitterness.",
            "https://images.unsplash.com/photo-1612528443702-f6741f70a049?w=400&h=300&fit=crop",
            (4.3, 678, 189, 10),
            Availability::Available,
            "Lager",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_and_all_returns_everything() {
        let products = catalog();
        assert_eq!(filter_products(&products, "", "all").len(), products.len());
    }

    #[test]
    fn search_is_case_insensitive_over_description() {
        let products = catalog();
        let found = filter_products(&products, "CHOCOLATE", "all");
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Simba Stout"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let products = catalog();
        let lagers = filter_products(&products, "", "Lager");
        assert_eq!(lagers.len(), 3);
        assert!(lagers.iter().all(|p| p.category == "Lager"));

        assert!(filter_products(&products, "", "Pilsner").is_empty());
    }

    #[test]
    fn search_and_category_combine() {
        let products = catalog();
        assert!(filter_products(&products, "stout", "Lager").is_empty());
        assert_eq!(filter_products(&products, "strong", "Lager").len(), 2);
    }

    #[test]
    fn tasting_profile_falls_back_for_unlisted_styles() {
        assert_eq!(tasting_profile("Stout").abv, "7.1%");
        assert_eq!(tasting_profile("IPA").ibu, "65");

        let lager = tasting_profile("Lager");
        assert_eq!((lager.abv, lager.ibu), ("5.2%", "25"));

        let unknown = tasting_profile("Mead");
        assert_eq!(unknown.notes, "");
        assert_eq!((unknown.abv, unknown.ibu), ("5.2%", "25"));
    }

    #[test]
    fn stars_are_floored() {
        let products = catalog();
        assert_eq!(products[0].full_stars(), 4);
        assert_eq!(products[4].full_stars(), 4);
    }
}
