//! Static vehicle catalogs per brand
//!
//! Display data for the card grid. Filtering happens against the view's
//! search query; the catalog itself never changes.

use crate::model::brand::Brand;

/// A single vehicle card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub name: &'static str,
    pub tagline: &'static str,
}

const AUDI: &[Vehicle] = &[
    Vehicle {
        name: "A4",
        tagline: "Premium compact sedan",
    },
    Vehicle {
        name: "Q7",
        tagline: "Full-size luxury SUV",
    },
    Vehicle {
        name: "e-tron GT",
        tagline: "Electric performance sedan",
    },
];

const FORD: &[Vehicle] = &[
    Vehicle {
        name: "F-150",
        tagline: "America's best-selling truck",
    },
    Vehicle {
        name: "Mustang",
        tagline: "Iconic American muscle car",
    },
    Vehicle {
        name: "Explorer",
        tagline: "Family-friendly SUV",
    },
];

const LINCOLN: &[Vehicle] = &[
    Vehicle {
        name: "Navigator",
        tagline: "Full-size luxury SUV",
    },
    Vehicle {
        name: "Aviator",
        tagline: "Mid-size luxury SUV",
    },
    Vehicle {
        name: "Continental",
        tagline: "Luxury sedan",
    },
];

/// All vehicles for a brand
pub fn vehicles(brand: Brand) -> &'static [Vehicle] {
    match brand {
        Brand::Audi => AUDI,
        Brand::Ford => FORD,
        Brand::Lincoln => LINCOLN,
    }
}

/// Vehicles matching a search query (case-insensitive substring on name
/// and tagline). An empty query matches everything.
pub fn filter(brand: Brand, query: &str) -> Vec<Vehicle> {
    let vehicles = vehicles(brand);
    if query.is_empty() {
        return vehicles.to_vec();
    }
    let query = query.to_lowercase();
    vehicles
        .iter()
        .filter(|v| {
            v.name.to_lowercase().contains(&query) || v.tagline.to_lowercase().contains(&query)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(filter(Brand::Ford, "").len(), 3);
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let matches = filter(Brand::Ford, "mUsTaNg");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Mustang");
    }

    #[test]
    fn test_filter_by_tagline() {
        let matches = filter(Brand::Lincoln, "sedan");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Continental");
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter(Brand::Audi, "pickup").is_empty());
    }
}
