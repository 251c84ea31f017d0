//! 800 - PROTECT EARTH.
//!
//! Environment and sustainability.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the protect earth category.
pub struct ProtectEarth;

impl CategoryProvider for ProtectEarth {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("8", "PROTECT EARTH", "Environment, sustainability", "#10b981", "🌍")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("810", "Waste Reduction", "Reuse, repair, refuse", "REDUCE WASTE"),
            Subcategory::new("820", "Renewable Energy", "Solar, wind, clean power", "HARNESS SUN"),
            Subcategory::new("830", "Sustainable Food", "Gardening, local food, food sovereignty", "GROW FOOD"),
            Subcategory::new("840", "Water Conservation", "Clean water, water access", "PRESERVE WATER"),
            Subcategory::new("850", "Transportation Alternatives", "Bikes, transit, car-free living", "MOVE CLEANLY"),
            Subcategory::new("860", "Natural Building", "Green construction, eco-homes", "BUILD EARTH"),
            Subcategory::new("870", "Land & Biodiversity", "Conservation, habitat restoration", "PROTECT CREATURES"),
            Subcategory::new("880", "Climate Action", "Advocacy, mitigation, adaptation", "FIGHT CRISIS"),
            Subcategory::new("890", "Eco-Spirituality", "Deep ecology, earth-centered practice", "COMMUNE NATURE"),
        ]
    }
}
