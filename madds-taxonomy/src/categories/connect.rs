//! 300 - CONNECT COMMUNITY.
//!
//! Relationships and belonging: staying in touch, getting around, caring for one another.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the connect community category.
pub struct ConnectCommunity;

impl CategoryProvider for ConnectCommunity {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("3", "CONNECT COMMUNITY", "Relationships, belonging", "#9333ea", "🤝")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("310", "Communication Tools", "Phones, internet, staying in touch", "STAY CONNECTED"),
            Subcategory::new("320", "Transportation", "Getting around, mobility", "MOVE AROUND"),
            Subcategory::new("330", "Childcare Support", "Care for children while parents work/heal", "CARE CHILDREN"),
            Subcategory::new("340", "Elder Care", "Support for aging community members", "HONOR ELDERS"),
            Subcategory::new("350", "Pet Care", "Companion animals as family", "TEND ANIMALS"),
            Subcategory::new("360", "Social Connection", "Building relationships, reducing isolation", "GATHER JOY"),
            Subcategory::new("370", "Legal Support", "Rights, justice, documentation", "KNOW RIGHTS"),
            Subcategory::new("380", "Advocacy & Organizing", "Collective power, systemic change", "BUILD POWER"),
            Subcategory::new("390", "Cultural Connection", "Heritage, identity, belonging", "HONOR ROOTS"),
        ]
    }
}
