//! 700 - EXPRESS CREATIVITY.
//!
//! Arts, culture, play and celebration.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the express creativity category.
pub struct ExpressCreativity;

impl CategoryProvider for ExpressCreativity {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("7", "EXPRESS CREATIVITY", "Arts, culture, play", "#8b5cf6", "🎨")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("710", "Visual Arts", "Painting, drawing, sculpture", "CREATE IMAGE"),
            Subcategory::new("720", "Music", "Instruments, lessons, performance", "MAKE SOUND"),
            Subcategory::new("730", "Performing Arts", "Theater, dance, spoken word", "EXPRESS MOVEMENT"),
            Subcategory::new("740", "Writing & Literature", "Books, poetry, storytelling", "TELL STORIES"),
            Subcategory::new("750", "Film & Photography", "Visual storytelling", "CAPTURE MOMENTS"),
            Subcategory::new("760", "Crafts & Making", "Hands-on creation", "CREATE JOY"),
            Subcategory::new("770", "Cultural Arts", "Traditional, indigenous, folk arts", "HONOR HERITAGE"),
            Subcategory::new("780", "Games & Play", "Recreation, sports, leisure", "PLAY TOGETHER"),
            Subcategory::new("790", "Celebrations & Joy", "Parties, holidays, special occasions", "CELEBRATE LIFE"),
        ]
    }
}
