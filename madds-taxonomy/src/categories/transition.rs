//! 900 - TRANSITION LIFE.
//!
//! Milestones and ceremonies across a lifetime, birth through reentry.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the transition life category.
pub struct TransitionLife;

impl CategoryProvider for TransitionLife {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("9", "TRANSITION LIFE", "Milestones, ceremonies", "#6366f1", "🌱")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("910", "Birth & Early Parenting", "Pregnancy, newborns, postpartum", "WELCOME LIFE"),
            Subcategory::new("920", "Childhood & Adolescence", "Growing up, development", "MARK GROWTH"),
            Subcategory::new("930", "Young Adulthood", "Launching, independence", "LAUNCH ADULT"),
            Subcategory::new("940", "Partnership & Family Formation", "Marriage, commitment, family building", "JOIN LIVES"),
            Subcategory::new("950", "Mid-Life Transitions", "Career changes, empty nest, reassessment", "CHANGE PATH"),
            Subcategory::new("960", "Aging & Elderhood", "Growing old, wisdom years", "HONOR WISDOM"),
            Subcategory::new("970", "Illness & Disability Transitions", "Navigating health changes", "ADAPT LIFE"),
            Subcategory::new("980", "End of Life", "Dying, death, bereavement", "MOURN TOGETHER"),
            Subcategory::new("990", "Incarceration & Reentry", "Justice involvement, reintegration", "BEGIN AGAIN"),
        ]
    }
}
