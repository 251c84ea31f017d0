//! 400 - HEAL WHOLENESS.
//!
//! Health, wellness and care for body and mind.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the heal wholeness category.
pub struct HealWholeness;

impl CategoryProvider for HealWholeness {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("4", "HEAL WHOLENESS", "Health, wellness, care", "#ec4899", "💚")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("410", "Primary Care", "Basic medical services", "SEE DOCTOR"),
            Subcategory::new("420", "Dental Care", "Oral health", "CLEAN TEETH"),
            Subcategory::new("430", "Vision Care", "Eye health, glasses", "SEE CLEARLY"),
            Subcategory::new("440", "Mental Health", "Counseling, therapy, support", "HEAL MIND"),
            Subcategory::new("450", "Substance Use Support", "Recovery, harm reduction", "RECOVER HEALTH"),
            Subcategory::new("460", "Reproductive Health", "Pregnancy, contraception, STI testing", "HONOR BODY"),
            Subcategory::new("470", "Alternative/Holistic Healing", "Complementary therapies", "RESTORE BALANCE"),
            Subcategory::new("480", "Disability Support", "Accessibility, adaptive equipment", "MOVE FREELY"),
            Subcategory::new("490", "Health Education", "Prevention, wellness literacy", "LEARN WELLNESS"),
        ]
    }
}
