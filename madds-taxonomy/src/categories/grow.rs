//! 500 - GROW KNOWLEDGE.
//!
//! Learning at every age, from early childhood to lifelong enrichment.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the grow knowledge category.
pub struct GrowKnowledge;

impl CategoryProvider for GrowKnowledge {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("5", "GROW KNOWLEDGE", "Learning, skills, wisdom", "#f59e0b", "📚")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("510", "Early Childhood (Ages 0-5)", "Foundation years", "GROW MINDS"),
            Subcategory::new("520", "K-12 Education", "School-age support", "LEARN BASICS"),
            Subcategory::new("530", "Higher Education", "College, vocational training", "PURSUE DEGREE"),
            Subcategory::new("540", "Adult Basic Education", "Literacy, GED, ESL", "READ WORDS"),
            Subcategory::new("550", "Skill Development", "Vocational training, certificates", "MASTER TRADES"),
            Subcategory::new("560", "Libraries & Information", "Access to knowledge", "ACCESS KNOWLEDGE"),
            Subcategory::new("570", "Career Development", "Job training, job search", "FIND WORK"),
            Subcategory::new("580", "Language Learning", "Multilingual support", "SPEAK TOGETHER"),
            Subcategory::new("590", "Lifelong Learning", "Enrichment, hobbies, exploration", "LEARN FOREVER"),
        ]
    }
}
