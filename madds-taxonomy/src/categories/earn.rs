//! 600 - EARN LIVELIHOOD.
//!
//! Work, income and economic security.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, Subcategory};

/// Provider for the earn livelihood category.
pub struct EarnLivelihood;

impl CategoryProvider for EarnLivelihood {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("6", "EARN LIVELIHOOD", "Work, income, resources", "#06b6d4", "💼")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("610", "Job Placement", "Finding work, getting hired", "FIND WORK"),
            Subcategory::new("620", "Workplace Essentials", "Tools, uniforms, supplies", "DO JOB"),
            Subcategory::new("630", "Business Startup", "Entrepreneurship support", "START VENTURE"),
            Subcategory::new("640", "Worker Cooperatives", "Collective ownership models", "OWN WORK"),
            Subcategory::new("650", "Financial Services", "Banking, credit, money management", "MANAGE MONEY"),
            Subcategory::new("660", "Income Support", "Direct cash assistance, benefits", "MEET NEEDS"),
            Subcategory::new("670", "Asset Building", "Homeownership, savings, wealth", "BUILD WEALTH"),
            Subcategory::new("680", "Worker Rights", "Fair treatment, safety, organizing", "CLAIM RIGHTS"),
            Subcategory::new("690", "Retirement & Aging", "Elder economic security", "SECURE FUTURE"),
        ]
    }
}
