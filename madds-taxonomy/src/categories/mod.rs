//! Built-in category data.
//!
//! Each main category provides its own record, its subcategories and
//! whatever specific items have been catalogued for them. Subcategories
//! without a finer breakdown simply contribute no specific items.

pub mod connect;
pub mod earn;
pub mod emergency;
pub mod express;
pub mod grow;
pub mod heal;
pub mod nourish;
pub mod protect;
pub mod shelter;
pub mod transition;

pub use connect::ConnectCommunity;
pub use earn::EarnLivelihood;
pub use emergency::EmergencySurvival;
pub use express::ExpressCreativity;
pub use grow::GrowKnowledge;
pub use heal::HealWholeness;
pub use nourish::NourishBody;
pub use protect::ProtectEarth;
pub use shelter::ShelterSafely;
pub use transition::TransitionLife;

use crate::types::{MainCategory, SpecificItem, Subcategory};

/// Trait for one main category's slice of the taxonomy.
pub trait CategoryProvider: Send + Sync {
    /// The main category record
    fn main_category(&self) -> MainCategory;

    /// Subcategories in display order
    fn subcategories(&self) -> Vec<Subcategory>;

    /// Specific items in display order, across all of this category's subcategories
    fn specific_items(&self) -> Vec<SpecificItem> {
        Vec::new()
    }
}

/// All built-in providers, in main-digit order.
pub fn builtin_providers() -> Vec<Box<dyn CategoryProvider>> {
    vec![
        Box::new(EmergencySurvival),
        Box::new(NourishBody),
        Box::new(ShelterSafely),
        Box::new(ConnectCommunity),
        Box::new(HealWholeness),
        Box::new(GrowKnowledge),
        Box::new(EarnLivelihood),
        Box::new(ExpressCreativity),
        Box::new(ProtectEarth),
        Box::new(TransitionLife),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_providers_in_digit_order() {
        let codes: Vec<String> = builtin_providers()
            .iter()
            .map(|p| p.main_category().code)
            .collect();
        assert_eq!(codes, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn test_subcategories_belong_to_provider() {
        for provider in builtin_providers() {
            let main = provider.main_category();
            for sub in provider.subcategories() {
                assert!(sub.code.starts_with(&main.code), "{} under {}", sub.code, main.code);
            }
            for item in provider.specific_items() {
                assert!(item.code.starts_with(&main.code), "{} under {}", item.code, main.code);
            }
        }
    }
}
