//! 000 - EMERGENCY SURVIVAL.
//!
//! Critical immediate needs: food, shelter, hygiene, medical care and
//! safety for people in crisis today.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, SpecificItem, Subcategory};

/// Provider for the emergency survival category.
pub struct EmergencySurvival;

impl CategoryProvider for EmergencySurvival {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("0", "EMERGENCY SURVIVAL", "Critical immediate needs", "#dc2626", "🚨")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("010", "Immediate Food", "Ready-to-eat, no preparation needed", "FEED QUICKLY"),
            Subcategory::new("020", "Immediate Shelter", "Same-day housing crisis", "STAY WARM"),
            Subcategory::new("030", "Immediate Hygiene", "Dignity in crisis", "FEEL HUMAN"),
            Subcategory::new("040", "Immediate Medical", "First aid and urgent health", "TREAT NOW"),
            Subcategory::new("050", "Immediate Safety", "Domestic violence, trafficking, immediate danger", "ESCAPE DANGER"),
        ]
    }

    fn specific_items(&self) -> Vec<SpecificItem> {
        vec![
            // 010 Immediate Food
            SpecificItem::new("010.100", "Single-serve meals", "Microwaveable, shelf-stable", "SAVE LIFE"),
            SpecificItem::new("010.200", "Infant formula & baby food", "0-12 months", "FEED BABY"),
            SpecificItem::new("010.300", "Nutrition shakes/supplements", "Ensure, etc.", "SUSTAIN STRENGTH"),
            SpecificItem::new("010.400", "Meal replacement bars", "Protein bars, emergency rations", "PROVIDE ENERGY"),
            SpecificItem::new("010.500", "Portable soups", "Cup noodles, instant", "WARM QUICKLY"),
            SpecificItem::new("010.600", "Grab-and-go snacks", "Granola bars, crackers", "CARRY EASILY"),
            SpecificItem::new("010.700", "Electrolyte drinks", "Gatorade, Pedialyte", "RESTORE BALANCE"),
            SpecificItem::new("010.800", "Emergency water", "Bottled, purification tablets", "HYDRATE SAFELY"),
            SpecificItem::new("010.900", "Culturally specific ready meals", "Halal, kosher, etc.", "HONOR PRACTICE"),
            // 020 Immediate Shelter
            SpecificItem::new("020.100", "Emergency blankets/sleeping bags", "Immediate warmth", "STAY WARM"),
            SpecificItem::new("020.200", "Tents & tarps", "Emergency shelter", "CREATE SHELTER"),
            SpecificItem::new("020.300", "Hand warmers & heat packs", "Prevent cold", "PREVENT COLD"),
            SpecificItem::new("020.400", "Rain ponchos & weather protection", "Stay dry", "STAY DRY"),
            SpecificItem::new("020.500", "Emergency shelter vouchers", "Hotel/motel", "FIND REFUGE"),
            SpecificItem::new("020.600", "Car living essentials", "Window covers, etc.", "SURVIVE VEHICLE"),
            SpecificItem::new("020.700", "Camping stoves & fuel", "Cook safely", "COOK SAFELY"),
            SpecificItem::new("020.800", "Flashlights & batteries", "See darkness", "SEE DARKNESS"),
            SpecificItem::new("020.900", "Emergency phone chargers", "Solar, hand-crank", "STAY CONNECTED"),
            // 030 Immediate Hygiene
            SpecificItem::new("030.100", "Menstrual products", "Pads, tampons, cups", "MANAGE PERIOD"),
            SpecificItem::new("030.200", "Diapers", "All sizes, infant to adult", "MAINTAIN DIGNITY"),
            SpecificItem::new("030.300", "Hygiene kits", "Soap, toothbrush, deodorant", "STAY CLEAN"),
            SpecificItem::new("030.400", "Feminine hygiene", "Wipes, wash, etc.", "CARE BODY"),
            SpecificItem::new("030.500", "Hand sanitizer & disinfecting wipes", "Prevent illness", "PREVENT ILLNESS"),
            SpecificItem::new("030.600", "Toilet paper & tissues", "Meet need", "MEET NEED"),
            SpecificItem::new("030.700", "Shower access passes", "Gym, public facility", "WASH BODY"),
            SpecificItem::new("030.800", "Clean underwear & socks", "Feel human", "FEEL HUMAN"),
            SpecificItem::new("030.900", "Laundry vouchers", "Refresh clothes", "REFRESH CLOTHES"),
            // 040 Immediate Medical
            SpecificItem::new("040.100", "First aid kits", "Emergency treatment", "TREAT WOUNDS"),
            SpecificItem::new("040.200", "Pain relievers", "Ibuprofen, acetaminophen", "EASE PAIN"),
            SpecificItem::new("040.300", "Bandages & gauze", "Cover injury", "COVER INJURY"),
            SpecificItem::new("040.400", "Prescription assistance", "Emergency refills", "CONTINUE MEDICATION"),
            SpecificItem::new("040.500", "Diabetic supplies", "Glucose, test strips", "MANAGE DIABETES"),
            SpecificItem::new("040.600", "EpiPens & allergy medication", "Prevent shock", "PREVENT SHOCK"),
            SpecificItem::new("040.700", "Naloxone/Narcan", "Overdose reversal", "SAVE OVERDOSE"),
            SpecificItem::new("040.800", "Mental health crisis support", "Hotline cards", "FIND HELP"),
            SpecificItem::new("040.900", "Eyeglasses/hearing aid batteries", "Sense world", "SENSE WORLD"),
            // 050 Immediate Safety
            SpecificItem::new("050.100", "Emergency cash assistance", "Gas, bus fare", "ESCAPE DANGER"),
            SpecificItem::new("050.200", "Prepaid phones", "For safety planning", "CALL HELP"),
            SpecificItem::new("050.300", "Safe house vouchers", "Hide safely", "HIDE SAFELY"),
            SpecificItem::new("050.400", "Legal advocacy referrals", "Know rights", "KNOW RIGHTS"),
            SpecificItem::new("050.500", "Safety planning materials", "Prepare escape", "PREPARE ESCAPE"),
            SpecificItem::new("050.600", "Child safety items", "Car seats, locks", "PROTECT CHILDREN"),
            SpecificItem::new("050.700", "Identity documents", "Copies, storage", "PROVE SELF"),
            SpecificItem::new("050.800", "Emergency contraception", "Prevent pregnancy", "PREVENT PREGNANCY"),
            SpecificItem::new("050.900", "Trauma-informed resource guides", "Understand options", "UNDERSTAND OPTIONS"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_five_subcategories() {
        assert_eq!(EmergencySurvival.subcategories().len(), 5);
        assert_eq!(EmergencySurvival.specific_items().len(), 45);
    }
}
