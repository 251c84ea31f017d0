//! 200 - SHELTER SAFELY.
//!
//! Housing, warmth and rest: bedding, furniture, appliances, household
//! goods, utilities and getting into (and keeping) a home.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, SpecificItem, Subcategory};

/// Provider for the shelter safely category.
pub struct ShelterSafely;

impl CategoryProvider for ShelterSafely {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("2", "SHELTER SAFELY", "Housing, warmth, rest", "#2563eb", "🏠")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("210", "Bedding & Sleep", "Rest, comfort, warmth", "REST BODY"),
            Subcategory::new("220", "Furniture (Living)", "Seating, tables, daily living", "FURNISH HOME"),
            Subcategory::new("230", "Appliances (Major)", "Essential home systems", "POWER HOME"),
            Subcategory::new("240", "Appliances (Small)", "Kitchen & convenience", "COOK EASY"),
            Subcategory::new("250", "Household Goods", "Dishes, cookware, linens", "SET TABLE"),
            Subcategory::new("260", "Home Maintenance", "Tools, cleaning, repairs", "KEEP CLEAN"),
            Subcategory::new("270", "Utilities Support", "Bill assistance, essential services", "KEEP SERVICES"),
            Subcategory::new("280", "Housing Navigation", "Finding & securing housing", "FIND HOME"),
            Subcategory::new("290", "Home Safety", "Childproofing, fire safety, security", "SECURE SPACE"),
        ]
    }

    fn specific_items(&self) -> Vec<SpecificItem> {
        vec![
            // 210 Bedding & Sleep
            SpecificItem::new("210.100", "Mattresses", "Twin, full, queen, king", "REST BODY"),
            SpecificItem::new("210.200", "Bed frames & box springs", "Support sleep", "SUPPORT SLEEP"),
            SpecificItem::new("210.300", "Pillows & pillow cases", "Cradle head", "CRADLE HEAD"),
            SpecificItem::new("210.400", "Sheets & sheet sets", "Make bed", "MAKE BED"),
            SpecificItem::new("210.500", "Blankets", "Fleece, wool, electric", "STAY WARM"),
            SpecificItem::new("210.600", "Comforters & duvets", "Nest cozy", "NEST COZY"),
            SpecificItem::new("210.700", "Sleeping bags", "Indoor, camping", "ROLL OUT"),
            SpecificItem::new("210.800", "Crib mattresses & baby bedding", "Sleep safe", "SLEEP SAFE"),
            SpecificItem::new("210.900", "Mattress protectors & bedding accessories", "Protect investment", "PROTECT INVESTMENT"),
            // 220 Furniture (Living)
            SpecificItem::bare("220.100", "Sofas & couches", "GATHER FAMILY"),
            SpecificItem::new("220.200", "Chairs", "Dining, office, accent", "SIT TOGETHER"),
            SpecificItem::new("220.300", "Tables", "Dining, coffee, end", "SHARE MEAL"),
            SpecificItem::bare("220.400", "Dressers & storage furniture", "ORGANIZE BELONGINGS"),
            SpecificItem::bare("220.500", "Bookshelves & shelving units", "DISPLAY KNOWLEDGE"),
            SpecificItem::bare("220.600", "TV stands & entertainment centers", "WATCH TOGETHER"),
            SpecificItem::bare("220.700", "Desks & workspaces", "WORK HOME"),
            SpecificItem::new("220.800", "Children's furniture", "Toy boxes, small chairs", "SCALE DOWN"),
            SpecificItem::new("220.900", "Outdoor furniture", "Patio sets", "EXTEND LIVING"),
            // 230 Appliances (Major)
            SpecificItem::bare("230.100", "Refrigerators", "PRESERVE FOOD"),
            SpecificItem::new("230.200", "Stoves & ovens", "Gas, electric", "COOK MEALS"),
            SpecificItem::bare("230.300", "Microwaves", "HEAT QUICKLY"),
            SpecificItem::bare("230.400", "Dishwashers", "WASH EFFICIENTLY"),
            SpecificItem::bare("230.500", "Washing machines", "CLEAN CLOTHES"),
            SpecificItem::bare("230.600", "Dryers", "DRY LAUNDRY"),
            SpecificItem::bare("230.700", "Air conditioners & fans", "COOL SPACE"),
            SpecificItem::new("230.800", "Space heaters", "Safe, certified", "WARM ROOM"),
            SpecificItem::bare("230.900", "Water heaters", "PROVIDE HOT WATER"),
            // 240 Appliances (Small)
            SpecificItem::bare("240.100", "Coffee makers & kettles", "BREW MORNING"),
            SpecificItem::bare("240.200", "Toasters & toaster ovens", "CRISP BREAD"),
            SpecificItem::bare("240.300", "Blenders & food processors", "BLEND SMOOTH"),
            SpecificItem::bare("240.400", "Slow cookers & Instant Pots", "COOK EASY"),
            SpecificItem::bare("240.500", "Rice cookers", "STEAM PERFECT"),
            SpecificItem::new("240.600", "Mixers", "Hand, stand", "BAKE TOGETHER"),
            SpecificItem::bare("240.700", "Irons & ironing boards", "PRESS CLOTHES"),
            SpecificItem::bare("240.800", "Vacuum cleaners", "CLEAN FLOORS"),
            SpecificItem::bare("240.900", "Fans & portable heaters", "ADJUST TEMPERATURE"),
            // 250 Household Goods
            SpecificItem::new("250.100", "Dishes & dinnerware", "Plates, bowls", "SET TABLE"),
            SpecificItem::bare("250.200", "Glassware & mugs", "DRINK TOGETHER"),
            SpecificItem::bare("250.300", "Silverware & utensils", "EAT MEAL"),
            SpecificItem::new("250.400", "Pots & pans", "Cookware sets", "COOK VARIETY"),
            SpecificItem::new("250.500", "Bakeware", "Baking sheets, cake pans", "BAKE TREATS"),
            SpecificItem::new("250.600", "Kitchen utensils", "Spatulas, ladles, etc.", "STIR POT"),
            SpecificItem::new("250.700", "Storage containers", "Tupperware, food storage", "SAVE LEFTOVERS"),
            SpecificItem::new("250.800", "Towels", "Bath, hand, dish", "DRY OFF"),
            SpecificItem::bare("250.900", "Curtains & window treatments", "FILTER LIGHT"),
            // 260 Home Maintenance
            SpecificItem::new("260.100", "Cleaning supplies", "All-purpose, disinfectant", "KEEP CLEAN"),
            SpecificItem::bare("260.200", "Brooms, mops, vacuum bags", "SWEEP FLOOR"),
            SpecificItem::bare("260.300", "Laundry detergent & fabric softener", "WASH FRESH"),
            SpecificItem::bare("260.400", "Dish soap & dishwasher pods", "SCRUB DISHES"),
            SpecificItem::new("260.500", "Paper products", "Toilet paper, paper towels", "WIPE UP"),
            SpecificItem::bare("260.600", "Trash bags & waste bins", "CONTAIN WASTE"),
            SpecificItem::bare("260.700", "Light bulbs & batteries", "ILLUMINATE HOME"),
            SpecificItem::new("260.800", "Basic tools", "Hammer, screwdriver set", "FIX SMALL"),
            SpecificItem::new("260.900", "Pest control", "Traps, repellent", "PROTECT SPACE"),
            // 270 Utilities Support
            SpecificItem::bare("270.100", "Electric bill assistance", "KEEP POWER"),
            SpecificItem::bare("270.200", "Gas/heating bill assistance", "STAY WARM"),
            SpecificItem::bare("270.300", "Water bill assistance", "FLOW WATER"),
            SpecificItem::bare("270.400", "Internet/phone bill assistance", "STAY CONNECTED"),
            SpecificItem::new("270.500", "Rent assistance", "One-time, ongoing", "MAINTAIN HOUSING"),
            SpecificItem::new("270.600", "Security deposits", "Move-in support", "START FRESH"),
            SpecificItem::bare("270.700", "Eviction prevention services", "SAVE HOME"),
            SpecificItem::new("270.800", "Home repair grants", "Roof, plumbing", "FIX STRUCTURE"),
            SpecificItem::new("270.900", "Weatherization services", "Insulation, sealing", "CONSERVE ENERGY"),
            // 280 Housing Navigation
            SpecificItem::new("280.100", "Housing search support", "Listings, apps", "FIND HOME"),
            SpecificItem::bare("280.200", "Application fee assistance", "APPLY WIDELY"),
            SpecificItem::bare("280.300", "Credit repair resources", "IMPROVE SCORE"),
            SpecificItem::bare("280.400", "Tenant rights education", "KNOW RIGHTS"),
            SpecificItem::bare("280.500", "Lease negotiation support", "UNDERSTAND TERMS"),
            SpecificItem::new("280.600", "Moving supplies", "Boxes, tape", "PACK BELONGINGS"),
            SpecificItem::bare("280.700", "Moving truck/labor vouchers", "TRANSPORT STUFF"),
            SpecificItem::new("280.800", "Furniture rental programs", "Rent-to-own", "FURNISH GRADUALLY"),
            SpecificItem::new("280.900", "Temporary housing", "Transition, bridge", "BRIDGE GAP"),
            // 290 Home Safety
            SpecificItem::bare("290.100", "Smoke detectors & carbon monoxide alarms", "DETECT DANGER"),
            SpecificItem::bare("290.200", "Fire extinguishers", "STOP FIRE"),
            SpecificItem::new("290.300", "First aid kits", "Home", "TREAT INJURY"),
            SpecificItem::new("290.400", "Childproofing supplies", "Outlet covers, gates", "PROTECT CHILDREN"),
            SpecificItem::bare("290.500", "Door locks & security systems", "SECURE ENTRY"),
            SpecificItem::bare("290.600", "Window guards & safety film", "PREVENT FALLS"),
            SpecificItem::new("290.700", "Emergency preparedness kits", "72-hour supplies", "PREPARE DISASTER"),
            SpecificItem::bare("290.800", "Flashlights & emergency lighting", "SEE OUTAGE"),
            SpecificItem::bare("290.900", "Medication lock boxes", "STORE SAFELY"),
        ]
    }
}
