//! 100 - NOURISH BODY.
//!
//! Food, water and nutrition, from pantry staples to special diets.

use crate::categories::CategoryProvider;
use crate::types::{MainCategory, SpecificItem, Subcategory};

/// Provider for the nourish body category.
pub struct NourishBody;

impl CategoryProvider for NourishBody {
    fn main_category(&self) -> MainCategory {
        MainCategory::new("1", "NOURISH BODY", "Food, water, nutrition", "#16a34a", "🍎")
    }

    fn subcategories(&self) -> Vec<Subcategory> {
        vec![
            Subcategory::new("110", "Plant Proteins", "Legumes, beans, meat alternatives", "NOURISH PLANT"),
            Subcategory::new("120", "Animal Proteins", "Meat, fish, eggs, dairy", "BUILD MUSCLE"),
            Subcategory::new("130", "Grains & Bread", "Carbohydrates, energy sources", "PROVIDE ENERGY"),
            Subcategory::new("140", "Fruits (Preserved)", "Canned, dried, frozen fruits", "FEED VITAMINS"),
            Subcategory::new("150", "Vegetables (Preserved)", "Canned, dried, frozen vegetables", "ADD VEGETABLES"),
            Subcategory::new("160", "Fresh Produce", "Fresh fruits & vegetables (perishable)", "EAT RAINBOW"),
            Subcategory::new("170", "Cooking Essentials", "Oils, spices, condiments", "FLAVOR FOOD"),
            Subcategory::new("180", "Beverages", "Drinks beyond water", "DRINK WARMTH"),
            Subcategory::new("190", "Special Diets", "Allergen-free, medical nutrition", "MEET DIETARY NEED"),
        ]
    }

    fn specific_items(&self) -> Vec<SpecificItem> {
        vec![
            // 110 Plant Proteins
            SpecificItem::new("110.100", "Dried beans", "Black, pinto, kidney", "NOURISH BODY"),
            SpecificItem::new("110.200", "Lentils", "Red, green, brown", "BUILD STRENGTH"),
            SpecificItem::new("110.300", "Chickpeas/garbanzo beans", "Versatile protein", "FEED FAMILY"),
            SpecificItem::new("110.400", "Split peas", "Soup base", "MAKE SOUP"),
            SpecificItem::new("110.500", "Canned beans", "Convenience", "COOK QUICKLY"),
            SpecificItem::new("110.600", "Tofu & tempeh", "Plant protein", "CHOOSE PLANT"),
            SpecificItem::new("110.700", "Textured vegetable protein (TVP)", "Meat substitute", "STRETCH BUDGET"),
            SpecificItem::new("110.800", "Peanut butter & nut butters", "Protein spread", "SPREAD GOODNESS"),
            SpecificItem::new("110.900", "Hummus & bean dips", "Ready protein", "SHARE MEAL"),
            // 120 Animal Proteins
            SpecificItem::new("120.100", "Canned tuna & salmon", "Shelf-stable protein", "NOURISH BODY"),
            SpecificItem::new("120.200", "Canned chicken & turkey", "Ready meat", "FEED FAMILY"),
            SpecificItem::new("120.300", "Eggs", "Fresh, carton", "START DAY"),
            SpecificItem::new("120.400", "Milk", "Dairy, shelf-stable", "BUILD BONES"),
            SpecificItem::new("120.500", "Cheese", "Blocks, sliced, string", "ADD CALCIUM"),
            SpecificItem::new("120.600", "Yogurt", "Cups, pouches", "AID DIGESTION"),
            SpecificItem::new("120.700", "Frozen meat", "Ground beef, chicken", "COOK TRADITIONAL"),
            SpecificItem::new("120.800", "Deli meat", "For sandwiches", "PACK LUNCH"),
            SpecificItem::new("120.900", "Halal/Kosher meat", "Religiously prepared", "HONOR FAITH"),
            // 130 Grains & Bread
            SpecificItem::new("130.100", "Rice", "White, brown, jasmine", "NOURISH BODY"),
            SpecificItem::new("130.200", "Pasta", "Spaghetti, macaroni, etc.", "FEED FAMILY"),
            SpecificItem::bare("130.300", "Oats & oatmeal", "START MORNING"),
            SpecificItem::bare("130.400", "Quinoa & ancient grains", "CHOOSE WHOLE"),
            SpecificItem::new("130.500", "Bread", "Loaves, buns, tortillas", "MAKE SANDWICH"),
            SpecificItem::new("130.600", "Cereal", "Cold, hot", "GRAB QUICKLY"),
            SpecificItem::new("130.700", "Flour", "All-purpose, whole wheat", "BAKE TOGETHER"),
            SpecificItem::bare("130.800", "Cornmeal & grits", "COOK TRADITION"),
            SpecificItem::new("130.900", "Culturally specific grains", "Couscous, farro, etc.", "HONOR ROOTS"),
            // 140 Fruits (Preserved)
            SpecificItem::new("140.100", "Canned fruit", "Peaches, pears, mixed", "NOURISH BODY"),
            SpecificItem::bare("140.200", "Applesauce & fruit cups", "PACK LUNCH"),
            SpecificItem::new("140.300", "Dried fruit", "Raisins, apricots, dates", "CARRY SNACK"),
            SpecificItem::new("140.400", "Frozen fruit", "Berries, mango", "BLEND SMOOTHIE"),
            SpecificItem::new("140.500", "Fruit juice", "100% juice, no sugar added", "DRINK VITAMINS"),
            SpecificItem::bare("140.600", "Jam & preserves", "SPREAD JOY"),
            SpecificItem::bare("140.700", "Canned pie fillings", "BAKE DESSERT"),
            SpecificItem::bare("140.800", "Fruit leather & fruit snacks", "PLEASE CHILDREN"),
            SpecificItem::new("140.900", "Baby food", "Fruit purees", "FEED BABY"),
            // 150 Vegetables (Preserved)
            SpecificItem::new("150.100", "Canned tomatoes", "Diced, sauce, paste", "NOURISH BODY"),
            SpecificItem::bare("150.200", "Canned corn, peas, green beans", "ADD VEGETABLES"),
            SpecificItem::bare("150.300", "Canned mixed vegetables", "MAKE STEW"),
            SpecificItem::new("150.400", "Frozen vegetables", "Broccoli, carrots, etc.", "COOK QUICKLY"),
            SpecificItem::bare("150.500", "Tomato sauce & salsa", "FLAVOR MEAL"),
            SpecificItem::bare("150.600", "Pickles & pickled vegetables", "ADD CRUNCH"),
            SpecificItem::bare("150.700", "Sauerkraut & fermented vegetables", "AID DIGESTION"),
            SpecificItem::bare("150.800", "Vegetable broth & stock", "START SOUP"),
            SpecificItem::new("150.900", "Baby food", "Vegetable purees", "FEED BABY"),
            // 160 Fresh Produce
            SpecificItem::new("160.100", "Fresh fruit", "Apples, bananas, oranges", "NOURISH BODY"),
            SpecificItem::new("160.200", "Fresh vegetables", "Lettuce, carrots, etc.", "EAT RAINBOW"),
            SpecificItem::new("160.300", "Root vegetables", "Potatoes, onions, garlic", "COOK HEARTY"),
            SpecificItem::new("160.400", "Herbs", "Fresh cilantro, basil, parsley", "ADD FLAVOR"),
            SpecificItem::bare("160.500", "Salad greens & pre-washed produce", "PREPARE EASILY"),
            SpecificItem::new("160.600", "Seasonal produce", "Local harvest", "EAT SEASON"),
            SpecificItem::new("160.700", "Organic produce", "Pesticide-free", "CHOOSE CLEAN"),
            SpecificItem::new("160.800", "Culturally specific produce", "Yuca, plantains, etc.", "COOK TRADITION"),
            SpecificItem::new("160.900", "Produce vouchers", "Farmers market", "SUPPORT LOCAL"),
            // 170 Cooking Essentials
            SpecificItem::new("170.100", "Cooking oil", "Vegetable, olive, coconut", "FRY FOOD"),
            SpecificItem::bare("170.200", "Salt & pepper", "SEASON SIMPLY"),
            SpecificItem::new("170.300", "Spices & seasonings", "Cumin, garlic powder, etc.", "ADD FLAVOR"),
            SpecificItem::new("170.400", "Sugar & sweeteners", "White, brown, honey", "SWEETEN LIFE"),
            SpecificItem::new("170.500", "Vinegar", "White, apple cider, balsamic", "DRESS SALAD"),
            SpecificItem::bare("170.600", "Soy sauce & hot sauce", "SPICE UP"),
            SpecificItem::bare("170.700", "Ketchup, mustard, mayo", "TOP SANDWICH"),
            SpecificItem::new("170.800", "Baking essentials", "Baking soda, powder, yeast", "RISE DOUGH"),
            SpecificItem::new("170.900", "Cultural spice blends", "Curry, garam masala, etc.", "HONOR TRADITION"),
            // 180 Beverages
            SpecificItem::new("180.100", "Coffee", "Ground, instant, pods", "START DAY"),
            SpecificItem::new("180.200", "Tea", "Black, green, herbal", "WARM SOUL"),
            SpecificItem::bare("180.300", "Hot chocolate & cocoa", "COMFORT CHILDREN"),
            SpecificItem::new("180.400", "Milk alternatives", "Almond, soy, oat", "CHOOSE PLANT"),
            SpecificItem::new("180.500", "Sports drinks", "Electrolytes", "HYDRATE ACTIVE"),
            SpecificItem::new("180.600", "Juice boxes", "Kid-friendly", "PACK LUNCH"),
            SpecificItem::new("180.700", "Powdered drink mixes", "Kool-Aid, lemonade", "FLAVOR WATER"),
            SpecificItem::new("180.800", "Soda & carbonated drinks", "Occasional treat", "CELEBRATE SMALL"),
            SpecificItem::new("180.900", "Cultural beverages", "Horchata mix, chai, etc.", "TASTE HOME"),
            // 190 Special Diets
            SpecificItem::bare("190.100", "Gluten-free products", "AVOID GLUTEN"),
            SpecificItem::bare("190.200", "Dairy-free products", "SKIP LACTOSE"),
            SpecificItem::bare("190.300", "Nut-free snacks", "PROTECT ALLERGY"),
            SpecificItem::bare("190.400", "Low-sodium foods", "MANAGE BLOOD PRESSURE"),
            SpecificItem::new("190.500", "Diabetic-friendly foods", "Sugar-free", "CONTROL SUGAR"),
            SpecificItem::new("190.600", "Vegan products", "No animal products", "CHOOSE COMPASSION"),
            SpecificItem::bare("190.700", "Halal certified foods", "FOLLOW ISLAM"),
            SpecificItem::bare("190.800", "Kosher certified foods", "FOLLOW JUDAISM"),
            SpecificItem::new("190.900", "Medical nutrition", "Feeding tubes, special formulas", "MEET MEDICAL NEED"),
        ]
    }
}
