//! Fixed domains and sampling weights of the global dataset.

pub const COUNTRIES: [&str; 6] = ["UAE", "India", "Saudi Arabia", "Qatar", "Oman", "Bahrain"];

pub fn cities_of(country: &str) -> &'static [&'static str] {
    match country {
        "UAE" => &["Dubai", "Abu Dhabi", "Sharjah", "Ajman"],
        "India" => &["Mumbai", "Delhi", "Bengaluru", "Chennai"],
        "Saudi Arabia" => &["Riyadh", "Jeddah", "Dammam"],
        "Qatar" => &["Doha", "Al Rayyan"],
        "Oman" => &["Muscat", "Salalah"],
        "Bahrain" => &["Manama", "Riffa"],
        _ => &[],
    }
}

pub const CHANNELS: [(&str, f64); 3] = [("Hypermarket", 0.6), ("Market", 0.2), ("Online", 0.2)];

pub const GENDERS: [&str; 2] = ["Male", "Female"];

pub const AGE_GROUPS: [(&str, f64); 4] = [
    ("18-25", 0.25),
    ("26-40", 0.35),
    ("41-60", 0.3),
    ("60+", 0.1),
];

pub const INCOME_BANDS: [(&str, f64); 4] = [
    ("Low", 0.2),
    ("Lower-Middle", 0.35),
    ("Upper-Middle", 0.3),
    ("High", 0.15),
];

pub const LOYALTY_TIERS: [(&str, f64); 4] = [
    ("None", 0.45),
    ("Silver", 0.3),
    ("Gold", 0.2),
    ("Platinum", 0.05),
];

pub const PAYMENT_METHODS: [(&str, f64); 4] =
    [("Card", 0.6), ("Cash", 0.25), ("Wallet", 0.1), ("BNPL", 0.05)];

pub const CATEGORIES: [(&str, f64); 5] = [
    ("Groceries", 0.4),
    ("Electronics", 0.2),
    ("Clothing", 0.18),
    ("Household", 0.15),
    ("Beauty", 0.07),
];

pub fn subcategories_of(category: &str) -> &'static [&'static str] {
    match category {
        "Groceries" => &["Fresh Produce", "Bakery", "Dairy", "Snacks"],
        "Electronics" => &["Mobiles", "Accessories", "Appliances", "TV"],
        "Clothing" => &["Menswear", "Womenswear", "Kids"],
        "Household" => &["Cleaning", "Kitchen", "Decor"],
        "Beauty" => &["Skincare", "Haircare", "Fragrance"],
        _ => &[],
    }
}

/// Brand used when a subcategory has no brand list
pub const STORE_BRAND: &str = "Store Brand";

pub fn brands_of(subcategory: &str) -> Option<&'static [&'static str]> {
    let brands: &'static [&'static str] = match subcategory {
        "Mobiles" => &["Apple", "Samsung", "Xiaomi", "OnePlus"],
        "Accessories" => &["Boat", "JBL", "Anker", "Sony"],
        "Appliances" => &["Philips", "Panasonic", "LG", "Toshiba"],
        "TV" => &["LG", "Samsung", "Sony", "TCL"],
        "Menswear" => &["Levi's", "H&M", "Zara", "Nike"],
        "Womenswear" => &["H&M", "Zara", "Forever21", "Mango"],
        "Kids" => &["H&M", "Zara", "Mothercare", "Nike"],
        "Fresh Produce" => &["Local", "Organic Farms"],
        "Bakery" => &["In-house", "Local"],
        "Dairy" => &["Almarai", "Lacnor", "Nandini"],
        "Snacks" => &["Lays", "Pringles", "Kurkure"],
        "Cleaning" => &["Dettol", "Harpic", "Vim"],
        "Kitchen" => &["Prestige", "Tefal", "Cello"],
        "Decor" => &["HomeCentre", "Ikea"],
        "Skincare" => &["Nivea", "L'Oreal", "Neutrogena"],
        "Haircare" => &["Dove", "Head&Shoulders", "Tresemme"],
        "Fragrance" => &["Nike", "Guess", "Jaguar"],
        _ => return None,
    };
    Some(brands)
}

/// Unit price range in AED, `[low, high)`
pub fn price_range_of(category: &str) -> (f64, f64) {
    match category {
        "Groceries" => (5.0, 50.0),
        "Electronics" => (300.0, 2000.0),
        "Clothing" => (20.0, 150.0),
        "Household" => (15.0, 120.0),
        "Beauty" => (10.0, 120.0),
        _ => (1.0, 100.0),
    }
}

/// Mean of the Poisson draw for units; electronics sell one at a time
pub fn units_mean_of(category: &str) -> f64 {
    if category == "Electronics" {
        1.0
    } else {
        2.0
    }
}

pub const DISCOUNTS: [(f64, f64); 4] = [(0.0, 0.5), (5.0, 0.2), (10.0, 0.2), (15.0, 0.1)];

/// GCC VAT
pub const VAT_PCT: f64 = 5.0;

/// Share of gross value that is cost, `[low, high)`
pub const COST_SHARE: (f64, f64) = (0.55, 0.8);

/// Customer ids are drawn from CUST1..CUST499
pub const CUSTOMER_POOL: u32 = 500;

pub const FIRST_ORDER_NO: usize = 1000;

/// Length of the trailing date window
pub const WINDOW_MONTHS: u32 = 12;
