use contracts::domain::a031_uae_sale::UaeSaleRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const AGE_GROUPS: [&str; 4] = ["18-25", "26-40", "41-60", "60+"];
pub const GENDERS: [&str; 2] = ["Male", "Female"];
pub const LOCATIONS: [&str; 4] = ["Dubai", "Abu Dhabi", "Sharjah", "Ajman"];
pub const CATEGORIES: [&str; 4] = ["Groceries", "Electronics", "Clothing", "Household"];

/// Sales amount range in whole AED, `[low, high)`
pub const SALES_RANGE: (i64, i64) = (20, 1000);

fn column(rng: &mut StdRng, domain: &[&str], rows: usize) -> Vec<String> {
    (0..rows)
        .map(|_| domain[rng.gen_range(0..domain.len())].to_string())
        .collect()
}

/// Generate the single-country table.
///
/// Columns are drawn one after another (all ages, then all genders, ...), every
/// value uniformly from its domain.
pub fn generate_sales(rows: usize, seed: u64) -> Vec<UaeSaleRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    let age_groups = column(&mut rng, &AGE_GROUPS, rows);
    let genders = column(&mut rng, &GENDERS, rows);
    let locations = column(&mut rng, &LOCATIONS, rows);
    let categories = column(&mut rng, &CATEGORIES, rows);
    let amounts: Vec<i64> = (0..rows)
        .map(|_| rng.gen_range(SALES_RANGE.0..SALES_RANGE.1))
        .collect();

    age_groups
        .into_iter()
        .zip(genders)
        .zip(locations)
        .zip(categories)
        .zip(amounts)
        .enumerate()
        .map(
            |(i, ((((age_group, gender), location), category), sales_amount))| UaeSaleRecord {
                customer_id: format!("CUST{}", i + 1),
                age_group,
                gender,
                location,
                category,
                sales_amount,
            },
        )
        .collect()
}
