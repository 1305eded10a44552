use anyhow::Result;
use chrono::{Duration, Months, NaiveDate};
use contracts::domain::a030_sales_order::{round2, OrderRecord};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog::*;

/// Weighted categorical domain
struct Weighted<T: Copy> {
    items: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> Weighted<T> {
    fn new(pairs: &[(T, f64)]) -> Result<Self> {
        let index = WeightedIndex::new(pairs.iter().map(|(_, w)| *w))?;
        Ok(Self {
            items: pairs.iter().map(|(item, _)| *item).collect(),
            index,
        })
    }

    fn sample(&self, rng: &mut StdRng) -> T {
        self.items[self.index.sample(rng)]
    }
}

/// Uniform pick from a non-empty domain
fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Poisson(lambda) by Knuth's multiplication method; fine for the small means used here
fn poisson(rng: &mut StdRng, lambda: f64) -> u32 {
    let limit = (-lambda).exp();
    let mut k = 0u32;
    let mut p = 1.0f64;
    loop {
        p *= rng.gen::<f64>();
        if p <= limit {
            return k;
        }
        k += 1;
    }
}

/// Pre-built sampling tables
struct Samplers {
    channels: Weighted<&'static str>,
    age_groups: Weighted<&'static str>,
    income_bands: Weighted<&'static str>,
    loyalty_tiers: Weighted<&'static str>,
    payment_methods: Weighted<&'static str>,
    categories: Weighted<&'static str>,
    discounts: Weighted<f64>,
}

impl Samplers {
    fn new() -> Result<Self> {
        Ok(Self {
            channels: Weighted::new(&CHANNELS)?,
            age_groups: Weighted::new(&AGE_GROUPS)?,
            income_bands: Weighted::new(&INCOME_BANDS)?,
            loyalty_tiers: Weighted::new(&LOYALTY_TIERS)?,
            payment_methods: Weighted::new(&PAYMENT_METHODS)?,
            categories: Weighted::new(&CATEGORIES)?,
            discounts: Weighted::new(&DISCOUNTS)?,
        })
    }
}

/// First day of the trailing window ending at `today`
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(WINDOW_MONTHS))
        .unwrap_or(today)
}

/// Generate `rows` orders with an explicitly seeded RNG.
///
/// Same `(rows, seed, today)` always yields the same table. Dates fall in
/// `[today - 12 months, today]`.
pub fn generate_orders(rows: usize, seed: u64, today: NaiveDate) -> Result<Vec<OrderRecord>> {
    let samplers = Samplers::new()?;
    let mut rng = StdRng::seed_from_u64(seed);

    let start = window_start(today);
    let span_days = (today - start).num_days();

    let mut orders = Vec::with_capacity(rows);
    for i in 0..rows {
        let country = pick(&mut rng, &COUNTRIES);
        let city = pick(&mut rng, cities_of(country));
        let channel = samplers.channels.sample(&mut rng);
        let gender = pick(&mut rng, &GENDERS);
        let age_group = samplers.age_groups.sample(&mut rng);
        let income_band = samplers.income_bands.sample(&mut rng);
        let loyalty_tier = samplers.loyalty_tiers.sample(&mut rng);
        let payment_method = samplers.payment_methods.sample(&mut rng);

        let category = samplers.categories.sample(&mut rng);
        let subcategory = pick(&mut rng, subcategories_of(category));
        let brand = match brands_of(subcategory) {
            Some(brands) => pick(&mut rng, brands),
            None => STORE_BRAND,
        };

        let units = poisson(&mut rng, units_mean_of(category)).max(1);
        let (price_lo, price_hi) = price_range_of(category);
        let unit_price_aed = round2(rng.gen_range(price_lo..price_hi));
        let discount_pct = samplers.discounts.sample(&mut rng);
        let vat_pct = VAT_PCT;

        let gross = units as f64 * unit_price_aed;
        let sales_aed = round2(gross * (1.0 - discount_pct / 100.0) * (1.0 + vat_pct / 100.0));
        let cost_aed = round2(gross * rng.gen_range(COST_SHARE.0..COST_SHARE.1));
        let profit_aed = round2(sales_aed - cost_aed);

        let order_date = start + Duration::days(rng.gen_range(0..=span_days));
        let customer_id = format!("CUST{}", rng.gen_range(1..CUSTOMER_POOL));

        orders.push(OrderRecord {
            order_id: format!("ORD{}", FIRST_ORDER_NO + i),
            order_date,
            country: country.to_string(),
            city: city.to_string(),
            channel: channel.to_string(),
            customer_id,
            gender: gender.to_string(),
            age_group: age_group.to_string(),
            income_band: income_band.to_string(),
            loyalty_tier: loyalty_tier.to_string(),
            payment_method: payment_method.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            brand: brand.to_string(),
            units,
            unit_price_aed,
            discount_pct,
            vat_pct,
            sales_aed,
            cost_aed,
            profit_aed,
        });
    }

    tracing::debug!("D410: generated {} orders (seed {})", orders.len(), seed);
    Ok(orders)
}
