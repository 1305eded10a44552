use chrono::{Datelike, NaiveDate};
use contracts::dashboards::common::KpiSummary;
use contracts::domain::a030_sales_order::round2;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Dimension, SalesRecord};

/// Aggregated value for one group key
pub type Group = (String, f64);

// ---------------------------------------------------------------------------
// KPI
// ---------------------------------------------------------------------------

pub fn total_sales<R: SalesRecord>(rows: &[&R]) -> f64 {
    round2(rows.iter().map(|r| r.sales()).sum())
}

pub fn total_profit<R: SalesRecord>(rows: &[&R]) -> f64 {
    round2(rows.iter().map(|r| r.profit()).sum())
}

pub fn units_sold<R: SalesRecord>(rows: &[&R]) -> u64 {
    rows.iter().map(|r| r.units() as u64).sum()
}

/// Number of distinct order keys
pub fn order_count<R: SalesRecord>(rows: &[&R]) -> usize {
    rows.iter()
        .map(|r| r.order_key())
        .collect::<HashSet<&str>>()
        .len()
}

/// Mean of per-order sales totals (rows grouped by order key first).
/// 0 for an empty table.
pub fn avg_order_value<R: SalesRecord>(rows: &[&R]) -> f64 {
    let mut per_order: HashMap<&str, f64> = HashMap::new();
    for row in rows {
        *per_order.entry(row.order_key()).or_insert(0.0) += row.sales();
    }
    if per_order.is_empty() {
        return 0.0;
    }
    round2(per_order.values().sum::<f64>() / per_order.len() as f64)
}

/// Profit / sales * 100, 0 when sales is 0
pub fn profit_margin<R: SalesRecord>(rows: &[&R]) -> f64 {
    let sales: f64 = rows.iter().map(|r| r.sales()).sum();
    if sales == 0.0 {
        return 0.0;
    }
    let profit: f64 = rows.iter().map(|r| r.profit()).sum();
    profit / sales * 100.0
}

pub fn kpi_summary<R: SalesRecord>(rows: &[&R]) -> KpiSummary {
    KpiSummary {
        total_sales: total_sales(rows),
        total_profit: total_profit(rows),
        order_count: order_count(rows),
        units_sold: units_sold(rows),
        avg_order_value: avg_order_value(rows),
        profit_margin: profit_margin(rows),
    }
}

// ---------------------------------------------------------------------------
// Group-by
// ---------------------------------------------------------------------------

/// Sum `metric` per key. Groups keep the order in which keys first appear.
/// Rows for which `key` returns `None` are skipped.
pub fn sum_by<R, K, M>(rows: &[&R], key: K, metric: M) -> Vec<Group>
where
    R: SalesRecord,
    K: Fn(&R) -> Option<String>,
    M: Fn(&R) -> f64,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for &row in rows {
        let Some(k) = key(row) else {
            continue;
        };
        match index.get(&k) {
            Some(&i) => groups[i].1 += metric(row),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, metric(row)));
            }
        }
    }

    for group in groups.iter_mut() {
        group.1 = round2(group.1);
    }
    groups
}

/// Sum of sales per value of `dim`
pub fn sales_by<R: SalesRecord>(rows: &[&R], dim: Dimension) -> Vec<Group> {
    sum_by(rows, |r| r.dimension(dim).map(str::to_string), |r| r.sales())
}

/// Sum of profit per value of `dim`
pub fn profit_by<R: SalesRecord>(rows: &[&R], dim: Dimension) -> Vec<Group> {
    sum_by(rows, |r| r.dimension(dim).map(str::to_string), |r| r.profit())
}

/// Arithmetic mean of `metric` per value of `dim`, first-appearance order
pub fn mean_by<R, M>(rows: &[&R], dim: Dimension, metric: M) -> Vec<Group>
where
    R: SalesRecord,
    M: Fn(&R) -> f64,
{
    let sums = sum_by(rows, |r| r.dimension(dim).map(str::to_string), &metric);
    let counts = sum_by(rows, |r| r.dimension(dim).map(str::to_string), |_| 1.0);
    sums.into_iter()
        .zip(counts)
        .map(|((key, sum), (_, count))| (key, round2(sum / count)))
        .collect()
}

/// Two-level sum (x, group), for grouped bars. First-appearance order of pairs.
pub fn sales_by_pair<R: SalesRecord>(
    rows: &[&R],
    x: Dimension,
    group: Dimension,
) -> Vec<(String, String, f64)> {
    const SEP: char = '\u{1f}';
    sum_by(
        rows,
        |r| Some(format!("{}{}{}", r.dimension(x)?, SEP, r.dimension(group)?)),
        |r| r.sales(),
    )
    .into_iter()
    .filter_map(|(key, value)| {
        let (a, b) = key.split_once(SEP)?;
        Some((a.to_string(), b.to_string(), value))
    })
    .collect()
}

/// Stable descending sort: equal values keep their current relative order
pub fn sort_desc(groups: &mut [Group]) {
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
}

/// Top `n` values of `dim` by summed sales
pub fn top_n_by_sales<R: SalesRecord>(rows: &[&R], dim: Dimension, n: usize) -> Vec<Group> {
    let mut groups = sales_by(rows, dim);
    sort_desc(&mut groups);
    groups.truncate(n);
    groups
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// First day of the date's month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sales per calendar month, chronological, months without orders omitted
pub fn monthly_sales<R: SalesRecord>(rows: &[&R]) -> Vec<(NaiveDate, f64)> {
    let mut months: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        if let Some(date) = row.order_date() {
            *months.entry(month_start(date)).or_insert(0.0) += row.sales();
        }
    }
    months.into_iter().map(|(m, v)| (m, round2(v))).collect()
}

/// Sales per (month, value of `dim`); sorted by month, then by key
pub fn monthly_sales_by<R: SalesRecord>(
    rows: &[&R],
    dim: Dimension,
) -> Vec<(NaiveDate, String, f64)> {
    let mut cells: BTreeMap<(NaiveDate, String), f64> = BTreeMap::new();
    for row in rows {
        let (Some(date), Some(key)) = (row.order_date(), row.dimension(dim)) else {
            continue;
        };
        *cells
            .entry((month_start(date), key.to_string()))
            .or_insert(0.0) += row.sales();
    }
    cells
        .into_iter()
        .map(|((m, k), v)| (m, k, round2(v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Discount buckets
// ---------------------------------------------------------------------------

/// Discount classification.
///
/// Bins are right-closed on the edges -0.1, 0.1, 5.1, 10.1, 15.1, so the
/// listed percentages 0/5/10/15 land in their own bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiscountBucket {
    Zero,
    UpTo5,
    UpTo10,
    UpTo15,
}

impl DiscountBucket {
    const EDGES: [f64; 5] = [-0.1, 0.1, 5.1, 10.1, 15.1];

    pub fn all() -> [DiscountBucket; 4] {
        [
            DiscountBucket::Zero,
            DiscountBucket::UpTo5,
            DiscountBucket::UpTo10,
            DiscountBucket::UpTo15,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountBucket::Zero => "0%",
            DiscountBucket::UpTo5 => "<=5%",
            DiscountBucket::UpTo10 => "<=10%",
            DiscountBucket::UpTo15 => "<=15%",
        }
    }

    /// `None` outside (-0.1, 15.1]
    pub fn classify(discount_pct: f64) -> Option<Self> {
        Self::all()
            .into_iter()
            .zip(Self::EDGES.windows(2))
            .find(|(_, edge)| discount_pct > edge[0] && discount_pct <= edge[1])
            .map(|(bucket, _)| bucket)
    }
}

/// Sales per discount bucket, in bucket order; empty buckets omitted
pub fn sales_by_discount_bucket<R: SalesRecord>(rows: &[&R]) -> Vec<Group> {
    let mut buckets: BTreeMap<DiscountBucket, f64> = BTreeMap::new();
    for row in rows {
        if let Some(bucket) = row.discount_pct().and_then(DiscountBucket::classify) {
            *buckets.entry(bucket).or_insert(0.0) += row.sales();
        }
    }
    buckets
        .into_iter()
        .map(|(b, v)| (b.label().to_string(), round2(v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Sorted distinct values of `dim`
pub fn distinct_sorted<R: SalesRecord>(rows: &[&R], dim: Dimension) -> Vec<String> {
    let mut values: Vec<String> = rows
        .iter()
        .filter_map(|r| r.dimension(dim))
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// (min, max) order date, `None` for an empty or undated table
pub fn date_bounds<R: SalesRecord>(rows: &[&R]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = rows.iter().filter_map(|r| r.order_date());
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}
