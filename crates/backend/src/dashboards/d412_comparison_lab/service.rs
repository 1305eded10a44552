use anyhow::Result;
use contracts::dashboards::common::ChartSpec;
use contracts::dashboards::d412_comparison_lab::{
    ComparisonLabRequest, Question, QuestionMeta, QuestionResponse,
};
use contracts::domain::a030_sales_order::{OrderRecord, ReportedOrder};

use crate::dashboards::charts::{bar, grouped_bar, money_axis, monthly_lines};
use crate::dashboards::d410_global_sales::service::{filtered_view, report_rows};
use crate::shared::data::dataset::get_dataset;
use crate::shared::pipeline::aggregate::{self, sort_desc};
use crate::shared::pipeline::filter::RowFilter;
use crate::shared::pipeline::Dimension;

const TOP_BRANDS: usize = 5;

/// Question list for the selector
pub fn question_catalog() -> Vec<QuestionMeta> {
    Question::all().into_iter().map(QuestionMeta::from).collect()
}

/// Rows of `view` whose `dim` is one of `values`; empty `values` keeps everything
fn narrow<'a>(view: &[&'a ReportedOrder], dim: Dimension, values: &[String]) -> Vec<&'a ReportedOrder> {
    RowFilter::new().select(dim, values).apply(view.iter().copied())
}

/// Requested value, or the first option as a select box would show it
fn pick_one(options: &[String], requested: Option<&String>) -> Vec<String> {
    match requested {
        Some(value) => vec![value.clone()],
        None => options.first().cloned().into_iter().collect(),
    }
}

/// Chart plus the scoped selector state for one question
struct Answer {
    options: Vec<String>,
    selection: Vec<String>,
    chart: ChartSpec,
}

impl Answer {
    fn unscoped(chart: ChartSpec) -> Self {
        Self {
            options: Vec::new(),
            selection: Vec::new(),
            chart,
        }
    }
}

/// Sales by `group_dim` after narrowing `view` to a single value of `scope_dim`
fn scoped_sales(
    view: &[&ReportedOrder],
    title: &str,
    scope_dim: Dimension,
    requested: Option<&String>,
    group_dim: Dimension,
    axis: String,
) -> Answer {
    let options = aggregate::distinct_sorted(view, scope_dim);
    let selection = pick_one(&options, requested);
    let scoped = narrow(view, scope_dim, &selection);
    let mut groups = aggregate::sales_by(&scoped, group_dim);
    sort_desc(&mut groups);
    Answer {
        options,
        selection,
        chart: bar(title, group_dim.column(), axis, groups),
    }
}

/// Run one question over the globally filtered table
pub fn answer_question(orders: &[OrderRecord], request: &ComparisonLabRequest) -> QuestionResponse {
    let currency = request.currency;
    let reported = report_rows(orders, currency);
    let view = filtered_view(&reported, &request.filter);

    let question = &request.question;
    let title = question.title();
    let sales_axis = money_axis("Sales", currency.code());

    let answer = match question {
        Question::CompareCountries { first, second } => {
            let options = aggregate::distinct_sorted(&view, Dimension::Country);
            let mut selection: Vec<String> = Vec::new();
            for country in [first, second].into_iter().flatten() {
                if !selection.contains(country) {
                    selection.push(country.clone());
                }
            }
            let scoped = narrow(&view, Dimension::Country, &selection);
            let mut groups = aggregate::sales_by(&scoped, Dimension::Country);
            sort_desc(&mut groups);
            Answer {
                options,
                selection,
                chart: bar(title, "Country", sales_axis, groups),
            }
        }
        Question::SalesByGender => Answer::unscoped(bar(
            title,
            "Gender",
            sales_axis,
            aggregate::sales_by(&view, Dimension::Gender),
        )),
        Question::CategoriesInCountry { country } => scoped_sales(
            &view,
            title,
            Dimension::Country,
            country.as_ref(),
            Dimension::Category,
            sales_axis,
        ),
        Question::ChannelByMonth => Answer::unscoped(monthly_lines(
            title,
            sales_axis,
            aggregate::monthly_sales_by(&view, Dimension::Channel),
        )),
        Question::AovByPaymentMethod => Answer::unscoped(bar(
            title,
            "Payment_Method",
            money_axis("AOV", currency.code()),
            aggregate::mean_by(&view, Dimension::PaymentMethod, |r: &ReportedOrder| r.aov),
        )),
        Question::ProfitByLoyaltyTier => Answer::unscoped(bar(
            title,
            "Loyalty_Tier",
            money_axis("Profit", currency.code()),
            aggregate::profit_by(&view, Dimension::LoyaltyTier),
        )),
        Question::CategoryMixByAgeGroup => Answer::unscoped(grouped_bar(
            title,
            "Age_Group",
            sales_axis,
            aggregate::sales_by_pair(&view, Dimension::AgeGroup, Dimension::Category),
        )),
        Question::TopBrandsInSubcategory { subcategory } => {
            let options = aggregate::distinct_sorted(&view, Dimension::Subcategory);
            let selection = pick_one(&options, subcategory.as_ref());
            let scoped = narrow(&view, Dimension::Subcategory, &selection);
            Answer {
                options,
                selection,
                chart: bar(
                    title,
                    "Brand",
                    sales_axis,
                    aggregate::top_n_by_sales(&scoped, Dimension::Brand, TOP_BRANDS),
                ),
            }
        }
        Question::CitiesInCountry { country } => scoped_sales(
            &view,
            title,
            Dimension::Country,
            country.as_ref(),
            Dimension::City,
            sales_axis,
        ),
        Question::SalesByDiscountBucket => Answer::unscoped(bar(
            title,
            "Discount",
            sales_axis,
            aggregate::sales_by_discount_bucket(&view),
        )),
    };

    QuestionResponse {
        id: question.id(),
        title: title.to_string(),
        currency,
        scoped_input: question.scoped_input(),
        scoped_options: answer.options,
        scoped_selection: answer.selection,
        chart: answer.chart,
    }
}

pub fn get_answer(request: &ComparisonLabRequest) -> Result<QuestionResponse> {
    let dataset = get_dataset()?;
    let orders = dataset.orders_for(&request.dataset)?;
    Ok(answer_question(&orders, request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_global_sales::generator::generate_orders;
    use chrono::NaiveDate;
    use contracts::dashboards::common::{ChartKind, DatasetOverride};
    use contracts::dashboards::d410_global_sales::GlobalSalesFilter;
    use contracts::dashboards::d412_comparison_lab::ScopedInput;
    use contracts::enums::currency::Currency;

    fn orders() -> Vec<OrderRecord> {
        generate_orders(300, 42, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()).unwrap()
    }

    fn ask(orders: &[OrderRecord], question: Question) -> QuestionResponse {
        answer_question(
            orders,
            &ComparisonLabRequest {
                currency: Currency::AED,
                filter: GlobalSalesFilter::default(),
                question,
                dataset: DatasetOverride::default(),
            },
        )
    }

    fn chart_total(response: &QuestionResponse) -> f64 {
        response.chart.points.iter().map(|p| p.value).sum()
    }

    #[test]
    fn test_every_question_answers_with_its_chart_kind() {
        let orders = orders();
        for question in Question::all() {
            let kind = question.chart_kind();
            let id = question.id();
            let response = ask(&orders, question);
            assert_eq!(response.id, id);
            assert_eq!(response.chart.kind, kind);
            assert!(!response.chart.points.is_empty(), "question {id} is empty");
        }
    }

    #[test]
    fn test_catalog_lists_ten_questions() {
        let catalog = question_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].scoped_input, ScopedInput::CountryPair);
        assert_eq!(catalog[7].scoped_input, ScopedInput::Subcategory);
    }

    #[test]
    fn test_compare_two_countries() {
        let orders = orders();
        let response = ask(
            &orders,
            Question::CompareCountries {
                first: Some("UAE".into()),
                second: Some("India".into()),
            },
        );
        assert_eq!(response.scoped_selection, vec!["UAE", "India"]);
        assert!(response.chart.points.len() <= 2);
        assert!(response
            .chart
            .points
            .iter()
            .all(|p| p.x == "UAE" || p.x == "India"));

        let all = ask(
            &orders,
            Question::CompareCountries {
                first: None,
                second: None,
            },
        );
        assert!(all.scoped_selection.is_empty());
        assert_eq!(all.chart.points.len(), all.scoped_options.len());
    }

    #[test]
    fn test_same_country_twice_counts_once() {
        let response = ask(
            &orders(),
            Question::CompareCountries {
                first: Some("UAE".into()),
                second: Some("UAE".into()),
            },
        );
        assert_eq!(response.scoped_selection, vec!["UAE"]);
    }

    #[test]
    fn test_country_defaults_to_first_option() {
        let orders = orders();
        let response = ask(&orders, Question::CategoriesInCountry { country: None });
        assert_eq!(response.scoped_selection, vec![response.scoped_options[0].clone()]);

        let country = response.scoped_selection[0].clone();
        let expected: f64 = orders
            .iter()
            .filter(|o| o.country == country)
            .map(|o| o.sales_aed)
            .sum();
        assert!((chart_total(&response) - expected).abs() < 0.05);
    }

    #[test]
    fn test_cities_belong_to_country() {
        let orders = orders();
        let response = ask(
            &orders,
            Question::CitiesInCountry {
                country: Some("UAE".into()),
            },
        );
        for point in &response.chart.points {
            assert!(orders
                .iter()
                .any(|o| o.country == "UAE" && o.city == point.x));
        }
    }

    #[test]
    fn test_top_brands_bounded_and_sorted() {
        let response = ask(
            &orders(),
            Question::TopBrandsInSubcategory {
                subcategory: Some("Mobiles".into()),
            },
        );
        let values: Vec<f64> = response.chart.points.iter().map(|p| p.value).collect();
        assert!(values.len() <= TOP_BRANDS);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_discount_buckets_cover_all_sales() {
        let orders = orders();
        let response = ask(&orders, Question::SalesByDiscountBucket);
        let expected: f64 = orders.iter().map(|o| o.sales_aed).sum();
        assert!((chart_total(&response) - expected).abs() < 0.05);
        for point in &response.chart.points {
            assert!(["0%", "<=5%", "<=10%", "<=15%"].contains(&point.x.as_str()));
        }
    }

    #[test]
    fn test_channel_lines_are_grouped() {
        let response = ask(&orders(), Question::ChannelByMonth);
        assert_eq!(response.chart.kind, ChartKind::Line);
        assert!(response.chart.points.iter().all(|p| p.group.is_some()));
    }

    #[test]
    fn test_empty_view_gives_empty_chart() {
        let orders = orders();
        let request = ComparisonLabRequest {
            currency: Currency::USD,
            filter: GlobalSalesFilter {
                countries: vec!["Atlantis".into()],
                ..Default::default()
            },
            question: Question::TopBrandsInSubcategory { subcategory: None },
            dataset: DatasetOverride::default(),
        };
        let response = answer_question(&orders, &request);
        assert!(response.scoped_options.is_empty());
        assert!(response.scoped_selection.is_empty());
        assert!(response.chart.points.is_empty());
    }
}
