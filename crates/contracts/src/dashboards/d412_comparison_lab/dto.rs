use serde::{Deserialize, Serialize};

use crate::dashboards::common::{ChartKind, ChartSpec, DatasetOverride};
use crate::dashboards::d410_global_sales::GlobalSalesFilter;
use crate::enums::currency::Currency;

/// Preset questions of the comparison lab.
///
/// Each variant carries only the extra input its chart needs. `None` for a
/// single-choice input means "first available value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "question", rename_all = "snake_case")]
pub enum Question {
    /// Q1: no countries = all countries
    CompareCountries {
        #[serde(default)]
        first: Option<String>,
        #[serde(default)]
        second: Option<String>,
    },
    SalesByGender,
    CategoriesInCountry {
        #[serde(default)]
        country: Option<String>,
    },
    ChannelByMonth,
    AovByPaymentMethod,
    ProfitByLoyaltyTier,
    CategoryMixByAgeGroup,
    TopBrandsInSubcategory {
        #[serde(default)]
        subcategory: Option<String>,
    },
    CitiesInCountry {
        #[serde(default)]
        country: Option<String>,
    },
    SalesByDiscountBucket,
}

/// Kind of extra selector a question shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopedInput {
    None,
    /// Up to two countries
    CountryPair,
    Country,
    Subcategory,
}

impl Question {
    /// 1-based number as shown in the question list
    pub fn id(&self) -> u8 {
        match self {
            Question::CompareCountries { .. } => 1,
            Question::SalesByGender => 2,
            Question::CategoriesInCountry { .. } => 3,
            Question::ChannelByMonth => 4,
            Question::AovByPaymentMethod => 5,
            Question::ProfitByLoyaltyTier => 6,
            Question::CategoryMixByAgeGroup => 7,
            Question::TopBrandsInSubcategory { .. } => 8,
            Question::CitiesInCountry { .. } => 9,
            Question::SalesByDiscountBucket => 10,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Question::CompareCountries { .. } => "Compare sales across two countries",
            Question::SalesByGender => "Compare sales by gender",
            Question::CategoriesInCountry { .. } => "Compare categories within a selected country",
            Question::ChannelByMonth => "Which channel performs best by month?",
            Question::AovByPaymentMethod => "Compare AOV across payment methods",
            Question::ProfitByLoyaltyTier => "Profit by loyalty tier",
            Question::CategoryMixByAgeGroup => "Category mix by age group",
            Question::TopBrandsInSubcategory { .. } => "Top 5 brands by sales in a subcategory",
            Question::CitiesInCountry { .. } => "City-wise sales in a selected country",
            Question::SalesByDiscountBucket => "Discount impact: sales by discount bucket",
        }
    }

    pub fn chart_kind(&self) -> ChartKind {
        match self {
            Question::ChannelByMonth => ChartKind::Line,
            Question::CategoryMixByAgeGroup => ChartKind::GroupedBar,
            _ => ChartKind::Bar,
        }
    }

    pub fn scoped_input(&self) -> ScopedInput {
        match self {
            Question::CompareCountries { .. } => ScopedInput::CountryPair,
            Question::CategoriesInCountry { .. } | Question::CitiesInCountry { .. } => {
                ScopedInput::Country
            }
            Question::TopBrandsInSubcategory { .. } => ScopedInput::Subcategory,
            _ => ScopedInput::None,
        }
    }

    /// Every question with empty scoped input, in list order
    pub fn all() -> Vec<Question> {
        vec![
            Question::CompareCountries {
                first: None,
                second: None,
            },
            Question::SalesByGender,
            Question::CategoriesInCountry { country: None },
            Question::ChannelByMonth,
            Question::AovByPaymentMethod,
            Question::ProfitByLoyaltyTier,
            Question::CategoryMixByAgeGroup,
            Question::TopBrandsInSubcategory { subcategory: None },
            Question::CitiesInCountry { country: None },
            Question::SalesByDiscountBucket,
        ]
    }
}

/// Entry of GET /api/d412/questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionMeta {
    pub id: u8,
    pub title: String,
    pub chart: ChartKind,
    pub scoped_input: ScopedInput,
    /// Request template with empty scoped input
    pub template: Question,
}

impl From<Question> for QuestionMeta {
    fn from(question: Question) -> Self {
        Self {
            id: question.id(),
            title: question.title().to_string(),
            chart: question.chart_kind(),
            scoped_input: question.scoped_input(),
            template: question,
        }
    }
}

/// POST /api/d412/comparison-lab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonLabRequest {
    #[serde(default)]
    pub currency: Currency,
    /// Global sidebar filter, applied before the question's own scope
    #[serde(default)]
    pub filter: GlobalSalesFilter,
    pub question: Question,
    #[serde(default)]
    pub dataset: DatasetOverride,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: u8,
    pub title: String,
    pub currency: Currency,
    pub scoped_input: ScopedInput,
    /// Choices for the scoped selector, sorted
    pub scoped_options: Vec<String>,
    /// Values actually used to narrow the table
    pub scoped_selection: Vec<String>,
    pub chart: ChartSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_sequential() {
        let ids: Vec<u8> = Question::all().iter().map(|q| q.id()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_question_tagged_json() {
        let q: Question = serde_json::from_str(
            r#"{"question":"top_brands_in_subcategory","subcategory":"Mobiles"}"#,
        )
        .unwrap();
        assert_eq!(
            q,
            Question::TopBrandsInSubcategory {
                subcategory: Some("Mobiles".into())
            }
        );

        let q: Question = serde_json::from_str(r#"{"question":"compare_countries"}"#).unwrap();
        assert_eq!(
            q,
            Question::CompareCountries {
                first: None,
                second: None
            }
        );
    }

    #[test]
    fn test_chart_kinds() {
        assert_eq!(Question::ChannelByMonth.chart_kind(), ChartKind::Line);
        assert_eq!(
            Question::CategoryMixByAgeGroup.chart_kind(),
            ChartKind::GroupedBar
        );
        assert_eq!(Question::SalesByGender.chart_kind(), ChartKind::Bar);
    }
}
