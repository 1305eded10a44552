use axum::{http::StatusCode, Json};
use contracts::dashboards::d412_comparison_lab::{
    ComparisonLabRequest, QuestionMeta, QuestionResponse,
};

use crate::dashboards::d412_comparison_lab::service;
use crate::shared::error::status_for;

/// GET /api/d412/questions
pub async fn list_questions() -> Json<Vec<QuestionMeta>> {
    Json(service::question_catalog())
}

/// POST /api/d412/comparison-lab
pub async fn answer_question(
    Json(request): Json<ComparisonLabRequest>,
) -> Result<Json<QuestionResponse>, StatusCode> {
    tracing::info!(
        "D412 Comparison Lab: Q{} in {}",
        request.question.id(),
        request.currency
    );

    match service::get_answer(&request) {
        Ok(response) => {
            tracing::info!(
                "D412 Comparison Lab: Returning {} points",
                response.chart.points.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D412 Comparison Lab: Failed to answer Q{}: {}", request.question.id(), e);
            Err(status_for(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_questions() {
        let Json(questions) = list_questions().await;
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[9].id, 10);
    }
}
