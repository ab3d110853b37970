//! Remedy catalogue handler.
//!
//! ```text
//! GET /api/remedies
//! GET /api/remedies?disease=Diabetes
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Remedy, RemedyCatalog};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string for `GET /api/remedies`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemediesQuery {
    /// Condition key, matched case-insensitively. Omit to list everything.
    #[param(example = "diabetes")]
    pub disease: Option<String>,
}

/// Catalogue response: one condition, or every condition.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum RemediesResponse {
    /// Remedies for the requested condition.
    Condition {
        disease: String,
        #[schema(value_type = Vec<Object>)]
        remedies: &'static [Remedy],
    },
    /// Every condition when no key is given.
    #[serde(rename_all = "camelCase")]
    Catalogue {
        message: String,
        diseases: Vec<String>,
        #[schema(value_type = Object)]
        all_remedies: RemedyCatalog,
    },
}

fn condition_keys(catalog: RemedyCatalog) -> Vec<String> {
    catalog.conditions().into_iter().map(str::to_owned).collect()
}

fn lookup(catalog: RemedyCatalog, disease: Option<&str>) -> Result<RemediesResponse, Error> {
    let key = disease
        .map(RemedyCatalog::normalise_key)
        .filter(|key| !key.is_empty());
    let Some(key) = key else {
        return Ok(RemediesResponse::Catalogue {
            message: "Available diseases".to_owned(),
            diseases: condition_keys(catalog),
            all_remedies: catalog,
        });
    };
    catalog
        .lookup(&key)
        .map(|entry| RemediesResponse::Condition {
            disease: entry.condition.to_owned(),
            remedies: entry.remedies,
        })
        .ok_or_else(|| {
            Error::not_found("Disease not found")
                .with_details(json!({ "availableDiseases": condition_keys(catalog) }))
        })
}

/// Look up remedies for a condition. Public.
#[utoipa::path(
    get,
    path = "/api/remedies",
    params(RemediesQuery),
    responses(
        (status = 200, description = "Remedies for one condition or the full catalogue", body = RemediesResponse),
        (status = 404, description = "Unknown condition; lists `availableDiseases`", body = ErrorSchema)
    ),
    tags = ["remedies"],
    operation_id = "getRemedies",
    security([])
)]
#[get("/remedies")]
pub async fn get_remedies(
    state: web::Data<HttpState>,
    query: web::Query<RemediesQuery>,
) -> ApiResult<web::Json<RemediesResponse>> {
    lookup(state.remedies, query.disease.as_deref()).map(web::Json)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::inbound::http::test_utils::test_ports;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(test_ports())))
                .service(web::scope("/api").service(get_remedies)),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[rstest]
    #[case("/api/remedies")]
    #[case("/api/remedies?disease=")]
    #[case("/api/remedies?disease=%20%20")]
    #[actix_web::test]
    async fn missing_key_lists_the_catalogue(#[case] uri: &str) {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Available diseases");
        assert_eq!(body["diseases"].as_array().map(Vec::len), Some(6));
        assert_eq!(body["allRemedies"]["diabetes"][0]["name"], "Bitter Gourd Juice");
    }

    #[actix_web::test]
    async fn padded_key_matches_after_trimming() {
        let (status, body) = get("/api/remedies?disease=%20Diabetes%09").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["disease"], "diabetes");
    }

    #[actix_web::test]
    async fn lookup_is_case_insensitive() {
        let (lower_status, lower) = get("/api/remedies?disease=diabetes").await;
        let (mixed_status, mixed) = get("/api/remedies?disease=Diabetes").await;
        assert_eq!(lower_status, StatusCode::OK);
        assert_eq!(mixed_status, StatusCode::OK);
        assert_eq!(lower, mixed);
        assert_eq!(lower["disease"], "diabetes");
        assert_eq!(lower["remedies"].as_array().map(Vec::len), Some(3));
    }

    #[actix_web::test]
    async fn unknown_key_lists_available_diseases() {
        let (status, body) = get("/api/remedies?disease=unknown-x").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Disease not found");
        assert_eq!(
            body["availableDiseases"],
            serde_json::json!(["diabetes", "hypertension", "arthritis", "obesity", "asthma", "anxiety"])
        );
    }
}
