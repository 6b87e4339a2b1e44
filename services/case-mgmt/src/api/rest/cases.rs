//! 案件 HTTP 路由

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use lexcm_common::CaseId;
use lexcm_errors::{AppError, AppResult};

use super::extract::ApiJson;
use crate::application::dto::{CaseCreate, CaseRead, CaseUpdate};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_case).get(list_cases))
        .route(
            "/{case_id}",
            get(get_case).put(update_case).delete(delete_case),
        )
}

async fn create_case(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CaseCreate>,
) -> AppResult<(StatusCode, Json<CaseRead>)> {
    let created = state.case_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_cases(State(state): State<AppState>) -> AppResult<Json<Vec<CaseRead>>> {
    Ok(Json(state.case_service.list().await?))
}

async fn get_case(
    State(state): State<AppState>,
    Path(case_id): Path<i32>,
) -> AppResult<Json<CaseRead>> {
    state
        .case_service
        .get(CaseId(case_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", case_id)))
}

async fn update_case(
    State(state): State<AppState>,
    Path(case_id): Path<i32>,
    ApiJson(patch): ApiJson<CaseUpdate>,
) -> AppResult<Json<CaseRead>> {
    state
        .case_service
        .update(CaseId(case_id), patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", case_id)))
}

async fn delete_case(
    State(state): State<AppState>,
    Path(case_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.case_service.delete(CaseId(case_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::api::rest::api_routes;
    use crate::application::services::{CaseService, ClientService};
    use crate::domain::case::{Case, CaseWithClient};
    use crate::domain::client::Client;
    use crate::domain::repositories::{MockCaseRepository, MockClientRepository};
    use crate::state::AppState;
    use lexcm_common::{CaseId, ClientId};
    use lexcm_errors::AppError;

    fn app_with(repo: MockCaseRepository) -> axum::Router {
        let state = AppState::new(
            Arc::new(ClientService::new(Arc::new(MockClientRepository::new()))),
            Arc::new(CaseService::new(Arc::new(repo))),
        );
        api_routes(state)
    }

    fn stored_case(id: i32) -> CaseWithClient {
        let now = Utc::now();
        CaseWithClient {
            case: Case {
                id: CaseId(id),
                client_id: ClientId(1),
                case_name: "Smith v. Jones".to_string(),
                description: None,
                status: "Open".to_string(),
                court_date: None,
                created_at: now,
                updated_at: now,
            },
            client: Client {
                id: ClientId(1),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                created_at: now,
                updated_at: now,
            },
        }
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_case_defaults_status_and_embeds_client() {
        let mut repo = MockCaseRepository::new();
        repo.expect_insert()
            .withf(|new_case| new_case.status == "Open")
            .returning(|_| Ok(stored_case(1)));

        let response = app_with(repo)
            .oneshot(json_request(
                "POST",
                "/api/cases/",
                r#"{"client_id":1,"case_name":"Smith v. Jones"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "Open");
        assert_eq!(body["description"], serde_json::Value::Null);
        assert_eq!(body["client"]["id"], 1);
        assert_eq!(body["client"]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_case_missing_client_id_is_422() {
        let repo = MockCaseRepository::new();

        let response = app_with(repo)
            .oneshot(json_request(
                "POST",
                "/api/cases/",
                r#"{"case_name":"Smith v. Jones"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["status"], 422);
    }

    #[tokio::test]
    async fn test_create_case_dangling_client_is_409() {
        let mut repo = MockCaseRepository::new();
        repo.expect_insert().returning(|_| {
            Err(AppError::conflict(
                "Failed to insert case: violates foreign key constraint",
            ))
        });

        let response = app_with(repo)
            .oneshot(json_request(
                "POST",
                "/api/cases/",
                r#"{"client_id":999,"case_name":"Smith v. Jones"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_list_cases_returns_200_with_nested_clients() {
        let mut repo = MockCaseRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![stored_case(1), stored_case(2)]));

        let response = app_with(repo)
            .oneshot(
                Request::builder()
                    .uri("/api/cases/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["client"]["name"], "Ada");
    }

    #[tokio::test]
    async fn test_get_absent_case_is_404() {
        let mut repo = MockCaseRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let response = app_with(repo)
            .oneshot(
                Request::builder()
                    .uri("/api/cases/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_case_patch_subset_of_fields() {
        let mut repo = MockCaseRepository::new();
        repo.expect_find_by_id().returning(|_| {
            let mut record = stored_case(1);
            record.case.description = Some("Contract dispute".to_string());
            Ok(Some(record))
        });
        repo.expect_update()
            .withf(|case| {
                case.status == "Closed" && case.description.as_deref() == Some("Contract dispute")
            })
            .returning(|case| {
                let mut record = stored_case(1);
                record.case = case.clone();
                record.case.updated_at = Utc::now();
                Ok(Some(record))
            });

        let response = app_with(repo)
            .oneshot(json_request(
                "PUT",
                "/api/cases/1",
                r#"{"status":"Closed"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "Closed");
        assert_eq!(body["description"], "Contract dispute");
    }

    #[tokio::test]
    async fn test_update_absent_case_is_404() {
        let mut repo = MockCaseRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let response = app_with(repo)
            .oneshot(json_request(
                "PUT",
                "/api/cases/42",
                r#"{"status":"Closed"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_case_is_204_even_when_absent() {
        let mut repo = MockCaseRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let response = app_with(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/cases/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
