//! PostgreSQL 案件 Repository 实现
//!
//! 读取案件时一并取回所属委托人

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lexcm_adapter_postgres::map_sqlx_error;
use lexcm_common::{CaseId, ClientId};
use lexcm_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::case::{Case, CaseWithClient, NewCase};
use crate::domain::client::Client;
use crate::domain::repositories::CaseRepository;

pub struct PostgresCaseRepository {
    pool: PgPool,
}

impl PostgresCaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 按案件 ID 取回案件及其委托人
    async fn fetch_with_client(&self, id: CaseId) -> AppResult<Option<CaseWithClient>> {
        let row = sqlx::query_as::<_, CaseWithClientRow>(&format!(
            "{} WHERE c.id = $1",
            SELECT_WITH_CLIENT
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find case", e))?;

        Ok(row.map(Into::into))
    }
}

const SELECT_WITH_CLIENT: &str = r#"
    SELECT c.id, c.client_id, c.case_name, c.description, c.status, c.court_date,
           c.created_at, c.updated_at,
           cl.name AS client_name, cl.email AS client_email,
           cl.created_at AS client_created_at, cl.updated_at AS client_updated_at
    FROM cases c
    JOIN clients cl ON cl.id = c.client_id
"#;

#[derive(sqlx::FromRow)]
struct CaseWithClientRow {
    id: i32,
    client_id: i32,
    case_name: String,
    description: Option<String>,
    status: String,
    court_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    client_name: String,
    client_email: String,
    client_created_at: DateTime<Utc>,
    client_updated_at: DateTime<Utc>,
}

impl From<CaseWithClientRow> for CaseWithClient {
    fn from(row: CaseWithClientRow) -> Self {
        Self {
            case: Case {
                id: CaseId(row.id),
                client_id: ClientId(row.client_id),
                case_name: row.case_name,
                description: row.description,
                status: row.status,
                court_date: row.court_date,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            client: Client {
                id: ClientId(row.client_id),
                name: row.client_name,
                email: row.client_email,
                created_at: row.client_created_at,
                updated_at: row.client_updated_at,
            },
        }
    }
}

#[async_trait]
impl CaseRepository for PostgresCaseRepository {
    async fn insert(&self, new_case: &NewCase) -> AppResult<CaseWithClient> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO cases (client_id, case_name, description, status, court_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(new_case.client_id.0)
        .bind(&new_case.case_name)
        .bind(&new_case.description)
        .bind(&new_case.status)
        .bind(new_case.court_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to insert case", e))?;

        self.fetch_with_client(CaseId(id)).await?.ok_or_else(|| {
            AppError::database(format!("Inserted case {} disappeared before read-back", id))
        })
    }

    async fn find_all(&self) -> AppResult<Vec<CaseWithClient>> {
        let rows = sqlx::query_as::<_, CaseWithClientRow>(SELECT_WITH_CLIENT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list cases", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: CaseId) -> AppResult<Option<CaseWithClient>> {
        self.fetch_with_client(id).await
    }

    async fn update(&self, case: &Case) -> AppResult<Option<CaseWithClient>> {
        let result = sqlx::query(
            r#"
            UPDATE cases
            SET case_name = $2, description = $3, status = $4, court_date = $5,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(case.id.0)
        .bind(&case.case_name)
        .bind(&case.description)
        .bind(&case.status)
        .bind(case.court_date)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update case", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.fetch_with_client(case.id).await
    }

    async fn delete(&self, id: CaseId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete case", e))?;

        Ok(result.rows_affected() > 0)
    }
}
