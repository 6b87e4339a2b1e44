//! PostgreSQL 委托人 Repository 实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lexcm_adapter_postgres::map_sqlx_error;
use lexcm_common::ClientId;
use lexcm_errors::AppResult;
use sqlx::PgPool;

use crate::domain::client::{Client, NewClient};
use crate::domain::repositories::ClientRepository;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i32,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: ClientId(row.id),
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn insert(&self, new_client: &NewClient) -> AppResult<Client> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(&new_client.name)
        .bind(&new_client.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to insert client", e))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM clients
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to list clients", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ClientId) -> AppResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find client", e))?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, client: &Client) -> AppResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            UPDATE clients
            SET name = $2, email = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(client.id.0)
        .bind(&client.name)
        .bind(&client.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update client", e))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: ClientId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete client", e))?;

        Ok(result.rows_affected() > 0)
    }
}
