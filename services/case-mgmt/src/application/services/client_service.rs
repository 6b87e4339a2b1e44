//! 委托人应用服务
//!
//! 每个操作是一次传输对象到仓储调用的直接翻译

use std::sync::Arc;

use lexcm_common::ClientId;
use lexcm_errors::AppResult;
use metrics::counter;
use tracing::{debug, info};

use super::ensure_not_blank;
use crate::application::dto::{ClientCreate, ClientRead, ClientUpdate};
use crate::domain::repositories::ClientRepository;

pub struct ClientService {
    repo: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { repo }
    }

    /// 创建委托人；邮箱唯一性由存储层约束裁决
    pub async fn create(&self, input: ClientCreate) -> AppResult<ClientRead> {
        ensure_not_blank("name", &input.name)?;
        ensure_not_blank("email", &input.email)?;

        let created = self.repo.insert(&input.into()).await?;
        counter!("clients_created_total").increment(1);
        info!(client_id = %created.id, "Client created");
        Ok(created.into())
    }

    /// 查询全部委托人，无分页
    pub async fn list(&self) -> AppResult<Vec<ClientRead>> {
        let clients = self.repo.find_all().await?;
        Ok(clients.into_iter().map(Into::into).collect())
    }

    /// 根据 ID 查询；缺席是正常返回值而不是错误
    pub async fn get(&self, id: ClientId) -> AppResult<Option<ClientRead>> {
        Ok(self.repo.find_by_id(id).await?.map(Into::into))
    }

    /// 部分更新：只覆盖补丁中出现的字段
    pub async fn update(&self, id: ClientId, patch: ClientUpdate) -> AppResult<Option<ClientRead>> {
        if let Some(name) = &patch.name {
            ensure_not_blank("name", name)?;
        }
        if let Some(email) = &patch.email {
            ensure_not_blank("email", email)?;
        }

        let Some(mut client) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        client.apply_patch(patch.into());

        let updated = self.repo.update(&client).await?;
        if updated.is_some() {
            info!(client_id = %id, "Client updated");
        }
        Ok(updated.map(Into::into))
    }

    /// 删除；行不存在时静默无操作
    pub async fn delete(&self, id: ClientId) -> AppResult<()> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(client_id = %id, "Client deleted");
        } else {
            debug!(client_id = %id, "Delete requested for absent client");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::Client;
    use crate::domain::repositories::MockClientRepository;
    use chrono::Utc;
    use lexcm_errors::AppError;

    fn stored_client(id: i32) -> Client {
        let now = Utc::now();
        Client {
            id: ClientId(id),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let repo = MockClientRepository::new();
        let service = ClientService::new(Arc::new(repo));

        let result = service
            .create(ClientCreate {
                name: "  ".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_returns_persisted_entity() {
        let mut repo = MockClientRepository::new();
        repo.expect_insert()
            .withf(|new_client| new_client.name == "Ada")
            .returning(|_| Ok(stored_client(1)));
        let service = ClientService::new(Arc::new(repo));

        let created = service
            .create(ClientCreate {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, ClientId(1));
        assert_eq!(created.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_get_absent_is_none_not_error() {
        let mut repo = MockClientRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = ClientService::new(Arc::new(repo));

        assert!(service.get(ClientId(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let mut repo = MockClientRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(stored_client(1))));
        repo.expect_update()
            .withf(|client| client.name == "Grace" && client.email == "ada@example.com")
            .returning(|client| Ok(Some(client.clone())));
        let service = ClientService::new(Arc::new(repo));

        let updated = service
            .update(
                ClientId(1),
                ClientUpdate {
                    name: Some("Grace".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Grace");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_update_absent_returns_none() {
        let mut repo = MockClientRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = ClientService::new(Arc::new(repo));

        let result = service
            .update(ClientId(42), ClientUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_is_silent_noop() {
        let mut repo = MockClientRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = ClientService::new(Arc::new(repo));

        assert!(service.delete(ClientId(42)).await.is_ok());
    }
}
