//! 委托人 Repository trait

use async_trait::async_trait;
use lexcm_common::ClientId;
use lexcm_errors::AppResult;

use crate::domain::client::{Client, NewClient};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// 插入新委托人，返回带生成 id 和时间戳的实体
    ///
    /// 邮箱重复时返回约束冲突错误
    async fn insert(&self, new_client: &NewClient) -> AppResult<Client>;

    /// 查询全部委托人（存储默认顺序）
    async fn find_all(&self) -> AppResult<Vec<Client>>;

    /// 根据 ID 查找委托人
    async fn find_by_id(&self, id: ClientId) -> AppResult<Option<Client>>;

    /// 写回委托人字段并刷新 updated_at；行不存在时返回 None
    async fn update(&self, client: &Client) -> AppResult<Option<Client>>;

    /// 删除委托人，返回是否真的删除了行
    async fn delete(&self, id: ClientId) -> AppResult<bool>;
}
