//! 案件 Repository trait

use async_trait::async_trait;
use lexcm_common::CaseId;
use lexcm_errors::AppResult;

use crate::domain::case::{Case, CaseWithClient, NewCase};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// 插入新案件，返回带生成 id 和时间戳的实体及其委托人
    ///
    /// `client_id` 指向不存在的委托人时返回约束冲突错误
    async fn insert(&self, new_case: &NewCase) -> AppResult<CaseWithClient>;

    /// 查询全部案件及各自的委托人（存储默认顺序）
    async fn find_all(&self) -> AppResult<Vec<CaseWithClient>>;

    /// 根据 ID 查找案件及其委托人
    async fn find_by_id(&self, id: CaseId) -> AppResult<Option<CaseWithClient>>;

    /// 写回案件字段并刷新 updated_at；行不存在时返回 None
    async fn update(&self, case: &Case) -> AppResult<Option<CaseWithClient>>;

    /// 删除案件，返回是否真的删除了行
    async fn delete(&self, id: CaseId) -> AppResult<bool>;
}
