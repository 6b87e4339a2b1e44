//! 案件应用服务

use std::sync::Arc;

use lexcm_common::CaseId;
use lexcm_errors::AppResult;
use metrics::counter;
use tracing::{debug, info};

use super::ensure_not_blank;
use crate::application::dto::{CaseCreate, CaseRead, CaseUpdate};
use crate::domain::repositories::CaseRepository;

pub struct CaseService {
    repo: Arc<dyn CaseRepository>,
}

impl CaseService {
    pub fn new(repo: Arc<dyn CaseRepository>) -> Self {
        Self { repo }
    }

    /// 创建案件；委托人引用有效性由外键约束裁决，无默认兜底
    pub async fn create(&self, input: CaseCreate) -> AppResult<CaseRead> {
        ensure_not_blank("case_name", &input.case_name)?;

        let created = self.repo.insert(&input.into()).await?;
        counter!("cases_created_total").increment(1);
        info!(case_id = %created.case.id, client_id = %created.case.client_id, "Case created");
        Ok(created.into())
    }

    /// 查询全部案件（含委托人），无分页
    pub async fn list(&self) -> AppResult<Vec<CaseRead>> {
        let cases = self.repo.find_all().await?;
        Ok(cases.into_iter().map(Into::into).collect())
    }

    /// 根据 ID 查询；缺席是正常返回值而不是错误
    pub async fn get(&self, id: CaseId) -> AppResult<Option<CaseRead>> {
        Ok(self.repo.find_by_id(id).await?.map(Into::into))
    }

    /// 部分更新：只覆盖补丁中出现的字段，不能重新挂接委托人
    pub async fn update(&self, id: CaseId, patch: CaseUpdate) -> AppResult<Option<CaseRead>> {
        if let Some(case_name) = &patch.case_name {
            ensure_not_blank("case_name", case_name)?;
        }

        let Some(record) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut case = record.case;
        case.apply_patch(patch.into());

        let updated = self.repo.update(&case).await?;
        if updated.is_some() {
            info!(case_id = %id, "Case updated");
        }
        Ok(updated.map(Into::into))
    }

    /// 删除；行不存在时静默无操作
    pub async fn delete(&self, id: CaseId) -> AppResult<()> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(case_id = %id, "Case deleted");
        } else {
            debug!(case_id = %id, "Delete requested for absent case");
        }
        Ok(())
    }
}
