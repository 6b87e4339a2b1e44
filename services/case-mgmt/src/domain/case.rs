//! 案件实体

use chrono::{DateTime, Utc};
use lexcm_common::{CaseId, ClientId};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// 新建案件未指定状态时的默认值
pub const DEFAULT_STATUS: &str = "Open";

/// 案件实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub client_id: ClientId,
    pub case_name: String,
    pub description: Option<String>,
    pub status: String,
    pub court_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 案件及其委托人
///
/// 对外读取案件时总是携带所属委托人
#[derive(Debug, Clone, PartialEq)]
pub struct CaseWithClient {
    pub case: Case,
    pub client: Client,
}

/// 待插入的案件（id 和时间戳由存储层生成）
#[derive(Debug, Clone)]
pub struct NewCase {
    pub client_id: ClientId,
    pub case_name: String,
    pub description: Option<String>,
    pub status: String,
    pub court_date: Option<DateTime<Utc>>,
}

/// 案件部分更新
///
/// 外层 None 表示字段未出现；可空字段用双层 Option 区分
/// “未出现”与“显式置空”
#[derive(Debug, Clone, Default)]
pub struct CasePatch {
    pub case_name: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    pub court_date: Option<Option<DateTime<Utc>>>,
}

impl Case {
    /// 应用部分更新，只覆盖补丁中出现的字段
    ///
    /// 案件不能变更所属委托人，`client_id` 不在补丁范围内
    pub fn apply_patch(&mut self, patch: CasePatch) {
        if let Some(case_name) = patch.case_name {
            self.case_name = case_name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(court_date) = patch.court_date {
            self.court_date = court_date;
        }
    }
}
