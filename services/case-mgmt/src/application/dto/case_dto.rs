//! 案件传输对象

use chrono::{DateTime, Utc};
use lexcm_common::{CaseId, ClientId};
use serde::{Deserialize, Serialize};

use super::client_dto::ClientRead;
use super::double_option;
use crate::domain::case::{Case, CasePatch, CaseWithClient, DEFAULT_STATUS, NewCase};

/// 创建案件的输入
///
/// `status` 未提供时取默认值 "Open"
#[derive(Debug, Clone, Deserialize)]
pub struct CaseCreate {
    pub client_id: ClientId,
    pub case_name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub court_date: Option<DateTime<Utc>>,
}

/// 案件部分更新的输入
///
/// `description` 和 `court_date` 可显式置空；请求中
/// 未出现的字段保持原值。案件不能变更所属委托人
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseUpdate {
    pub case_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub court_date: Option<Option<DateTime<Utc>>>,
}

/// 对外返回的案件，嵌套所属委托人
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRead {
    pub id: CaseId,
    pub client_id: ClientId,
    pub case_name: String,
    pub description: Option<String>,
    pub status: String,
    pub court_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client: ClientRead,
}

impl From<CaseCreate> for NewCase {
    fn from(input: CaseCreate) -> Self {
        Self {
            client_id: input.client_id,
            case_name: input.case_name,
            description: input.description,
            status: input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            court_date: input.court_date,
        }
    }
}

impl From<CaseUpdate> for CasePatch {
    fn from(input: CaseUpdate) -> Self {
        Self {
            case_name: input.case_name,
            description: input.description,
            status: input.status,
            court_date: input.court_date,
        }
    }
}

impl From<CaseWithClient> for CaseRead {
    fn from(record: CaseWithClient) -> Self {
        let CaseWithClient { case, client } = record;
        Self {
            id: case.id,
            client_id: case.client_id,
            case_name: case.case_name,
            description: case.description,
            status: case.status,
            court_date: case.court_date,
            created_at: case.created_at,
            updated_at: case.updated_at,
            client: client.into(),
        }
    }
}
