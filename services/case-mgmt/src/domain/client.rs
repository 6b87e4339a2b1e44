//! 委托人实体

use chrono::{DateTime, Utc};
use lexcm_common::ClientId;
use serde::{Deserialize, Serialize};

/// 委托人实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待插入的委托人（id 和时间戳由存储层生成）
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
}

/// 委托人部分更新
///
/// None 表示请求中未出现该字段，保持原值
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Client {
    /// 应用部分更新，只覆盖补丁中出现的字段
    ///
    /// `updated_at` 由存储层在写回时刷新
    pub fn apply_patch(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
