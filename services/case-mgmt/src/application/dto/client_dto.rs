//! 委托人传输对象

use chrono::{DateTime, Utc};
use lexcm_common::ClientId;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientPatch, NewClient};

/// 创建委托人的输入
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub email: String,
}

/// 委托人部分更新的输入，所有字段可选
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// 对外返回的委托人
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRead {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClientCreate> for NewClient {
    fn from(input: ClientCreate) -> Self {
        Self {
            name: input.name,
            email: input.email,
        }
    }
}

impl From<ClientUpdate> for ClientPatch {
    fn from(input: ClientUpdate) -> Self {
        Self {
            name: input.name,
            email: input.email,
        }
    }
}

impl From<Client> for ClientRead {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name_and_email() {
        let err = serde_json::from_str::<ClientCreate>(r#"{"name":"Ada"}"#);
        assert!(err.is_err());

        let ok: ClientCreate =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(ok.email, "ada@example.com");
    }

    #[test]
    fn test_update_fields_default_to_absent() {
        let update: ClientUpdate = serde_json::from_str(r#"{"name":"Grace"}"#).unwrap();
        assert_eq!(update.name.as_deref(), Some("Grace"));
        assert!(update.email.is_none());

        let empty: ClientUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.name.is_none());
        assert!(empty.email.is_none());
    }
}
