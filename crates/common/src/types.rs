//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 委托人 ID（数据库自增主键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ClientId(pub i32);

impl ClientId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 案件 ID（数据库自增主键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct CaseId(pub i32);

impl CaseId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(ClientId(42).to_string(), "42");
        assert_eq!(CaseId(7).to_string(), "7");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = ClientId(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: ClientId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}
