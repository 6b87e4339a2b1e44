//! 传输对象（边界校验形状，与存储形状分离）

pub mod case_dto;
pub mod client_dto;

pub use case_dto::{CaseCreate, CaseRead, CaseUpdate};
pub use client_dto::{ClientCreate, ClientRead, ClientUpdate};

use serde::{Deserialize, Deserializer};

/// 区分“字段未出现”与“字段显式为 null”的反序列化辅助
///
/// 与 `#[serde(default)]` 配合：未出现 → None，null → Some(None)
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
