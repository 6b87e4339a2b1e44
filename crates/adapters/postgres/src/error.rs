//! 数据库错误映射
//!
//! 将 sqlx 错误翻译为应用错误分类：约束冲突单独识别，
//! 其余一律作为数据库错误向上传播

use lexcm_errors::AppError;

/// PostgreSQL SQLSTATE：唯一约束冲突
pub const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE：外键约束冲突
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE：非空约束冲突
pub const NOT_NULL_VIOLATION: &str = "23502";

/// 将 sqlx 错误映射为 AppError
///
/// 唯一约束和外键冲突映射为 Conflict（由存储引擎裁决，应用层不重试）
pub fn map_sqlx_error(context: &str, e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) | Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::conflict(format!("{}: {}", context, db_err.message()));
            }
            Some(NOT_NULL_VIOLATION) => {
                return AppError::validation(format!("{}: {}", context, db_err.message()));
            }
            _ => {}
        }
    }

    AppError::database(format!("{}: {}", context, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_database_variant() {
        let err = map_sqlx_error("Failed to find client", sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.to_string().contains("Failed to find client"));
    }
}
