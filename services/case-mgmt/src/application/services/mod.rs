pub mod case_service;
pub mod client_service;

pub use case_service::CaseService;
pub use client_service::ClientService;

use lexcm_errors::{AppError, AppResult};

/// 必填文本字段不允许为空白
pub(crate) fn ensure_not_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_blank() {
        assert!(ensure_not_blank("name", "Ada").is_ok());
        assert!(ensure_not_blank("name", "").is_err());
        assert!(ensure_not_blank("name", "   ").is_err());
    }
}
