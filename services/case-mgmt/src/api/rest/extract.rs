//! 请求提取器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use lexcm_errors::AppError;

/// JSON 请求体提取器
///
/// 把反序列化失败（缺字段、类型不符、非法 JSON）统一翻译为
/// 结构化的 422 校验错误，在进入服务层之前拒绝
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
