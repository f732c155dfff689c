//! 请求参数提取器
//!
//! 在handler执行之前完成参数绑定和校验，校验失败的请求不会进入业务逻辑。

use crate::models::err::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

/// 从查询字符串中提取参数并执行 [`Validate`] 校验
///
/// - 查询字符串无法反序列化时返回 [`AppError::InvalidQuery`]
/// - 校验失败时返回 [`AppError::ValidationFailed`]，最终转换为带字段错误列表的400
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        if let Err(errors) = value.validate() {
            debug!("🚫 参数校验失败: {errors}");
            return Err(errors.into());
        }

        Ok(ValidatedQuery(value))
    }
}
