use crate::models::common::ValidationErrorReply;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 查询字符串无法解析，和校验错误一样返回400字段错误列表
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorReply::from(&err))).into_response()
            }
            AppError::InvalidQuery(err) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorReply::from(&err))).into_response()
            }
            AppError::RepositoryError(err) => match err {
                DatabaseError::SqlxError(sqlx::Error::RowNotFound) => {
                    (StatusCode::NOT_FOUND, format!("Record not found: {err}")).into_response()
                }
                _ => {
                    error!("❌ 数据库错误: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response()
                }
            },
            AppError::InternalError(err) => {
                error!("❌ 内部错误: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {err}")).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        let mut errors = ValidationErrors::new();
        errors.add("mobile", ValidationError::new("required"));
        assert_eq!(AppError::from(errors).into_response().status(), StatusCode::BAD_REQUEST);

        let not_found = AppError::from(DatabaseError::SqlxError(sqlx::Error::RowNotFound));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let conn = AppError::from(DatabaseError::connection("refused"));
        assert_eq!(conn.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = AppError::from(color_eyre::eyre::eyre!("boom"));
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
