use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use axum::extract::rejection::QueryRejection;
use validator::ValidationErrors;

/// 分页查询信息
///
/// 由请求中的文本参数转换而来，参考 [`crate::models::users::AdminPageUserQuery::page_params`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 分页查询的开始页数，从1开始
    pub page_index: u32,

    /// 分页查询的每页大小
    pub page_size: u32,
}

impl PageParams {
    /// 当前页第一条记录的偏移量
    pub fn offset(&self) -> u64 {
        // saturating_sub(1)会保证结果>=0，不会出现溢出
        u64::from(self.page_index.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// 封装符合json-api的列表对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,
    #[schema(example = 146)]
    /// 分页查询总数
    pub total: u32,

    #[schema(example = 1)]
    /// 分页查询的开始页数
    pub page_index: u32,

    #[schema(example = 20)]
    /// 分页查询的每页大小
    pub page_size: u32,
}

/// 单个字段的校验错误
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, ToSchema, Serialize)]
pub struct FieldError {
    #[schema(example = "mobile")]
    pub field: String,

    #[schema(example = "required")]
    pub code: String,

    #[schema(example = "mobile number is required")]
    pub message: String,
}

/// 参数校验失败时返回的400错误信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ValidationErrorReply {
    #[schema(example = "Validate failed")]
    pub message: String,

    /// 按字段名排序的错误列表
    pub errors: Vec<FieldError>,
}

impl From<&ValidationErrors> for ValidationErrorReply {
    fn from(errors: &ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    code: err.code.to_string(),
                    message: err.message.as_ref().map_or_else(|| err.code.to_string(), |m| m.to_string()),
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));

        ValidationErrorReply {
            message: "Validate failed".to_string(),
            errors: field_errors,
        }
    }
}

/// 查询字符串无法解析时，整体作为 `query` 字段的错误返回
impl From<&QueryRejection> for ValidationErrorReply {
    fn from(rejection: &QueryRejection) -> Self {
        ValidationErrorReply {
            message: "Invalid query".to_string(),
            errors: vec![FieldError {
                field: "query".to_string(),
                code: "invalid_query".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_offset() {
        assert_eq!(PageParams { page_index: 1, page_size: 20 }.offset(), 0);
        assert_eq!(PageParams { page_index: 3, page_size: 20 }.offset(), 40);
        assert_eq!(PageParams { page_index: 0, page_size: 20 }.offset(), 0);
        assert_eq!(
            PageParams { page_index: u32::MAX, page_size: 100 }.offset(),
            u64::from(u32::MAX - 1) * 100
        );
    }

    #[test]
    fn test_validation_error_reply_sorted() {
        let mut errors = ValidationErrors::new();
        let mut page = ValidationError::new("required");
        page.message = Some(Cow::from("page number is required"));
        errors.add("page", page);
        errors.add("limit", ValidationError::new("required"));

        let reply = ValidationErrorReply::from(&errors);

        assert_eq!(reply.message, "Validate failed");
        assert_eq!(
            reply.errors,
            vec![
                FieldError {
                    field: "limit".to_string(),
                    code: "required".to_string(),
                    message: "required".to_string(),
                },
                FieldError {
                    field: "page".to_string(),
                    code: "required".to_string(),
                    message: "page number is required".to_string(),
                },
            ]
        );
    }
}
