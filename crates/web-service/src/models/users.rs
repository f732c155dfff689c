//! 管理员用户管理相关的请求参数和返回对象

use crate::models::common::PageParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

/// 每页最多返回的记录数
pub const MAX_PAGE_SIZE: u32 = 100;

/// 管理员分页查询用户的参数
///
/// 三个参数都以文本形式从查询字符串中绑定，去掉首尾空白后不能为空。
/// 缺失的参数按空字符串处理，这样缺失和空值都会以字段校验错误的形式返回。
///
/// `page` 和 `limit` 的数字转换由 [`AdminPageUserQuery::page_params`] 完成。
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq, IntoParams, Validate)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct AdminPageUserQuery {
    /// phone number
    #[param(required = true, example = "13800001111")]
    #[validate(custom(function = "mobile_filter"))]
    pub mobile: String,

    /// page number
    #[param(required = true, example = "1")]
    #[validate(custom(function = "not_blank", message = "page number is required"))]
    pub page: String,

    /// rows per page
    #[param(required = true, example = "20")]
    #[validate(custom(function = "not_blank", message = "rows per page is required"))]
    pub limit: String,
}

/// 去掉首尾空白后不能为空
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// 手机号码过滤条件：不能为空，也不能包含控制字符（数据库不接受 `\0`）
fn mobile_filter(value: &str) -> Result<(), ValidationError> {
    let (code, message) = if value.trim().is_empty() {
        ("required", "mobile number is required")
    } else if value.chars().any(char::is_control) {
        ("invalid_characters", "mobile number must not contain control characters")
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    Err(err)
}

impl AdminPageUserQuery {
    /// 将文本类型的 `page` / `limit` 转换为数字分页参数
    ///
    /// - 非数字返回 `invalid_number` 错误
    /// - `page` 小于1，或者 `limit` 不在 `1..=MAX_PAGE_SIZE` 范围内返回 `range` 错误
    ///
    /// 两个字段的错误会一起返回，方便调用方一次性修正。
    pub fn page_params(&self) -> Result<PageParams, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let page_index = parse_in_range(&self.page, 1, u32::MAX, "page number must be a positive integer")
            .map_err(|err| errors.add("page", err))
            .ok();
        let page_size = parse_in_range(
            &self.limit,
            1,
            MAX_PAGE_SIZE,
            "rows per page must be an integer between 1 and 100",
        )
        .map_err(|err| errors.add("limit", err))
        .ok();

        match (page_index, page_size) {
            (Some(page_index), Some(page_size)) => Ok(PageParams { page_index, page_size }),
            _ => Err(errors),
        }
    }
}

fn parse_in_range(value: &str, min: u32, max: u32, message: &'static str) -> Result<u32, ValidationError> {
    let number = value.trim().parse::<u64>().map_err(|_| {
        let mut err = ValidationError::new("invalid_number");
        err.message = Some(Cow::from(message));
        err.add_param(Cow::from("value"), &value);
        err
    })?;

    if number < u64::from(min) || number > u64::from(max) {
        let mut err = ValidationError::new("range");
        err.message = Some(Cow::from(message));
        err.add_param(Cow::from("min"), &min);
        err.add_param(Cow::from("max"), &max);
        err.add_param(Cow::from("value"), &number);
        return Err(err);
    }

    // 上面已经检查过范围，不会失败
    Ok(number as u32)
}

/// 用户信息
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct AdminUserInfo {
    #[schema(example = 1)]
    pub user_id: i64,

    #[schema(example = "13800001111")]
    /// 手机号码
    pub mobile: String,

    #[schema(example = 1)]
    /// 用户状态：1 正常，0 禁用
    pub status: i16,

    /// 注册时间
    pub create_date: DateTime<Utc>,
}

impl From<database::AdminUserInfo> for AdminUserInfo {
    fn from(user: database::AdminUserInfo) -> Self {
        AdminUserInfo {
            user_id: user.user_id,
            mobile: user.mobile,
            status: user.status,
            create_date: user.create_date,
        }
    }
}
