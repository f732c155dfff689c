//! 管理员用户管理接口

use crate::extract::ValidatedQuery;
use crate::models::common::{ReplyList, ValidationErrorReply};
use crate::models::err::AppError;
use crate::models::users::{AdminPageUserQuery, AdminUserInfo};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use tracing::debug;

/// 管理员分页查询用户
///
/// 根据手机号码模糊搜索用户，支持分页。
///
/// 查询参数由 [`AdminPageUserQuery`] 决定，三个参数都是必填的文本参数：
///
/// - 参数缺失或者为空时，[`ValidatedQuery`] 会直接返回400，handler不会被调用
/// - `page` / `limit` 在handler中转换为数字，非数字或超出范围同样返回400
///
/// ## 返回值
///
/// [`ReplyList`] 中的 `page_index` / `page_size` 是本次请求实际使用的分页参数。
#[utoipa::path(get,
    path = "/admin/users",
    tag = "users",
    params(AdminPageUserQuery),
    responses(
        (status = 200, description = "Paged users", body = ReplyList<AdminUserInfo>),
        (status = 400, description = "Invalid query parameters", body = ValidationErrorReply),
    ),
)]
pub async fn page_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AdminPageUserQuery>,
) -> Result<Json<ReplyList<AdminUserInfo>>, AppError> {
    debug!("🔍 分页查询用户 {:#?}", query);

    let page = query.page_params()?;

    let result = state.user_service.page_users(query.mobile.trim(), page).await?;

    Ok(Json(ReplyList {
        total: result.total,
        data: result.users.into_iter().map(Into::into).collect(),
        page_index: page.page_index,
        page_size: page.page_size,
    }))
}
