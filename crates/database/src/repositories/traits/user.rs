//! 用户仓库 trait 定义

use crate::models::user::{AdminUserFilter, AdminUserSearchResult};
use crate::DatabaseResult;

/// 用户仓库trait定义
///
/// 目前只提供管理员分页查询用户的能力
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + 'static {
    /// 根据查询条件分页搜索用户
    ///
    /// # 参数
    /// - `filter`: 手机号码过滤条件以及分页参数，参考 [`AdminUserFilter`]
    ///
    /// # 返回值
    /// 返回包含当前页用户列表和总数的结果 [`AdminUserSearchResult`]
    async fn find_users(&self, filter: AdminUserFilter) -> DatabaseResult<AdminUserSearchResult>;
}
