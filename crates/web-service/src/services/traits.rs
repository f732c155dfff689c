//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::models::common::PageParams;
use database::{AdminUserSearchResult, DatabaseResult};

/// 用户服务 trait 定义
///
/// 作为应用层的端口(Port)，具体实现由 [`crate::services::UserService`] 提供。
/// 路由层通过 `Arc<dyn UserServiceTrait>` 持有服务，测试时可替换为内存实现。
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync + 'static {
    /// 管理员分页查询用户
    ///
    /// # 参数
    /// - `mobile`: 手机号码（模糊搜索）
    /// - `page`: 分页参数
    ///
    /// # 返回值
    /// 返回当前页的用户列表和总数
    async fn page_users(&self, mobile: &str, page: PageParams) -> DatabaseResult<AdminUserSearchResult>;
}
