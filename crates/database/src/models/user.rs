//! 用户数据库模型
//!
//! 定义管理员分页查询用户相关的模型结构体

use chrono::{DateTime, Utc};

/// 用户信息结构体
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AdminUserInfo {
    pub user_id: i64,
    pub mobile: String,
    /// 用户状态：1 正常，0 禁用
    pub status: i16,
    pub create_date: DateTime<Utc>,
}

/// 用户分页查询条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUserFilter {
    /// 手机号码（模糊搜索），为空时不过滤
    pub mobile: String,
    pub page_size: i64,
    pub offset: i64,
}

/// 用户搜索结果
#[derive(Debug, Clone)]
pub struct AdminUserSearchResult {
    pub users: Vec<AdminUserInfo>,
    pub total: u32,
}
