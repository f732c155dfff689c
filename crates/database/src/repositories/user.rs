//! 用户仓库
//!
//! 负责用户相关的数据库操作

use crate::models::user::{AdminUserFilter, AdminUserInfo, AdminUserSearchResult};
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 带总数的查询行
#[derive(sqlx::FromRow)]
struct AdminUserRow {
    #[sqlx(flatten)]
    user: AdminUserInfo,
    total_count: i64,
}

/// 用户仓库结构体
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// 创建新的用户仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 当前页为空时单独统计总数
    async fn count_users(&self, mobile: &str, like: &str) -> DatabaseResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM sys_user
            WHERE ($1 = '' OR mobile LIKE $2)
            "#,
        )
        .bind(mobile)
        .bind(like)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

/// 根据当前页的第一行确定总数
///
/// 返回 `None` 表示需要单独统计：窗口函数在没有返回行时拿不到总数，
/// 翻页越界（`offset > 0`）时不能简单认为总数为0。
fn page_total(first_total: Option<i64>, offset: i64) -> Option<i64> {
    match first_total {
        Some(total) => Some(total),
        None if offset > 0 => None,
        None => Some(0),
    }
}

/// 将手机号码转换为 `LIKE` 模糊匹配参数
///
/// `%`、`_` 和 `\` 会被转义，保证用户输入只做字面匹配
pub fn like_pattern(mobile: &str) -> String {
    let mut pattern = String::with_capacity(mobile.len() + 2);
    pattern.push('%');
    for c in mobile.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    /// 根据查询条件分页搜索用户
    ///
    /// # SQL 查询说明
    ///
    /// 1. 使用 `COUNT(*) OVER ()` 窗口函数在同一次查询中拿到总记录数
    /// 2. `mobile` 为空字符串时不过滤，否则做模糊匹配
    /// 3. 按创建时间倒序，`id` 作为相同时间时的稳定排序
    ///
    /// 翻页越界时会再统计一次总数，参考 [`page_total`]。
    async fn find_users(&self, filter: AdminUserFilter) -> DatabaseResult<AdminUserSearchResult> {
        debug!(
            "🔍 搜索用户 - 手机号码: {:?}, 页面大小: {}, 偏移量: {}",
            filter.mobile, filter.page_size, filter.offset
        );

        let like = like_pattern(&filter.mobile);

        let rows: Vec<AdminUserRow> = sqlx::query_as(
            r#"
            SELECT id AS user_id,
                   mobile,
                   status,
                   create_date,
                   COUNT(*) OVER () AS total_count
            FROM sys_user
            WHERE ($1 = '' OR mobile LIKE $2)
            ORDER BY create_date DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&filter.mobile)
        .bind(&like)
        .bind(filter.page_size)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = match page_total(rows.first().map(|r| r.total_count), filter.offset) {
            Some(total) => total,
            None => self.count_users(&filter.mobile, &like).await?,
        };
        let total = u32::try_from(total).unwrap_or(u32::MAX);

        let users: Vec<AdminUserInfo> = rows.into_iter().map(|r| r.user).collect();

        debug!("✅ 搜索完成 - 找到 {} 个用户，总计 {} 个", users.len(), total);

        Ok(AdminUserSearchResult { users, total })
    }
}
