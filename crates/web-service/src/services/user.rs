//! 用户服务
//!
//! 提供管理员用户管理相关的业务逻辑操作

use crate::models::common::PageParams;
use crate::services::traits::UserServiceTrait;
use database::{AdminUserFilter, AdminUserSearchResult, DatabaseResult, UserRepositoryTrait};

#[derive(Debug, Clone)]
pub struct UserService<UR: UserRepositoryTrait> {
    user_repository: UR,
}

impl<UR: UserRepositoryTrait> UserService<UR> {
    pub fn new(user_repository: UR) -> Self {
        Self { user_repository }
    }
}

/// 将分页参数转换为仓库层的查询条件
fn build_filter(mobile: &str, page: PageParams) -> AdminUserFilter {
    AdminUserFilter {
        mobile: mobile.to_string(),
        page_size: i64::from(page.page_size),
        // 最大值为 (u32::MAX - 1) * u32::MAX，不会超出i64
        offset: page.offset() as i64,
    }
}

#[async_trait::async_trait]
impl<UR: UserRepositoryTrait> UserServiceTrait for UserService<UR> {
    async fn page_users(&self, mobile: &str, page: PageParams) -> DatabaseResult<AdminUserSearchResult> {
        self.user_repository.find_users(build_filter(mobile, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        filters: Mutex<Vec<AdminUserFilter>>,
    }

    #[async_trait::async_trait]
    impl UserRepositoryTrait for RecordingRepository {
        async fn find_users(&self, filter: AdminUserFilter) -> DatabaseResult<AdminUserSearchResult> {
            self.filters.lock().unwrap().push(filter);
            Ok(AdminUserSearchResult { users: vec![], total: 7 })
        }
    }

    #[test]
    fn test_build_filter() {
        let filter = build_filter("138", PageParams { page_index: 3, page_size: 20 });
        assert_eq!(
            filter,
            AdminUserFilter {
                mobile: "138".to_string(),
                page_size: 20,
                offset: 40,
            }
        );
    }

    #[tokio::test]
    async fn test_page_users_delegates_to_repository() {
        let service = UserService::new(RecordingRepository::default());

        let result = service
            .page_users("13800001111", PageParams { page_index: 1, page_size: 10 })
            .await
            .unwrap();
        assert_eq!(result.total, 7);

        let filters = service.user_repository.filters.lock().unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].mobile, "13800001111");
        assert_eq!(filters[0].offset, 0);
        assert_eq!(filters[0].page_size, 10);
    }
}
