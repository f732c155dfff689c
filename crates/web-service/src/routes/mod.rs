//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::users::__path_page_users;
use crate::routes::users::page_users;
use crate::AppState;
use axum::Router;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod users;

/// 导出当前App的所有业务路由
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，
/// 例如 `routes!(get, get, post)` 会导致Panic，需要拆开定义。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(page_users)).with_state(state)
}

/// 创建路由以及对应的OpenAPI文档对象
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_parts(shared_state: AppState) -> (Router, OpenApiDoc) {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "users", description = r#"
管理后台用户管理接口：

- 按手机号码分页查询用户
            "#)
        ),
    )]
    struct ApiDoc;

    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts()
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式，用户可通过 /docs 访问文档网页地址
pub fn create_app_router(shared_state: AppState) -> Router {
    let (router, api) = create_app_parts(shared_state);
    router.merge(Scalar::with_url("/docs", api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::UserServiceTrait;
    use crate::models::common::PageParams;
    use database::{AdminUserSearchResult, DatabaseResult};
    use serde_json::Value;
    use std::sync::Arc;

    struct EmptyUserService;

    #[async_trait::async_trait]
    impl UserServiceTrait for EmptyUserService {
        async fn page_users(&self, _mobile: &str, _page: PageParams) -> DatabaseResult<AdminUserSearchResult> {
            Ok(AdminUserSearchResult { users: vec![], total: 0 })
        }
    }

    #[test]
    fn test_openapi_documents_query_params() {
        let (_, api) = create_app_parts(AppState {
            user_service: Arc::new(EmptyUserService),
        });
        let doc = serde_json::to_value(&api).unwrap();

        let params = doc["paths"]["/api/v1/admin/users"]["get"]["parameters"].as_array().unwrap();
        let find = |name: &str| params.iter().find(|p| p["name"] == name).cloned().unwrap_or(Value::Null);

        for (name, description) in [("mobile", "phone number"), ("page", "page number"), ("limit", "rows per page")] {
            let param = find(name);
            assert_eq!(param["in"], "query", "{name}");
            assert_eq!(param["required"], true, "{name}");
            assert_eq!(param["description"], description, "{name}");
        }

        assert!(doc["paths"]["/api/v1/admin/users"]["get"]["responses"]["400"].is_object());
    }
}
