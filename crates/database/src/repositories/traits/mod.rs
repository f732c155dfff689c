//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 约束
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send`/`Sync`：Web 服务中不同请求会在不同线程上并发访问同一个仓库实例
//! - `'static`：仓库作为应用服务长期存活，可以放入 `Arc` 在共享状态中传递
//!
//! 使用 [`async_trait`] 而不是原生的 async fn in trait，是为了保证 trait 可以作为
//! `dyn` 对象使用，方便在测试中替换为内存实现。

pub mod user;

// 重新导出
pub use user::UserRepositoryTrait;
