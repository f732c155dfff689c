//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod traits;
pub mod user;

// 重新导出具体的类型
pub use traits::UserRepositoryTrait;
pub use user::UserRepository;
