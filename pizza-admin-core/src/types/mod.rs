//! 类型定义模块

mod resource;
mod viewer;

pub use resource::{Identified, ResourceKind};
pub use viewer::AdminCapability;

// Re-export admin client 库的公共类型
pub use pizza_admin_client::{
    Franchise, FranchiseAdmin, ListQuery, ListResult, NamePattern, Role, RoleAssignment, Store,
    User,
};
