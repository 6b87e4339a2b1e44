//! Case Management Service Library
//!
//! 分层架构：
//! - `domain`: 实体与仓储接口
//! - `application`: 传输对象与应用服务
//! - `infrastructure`: PostgreSQL 仓储实现与建表迁移
//! - `api`: HTTP 路由层

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod state;
