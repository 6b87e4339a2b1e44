//! lexcm-bootstrap - 统一服务启动骨架
//!
//! 服务复用的启动逻辑：配置加载、基础设施初始化、优雅关闭

mod infrastructure;
mod retry;
mod runtime;

pub use infrastructure::*;
pub use retry::*;
pub use runtime::*;
