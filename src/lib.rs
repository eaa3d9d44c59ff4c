// ==========================================
// 法院庭审排期系统 - 核心库
// ==========================================
// 技术栈: Rust (纯 CPU 计算内核 + CLI)
// 系统定位: 会议-法官-法庭三方匹配 + 时隙着色排期
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 工作日参数与匹配选项
pub mod config;

// 引擎层 - 排期计算内核
pub mod engine;

// 导入导出层 - JSON 请求/响应
pub mod importer;

// 测试数据生成器
pub mod generator;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::Sagstype;

// 领域实体
pub use domain::{Appointment, Assignment, Judge, Meeting, MeetingJudge, Room};

// 配置
pub use config::{AssignStrategy, DayConfig, MatchingOptions};

// 引擎
pub use engine::{
    AssignmentExtractor, ConflictGraph, DsaturColorer, FlowGraph, JudgeCapacityEstimator,
    MaxFlowSolver, ScheduleOrchestrator, SlotScheduler,
};

// 错误类型
pub use engine::error::{ScheduleError, ScheduleResult};

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
