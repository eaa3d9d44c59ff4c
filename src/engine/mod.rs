// ==========================================
// 法院庭审排期系统 - 引擎层
// ==========================================
// 职责: 排期计算内核 (指派 → 冲突图 → 着色 → 时隙)
// 红线: 单线程纯 CPU 计算,引擎内不做 I/O;
//       所有规则失败必须带原因向上传播
// ==========================================

pub mod capacity;
pub mod coloring;
pub mod conflict;
pub mod error;
pub mod extract;
pub mod flow_graph;
pub mod max_flow;
pub mod orchestrator;
pub mod slotting;

// 重导出核心引擎
pub use capacity::JudgeCapacityEstimator;
pub use coloring::DsaturColorer;
pub use conflict::ConflictGraph;
pub use error::{ScheduleError, ScheduleResult};
pub use extract::AssignmentExtractor;
pub use flow_graph::{FlowEdge, FlowGraph, FlowNode};
pub use max_flow::MaxFlowSolver;
pub use orchestrator::ScheduleOrchestrator;
pub use slotting::SlotScheduler;
