// ==========================================
// 法院庭审排期系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 每个阶段的错误原样向上传播,引擎内部不做恢复
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum ScheduleError {
    // ===== 输入校验错误 =====
    #[error("输入数据非法: {0}")]
    InvalidInput(String),

    #[error("实体数量超限: {entity} 数量 {count} 超过 2^31")]
    TooManyEntities { entity: &'static str, count: usize },

    // ===== 配置错误 =====
    #[error("配置不一致: {0}")]
    InconsistentConfig(String),

    // ===== 求解错误 =====
    #[error("指派不可行: 需要流量 {required}, 实际饱和 {achieved}")]
    InfeasibleAssignment { required: i32, achieved: i32 },

    // ===== 着色错误 (保留; DSATUR 对简单图不会失败) =====
    #[error("着色失败: {0}")]
    ColoringFailure(String),
}

/// Result 类型别名
pub type ScheduleResult<T> = Result<T, ScheduleError>;
