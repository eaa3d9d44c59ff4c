// ==========================================
// 法院庭审排期系统 - 日志初始化
// ==========================================
// 职责: tracing 订阅器装配; 默认过滤只放行本 crate
//       引擎模块的结构化日志,外部依赖降到 warn
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤器: 排期引擎 info,其余依赖 warn
const DEFAULT_FILTER: &str = "warn,court_case_aps=info";

/// 测试过滤器: 引擎全量 debug,便于核对管线各阶段的输出
const TEST_FILTER: &str = "court_case_aps=debug";

/// 初始化 CLI 运行的日志订阅器
///
/// RUST_LOG 存在时优先生效; 否则退回 [`DEFAULT_FILTER`],
/// 即只输出排期管线自身的阶段日志
/// (例如 RUST_LOG=court_case_aps::engine=trace 可单独放大引擎层)
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 管线阶段日志较密,用紧凑单行格式
    fmt().with_env_filter(filter).with_target(true).compact().init();
}

/// 初始化测试用日志订阅器 (可重复调用,输出交给测试框架捕获)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}
