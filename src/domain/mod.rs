// ==========================================
// 法院庭审排期系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod appointment;
pub mod judge;
pub mod meeting;
pub mod room;
pub mod types;

// 重导出核心类型
pub use appointment::{Appointment, Assignment, MeetingJudge};
pub use judge::Judge;
pub use meeting::Meeting;
pub use room::Room;
pub use types::Sagstype;
