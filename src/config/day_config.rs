// ==========================================
// 法院庭审排期系统 - 工作日参数配置
// ==========================================
// 职责: 工作日数、每日分钟数、时隙粒度及其校验
// ==========================================

use crate::engine::error::{ScheduleError, ScheduleResult};
use serde::{Deserialize, Serialize};

// ==========================================
// DayConfig - 工作日参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    pub work_days: i32,       // 排期范围内的工作日数
    pub minutes_per_day: i32, // 每个工作日的总分钟数
    pub granularity: i32,     // 时隙粒度 (分钟)
}

impl DayConfig {
    pub fn new(work_days: i32, minutes_per_day: i32, granularity: i32) -> Self {
        Self {
            work_days,
            minutes_per_day,
            granularity,
        }
    }

    /// 每个工作日的时隙数
    ///
    /// # 规则
    /// - slots_per_day = ⌊minutes_per_day / granularity⌋ - 1
    pub fn slots_per_day(&self) -> i32 {
        self.minutes_per_day / self.granularity - 1
    }

    /// 校验工作日参数
    ///
    /// # 规则
    /// - work_days >= 1
    /// - granularity >= 1
    /// - slots_per_day >= 1 (粒度必须有意义地整除每日分钟数)
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.work_days < 1 {
            return Err(ScheduleError::InvalidInput(format!(
                "工作日数必须为正: work_days={}",
                self.work_days
            )));
        }
        if self.granularity < 1 {
            return Err(ScheduleError::InvalidInput(format!(
                "时隙粒度必须为正: granularity={}",
                self.granularity
            )));
        }
        if self.slots_per_day() < 1 {
            return Err(ScheduleError::InvalidInput(format!(
                "时隙粒度无法有意义地划分工作日: minutes_per_day={}, granularity={}",
                self.minutes_per_day, self.granularity
            )));
        }
        Ok(())
    }

    /// 将全局时隙索引转换为 "HH:MM" 起始时间
    pub fn format_timeslot(&self, timeslot: i32) -> String {
        let day_timeslot = timeslot % self.slots_per_day();
        let minutes = day_timeslot * self.granularity;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}
