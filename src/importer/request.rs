// ==========================================
// 法院庭审排期系统 - JSON 请求/响应契约
// ==========================================
// 职责: 外部 JSON 形状 ↔ 领域实体的转换
// 红线: 字段名与外部数据源契约保持一致
//       (meetings/Judges/CourtRooms/min_per_work_day)
// ==========================================

use crate::config::DayConfig;
use crate::domain::types::Sagstype;
use crate::domain::{Appointment, Judge, Meeting, Room};
use crate::engine::error::{ScheduleError, ScheduleResult};
use serde::{Deserialize, Serialize};

// ==========================================
// 请求侧记录
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: i32,
    pub duration: i32, // 分钟
    pub sagstype: Sagstype,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeRecord {
    pub id: i32,
    pub skills: Vec<Sagstype>,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: i32,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
}

// ==========================================
// ScheduleRequest - 排期请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub meetings: Vec<MeetingRecord>,
    #[serde(rename = "Judges")]
    pub judges: Vec<JudgeRecord>,
    #[serde(rename = "CourtRooms")]
    pub court_rooms: Vec<RoomRecord>,
    pub work_days: i32,
    pub min_per_work_day: i32,
    pub granularity: i32,
}

impl ScheduleRequest {
    /// 从 JSON 字符串解析请求
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScheduleError::InvalidInput(format!("JSON 请求解析失败: {}", e)))
    }

    /// 拆解为领域实体与工作日参数
    pub fn into_parts(self) -> (Vec<Meeting>, Vec<Judge>, Vec<Room>, DayConfig) {
        let meetings = self
            .meetings
            .into_iter()
            .map(|m| Meeting::new(m.id, m.duration, m.sagstype, m.is_virtual))
            .collect();
        let judges = self
            .judges
            .into_iter()
            .map(|j| Judge::new(j.id, j.skills, j.is_virtual))
            .collect();
        let rooms = self
            .court_rooms
            .into_iter()
            .map(|r| Room::new(r.id, r.is_virtual))
            .collect();
        let day_config = DayConfig::new(self.work_days, self.min_per_work_day, self.granularity);
        (meetings, judges, rooms, day_config)
    }
}

// ==========================================
// ScheduleResponse - 排期响应
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub appointments: Vec<Appointment>,
}

impl ScheduleResponse {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// 序列化为带缩进的 JSON
    pub fn to_json_pretty(&self) -> ScheduleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScheduleError::InvalidInput(format!("JSON 响应序列化失败: {}", e)))
    }
}
