// ==========================================
// 法院庭审排期系统 - 指派与预约领域模型
// ==========================================
// 职责: 定义流量求解之后的产出值对象
// 红线: 值对象自持有实体拷贝,不回引流量图
// ==========================================

use crate::domain::judge::Judge;
use crate::domain::meeting::Meeting;
use crate::domain::room::Room;
use serde::{Deserialize, Serialize};

// ==========================================
// MeetingJudge - 会议-法官配对
// ==========================================
// 用途: 两阶段策略第一阶段的中间产物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingJudge {
    pub meeting: Meeting, // 会议
    pub judge: Judge,     // 法官
}

impl MeetingJudge {
    pub fn new(meeting: Meeting, judge: Judge) -> Self {
        Self { meeting, judge }
    }
}

// ==========================================
// Assignment - 指派三元组 (会议, 法官, 法庭)
// ==========================================
// 红线: 仅在流量饱和后产生; 法官必须具备会议案件类型资格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub meeting: Meeting, // 会议
    pub judge: Judge,     // 法官
    pub room: Room,       // 法庭
}

impl Assignment {
    pub fn new(meeting: Meeting, judge: Judge, room: Room) -> Self {
        Self {
            meeting,
            judge,
            room,
        }
    }

    /// 判断两个指派是否冲突 (共用法官或共用法庭)
    pub fn conflicts_with(&self, other: &Assignment) -> bool {
        self.judge.id == other.judge.id || self.room.id == other.room.id
    }
}

// ==========================================
// Appointment - 排期预约
// ==========================================
// 用途: 管线最终输出; day = timeslot / 每日时隙数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub meeting_id: i32,       // 会议ID
    pub judge_id: i32,         // 法官ID
    pub room_id: i32,          // 法庭ID
    pub day: i32,              // 工作日索引 (从0开始)
    pub timeslot_start: i32,   // 起始时隙 (全局时隙索引)
    pub duration_minutes: i32, // 庭审时长 (分钟)
}
