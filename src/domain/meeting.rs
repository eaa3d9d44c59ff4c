// ==========================================
// 法院庭审排期系统 - 会议(庭审)领域模型
// ==========================================

use crate::domain::types::Sagstype;
use serde::{Deserialize, Serialize};

// ==========================================
// Meeting - 庭审会议
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i32,               // 会议ID (稳定整数)
    pub duration_minutes: i32, // 庭审时长 (分钟)
    pub sagstype: Sagstype,    // 案件类型
    pub is_virtual: bool,      // 是否线上庭审
}

impl Meeting {
    pub fn new(id: i32, duration_minutes: i32, sagstype: Sagstype, is_virtual: bool) -> Self {
        Self {
            id,
            duration_minutes,
            sagstype,
            is_virtual,
        }
    }
}
