// ==========================================
// 法院庭审排期系统 - 法庭领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Room - 法庭
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,          // 法庭ID (稳定整数)
    pub is_virtual: bool, // 是否虚拟法庭 (线上庭审专用)
}

impl Room {
    pub fn new(id: i32, is_virtual: bool) -> Self {
        Self { id, is_virtual }
    }
}
