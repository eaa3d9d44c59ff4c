// ==========================================
// 法院庭审排期系统 - 领域类型定义
// ==========================================
// 职责: 定义案件类型等封闭枚举
// 红线: 枚举封闭,序列化格式与外部 JSON 契约一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 案件类型 (Sagstype)
// ==========================================
// 封闭集合: 刑事(Straffe) / 民事(Civile) / 强制(Tvang)
// 序列化格式: 与丹麦法院数据源一致的原文字符串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sagstype {
    Straffe, // 刑事案件
    Civile,  // 民事案件
    Tvang,   // 强制案件
}

impl Sagstype {
    /// 案件类型全集（顺序固定,供权重计算与测试数据生成使用）
    pub const ALL: [Sagstype; 3] = [Sagstype::Straffe, Sagstype::Civile, Sagstype::Tvang];

    /// 案件类型总数 m
    pub fn universe_size() -> usize {
        Self::ALL.len()
    }
}

impl fmt::Display for Sagstype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sagstype::Straffe => write!(f, "Straffe"),
            Sagstype::Civile => write!(f, "Civile"),
            Sagstype::Tvang => write!(f, "Tvang"),
        }
    }
}
