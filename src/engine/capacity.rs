// ==========================================
// 法院庭审排期系统 - 法官容量估算引擎
// ==========================================
// 职责: 按技能稀缺度加权估算每位法官的公平案件份额
// 红线: 纯函数,无状态、无副作用、无 I/O
// ==========================================

use crate::domain::types::Sagstype;
use crate::domain::{Judge, Meeting};
use std::collections::HashMap;

// ==========================================
// JudgeCapacityEstimator - 法官容量估算器
// ==========================================
pub struct JudgeCapacityEstimator {
    // 无状态引擎,不需要注入依赖
}

impl JudgeCapacityEstimator {
    pub fn new() -> Self {
        Self {}
    }

    /// 估算单个法官的源边容量
    ///
    /// # 规则
    /// - m = 案件类型总数, k = 该法官技能数, n(t) = 类型 t 的会议数
    /// - 类型 t 的总权重 W(t) = Σ_{掌握 t 的法官 j} (m - k(j) + 1)
    /// - 期望负载 = Σ_{t ∈ 技能} [(m - k + 1) / W(t)] · n(t)
    /// - 容量 = 四舍五入; 有技能的法官下限为 1
    ///
    /// 技能越少的法官对其覆盖类型越稀缺,权重越高;
    /// 各类型的份额比例在可审法官之间合计为 n(t)
    pub fn estimate(&self, meetings: &[Meeting], judges: &[Judge], judge: &Judge) -> i32 {
        let m = Sagstype::universe_size() as i32;
        let k = judge.skills.len() as i32;

        let meetings_by_type = count_meetings_by_type(meetings);
        let weights_by_type = total_weights_by_type(judges, m);

        let mut expected_load = 0.0;
        for &skill in &judge.skills {
            let n_t = *meetings_by_type.get(&skill).unwrap_or(&0);
            let w_t = *weights_by_type.get(&skill).unwrap_or(&0);
            if n_t > 0 && w_t > 0 {
                let weight = (m - k + 1) as f64;
                expected_load += weight / w_t as f64 * n_t as f64;
            }
        }

        let mut capacity = expected_load.round() as i32;
        if capacity < 1 && k >= 1 {
            capacity = 1;
        }
        capacity
    }

    /// 估算全部法官的源边容量 (与 judges 顺序对齐)
    pub fn estimate_all(&self, meetings: &[Meeting], judges: &[Judge]) -> Vec<i32> {
        judges
            .iter()
            .map(|judge| self.estimate(meetings, judges, judge))
            .collect()
    }
}

impl Default for JudgeCapacityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// 按案件类型统计会议数 n(t)
fn count_meetings_by_type(meetings: &[Meeting]) -> HashMap<Sagstype, i32> {
    let mut counts = HashMap::new();
    for meeting in meetings {
        *counts.entry(meeting.sagstype).or_insert(0) += 1;
    }
    counts
}

/// 按案件类型累加全体法官权重 W(t)
fn total_weights_by_type(judges: &[Judge], m: i32) -> HashMap<Sagstype, i32> {
    let mut weights = HashMap::new();
    for judge in judges {
        let k = judge.skills.len() as i32;
        for &skill in &judge.skills {
            *weights.entry(skill).or_insert(0) += m - k + 1;
        }
    }
    weights
}
