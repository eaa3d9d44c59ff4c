// ==========================================
// 法院庭审排期系统 - 时隙排布引擎
// ==========================================
// 职责: 将着色结果映射为 (工作日, 时隙) 预约
// 红线: 颜色即全局时隙索引; 超出粒度的时长溢出
//       不在此处建模,由下游拒绝或重排
// ==========================================

use crate::config::DayConfig;
use crate::domain::Appointment;
use crate::engine::conflict::ConflictGraph;
use tracing::{debug, warn};

// ==========================================
// SlotScheduler - 时隙排布器
// ==========================================
pub struct SlotScheduler {
    // 无状态引擎,不需要注入依赖
}

impl SlotScheduler {
    pub fn new() -> Self {
        Self {}
    }

    /// 从已着色的冲突图产出预约列表
    ///
    /// # 规则
    /// - day = color / slots_per_day
    /// - timeslot_start = color
    /// - duration = 会议时长
    ///
    /// # 参数
    /// - graph: 已着色的冲突图
    /// - day_config: 工作日参数 (已校验)
    pub fn schedule(&self, graph: &ConflictGraph, day_config: &DayConfig) -> Vec<Appointment> {
        let slots_per_day = day_config.slots_per_day();
        let horizon = day_config.work_days * slots_per_day;
        let mut appointments = Vec::with_capacity(graph.num_vertices());

        for i in 0..graph.num_vertices() {
            let color = graph.color(i);
            debug_assert!(color >= 0, "排布前冲突图必须完成着色");

            if color >= horizon {
                warn!(
                    meeting_id = graph.vertex(i).meeting.id,
                    timeslot = color,
                    horizon,
                    "时隙超出排期范围,下游需拒绝或重排"
                );
            }

            let assignment = graph.vertex(i);
            appointments.push(Appointment {
                meeting_id: assignment.meeting.id,
                judge_id: assignment.judge.id,
                room_id: assignment.room.id,
                day: color / slots_per_day,
                timeslot_start: color,
                duration_minutes: assignment.meeting.duration_minutes,
            });
        }

        debug!(count = appointments.len(), "预约排布完成");
        appointments
    }
}

impl Default for SlotScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Sagstype;
    use crate::domain::{Assignment, Judge, Meeting, Room};
    use crate::engine::coloring::DsaturColorer;

    fn assignment(meeting_id: i32, judge_id: i32, room_id: i32) -> Assignment {
        Assignment::new(
            Meeting::new(meeting_id, 30, Sagstype::Straffe, false),
            Judge::new(judge_id, vec![Sagstype::Straffe], false),
            Room::new(room_id, false),
        )
    }

    #[test]
    fn test_colors_map_to_days_and_slots() {
        // 16 个共用法庭的指派在 15 时隙/日下跨入第二天
        let assignments: Vec<Assignment> =
            (1..=16).map(|id| assignment(id, id, 1)).collect();
        let mut graph = ConflictGraph::build(assignments);
        DsaturColorer::new().color(&mut graph);

        let day_config = DayConfig::new(2, 480, 30);
        let appointments = SlotScheduler::new().schedule(&graph, &day_config);

        assert_eq!(appointments.len(), 16);
        let max_slot = appointments.iter().map(|a| a.timeslot_start).max().unwrap();
        assert_eq!(max_slot, 15);
        let second_day = appointments.iter().find(|a| a.timeslot_start == 15).unwrap();
        assert_eq!(second_day.day, 1);
    }

    #[test]
    fn test_non_conflicting_meetings_share_slot_zero() {
        let mut graph =
            ConflictGraph::build(vec![assignment(1, 1, 1), assignment(2, 2, 2)]);
        DsaturColorer::new().color(&mut graph);

        let day_config = DayConfig::new(1, 480, 30);
        let appointments = SlotScheduler::new().schedule(&graph, &day_config);

        assert!(appointments.iter().all(|a| a.timeslot_start == 0 && a.day == 0));
    }

    #[test]
    fn test_duration_passes_through() {
        let mut graph = ConflictGraph::build(vec![Assignment::new(
            Meeting::new(1, 90, Sagstype::Civile, false),
            Judge::new(1, vec![Sagstype::Civile], false),
            Room::new(1, false),
        )]);
        DsaturColorer::new().color(&mut graph);

        let appointments =
            SlotScheduler::new().schedule(&graph, &DayConfig::new(1, 480, 30));
        assert_eq!(appointments[0].duration_minutes, 90);
    }
}
