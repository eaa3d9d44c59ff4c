// ==========================================
// 集成测试辅助函数
// ==========================================
#![allow(dead_code)]

use court_case_aps::domain::types::Sagstype;
use court_case_aps::domain::{Appointment, Judge, Meeting, Room};
use std::collections::{HashMap, HashSet};

/// 创建测试用的会议
pub fn create_test_meeting(id: i32, sagstype: Sagstype, is_virtual: bool) -> Meeting {
    Meeting::new(id, 30, sagstype, is_virtual)
}

/// 创建测试用的全技能法官
pub fn create_full_skill_judge(id: i32) -> Judge {
    Judge::new(id, Sagstype::ALL.to_vec(), false)
}

/// 创建测试用的线下法庭
pub fn create_test_room(id: i32) -> Room {
    Room::new(id, false)
}

/// 校验排期结果的通用不变式
///
/// - 每个预约的法官具备会议案件类型资格
/// - 每个会议 ID 恰好出现一次
/// - 同 (工作日, 时隙) 的预约不共用法官或法庭
pub fn verify_schedule_invariants(
    appointments: &[Appointment],
    meetings: &[Meeting],
    judges: &[Judge],
) {
    let meetings_by_id: HashMap<i32, &Meeting> =
        meetings.iter().map(|m| (m.id, m)).collect();
    let judges_by_id: HashMap<i32, &Judge> = judges.iter().map(|j| (j.id, j)).collect();

    // 每个会议恰好出现一次
    let scheduled: HashSet<i32> = appointments.iter().map(|a| a.meeting_id).collect();
    assert_eq!(
        scheduled.len(),
        appointments.len(),
        "存在会议被重复排期"
    );
    assert_eq!(scheduled.len(), meetings.len(), "存在会议未被排期");

    for appointment in appointments {
        let meeting = meetings_by_id
            .get(&appointment.meeting_id)
            .expect("预约指向未知会议");
        let judge = judges_by_id
            .get(&appointment.judge_id)
            .expect("预约指向未知法官");
        assert!(
            judge.has_skill(meeting.sagstype),
            "法官 {} 不具备会议 {} 的案件类型资格",
            judge.id,
            meeting.id
        );
        assert_eq!(appointment.duration_minutes, meeting.duration_minutes);
    }

    // 同时隙不可共用法官或法庭
    let mut per_slot: HashMap<(i32, i32), Vec<&Appointment>> = HashMap::new();
    for appointment in appointments {
        per_slot
            .entry((appointment.day, appointment.timeslot_start))
            .or_default()
            .push(appointment);
    }
    for ((day, slot), slot_appointments) in per_slot {
        let judges_in_slot: HashSet<i32> =
            slot_appointments.iter().map(|a| a.judge_id).collect();
        let rooms_in_slot: HashSet<i32> =
            slot_appointments.iter().map(|a| a.room_id).collect();
        assert_eq!(
            judges_in_slot.len(),
            slot_appointments.len(),
            "第 {} 天时隙 {} 出现法官重复预约",
            day,
            slot
        );
        assert_eq!(
            rooms_in_slot.len(),
            slot_appointments.len(),
            "第 {} 天时隙 {} 出现法庭重复预约",
            day,
            slot
        );
    }
}

/// 校验会议与法庭的线上/线下模式一致 (Combined/Layered 策略)
pub fn verify_virtual_mode_match(
    appointments: &[Appointment],
    meetings: &[Meeting],
    rooms: &[Room],
) {
    let meetings_by_id: HashMap<i32, &Meeting> =
        meetings.iter().map(|m| (m.id, m)).collect();
    let rooms_by_id: HashMap<i32, &Room> = rooms.iter().map(|r| (r.id, r)).collect();

    for appointment in appointments {
        let meeting = meetings_by_id[&appointment.meeting_id];
        let room = rooms_by_id[&appointment.room_id];
        assert_eq!(
            meeting.is_virtual, room.is_virtual,
            "会议 {} 与法庭 {} 的模式不一致",
            meeting.id, room.id
        );
    }
}
