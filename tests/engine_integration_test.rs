// ==========================================
// 排期引擎集成测试
// ==========================================
// 测试目标: 三种指派策略下的完整管线行为
// 覆盖范围: 标准场景、边界场景、不可行场景
// ==========================================

mod helpers;

use court_case_aps::config::{AssignStrategy, DayConfig, MatchingOptions};
use court_case_aps::domain::types::Sagstype;
use court_case_aps::domain::{Judge, Meeting, Room};
use court_case_aps::{ScheduleError, ScheduleOrchestrator};
use helpers::{
    create_full_skill_judge, create_test_meeting, create_test_room,
    verify_schedule_invariants, verify_virtual_mode_match,
};

const ALL_STRATEGIES: [AssignStrategy; 3] = [
    AssignStrategy::Combined,
    AssignStrategy::TwoStage,
    AssignStrategy::Layered,
];

fn run_strategy(
    strategy: AssignStrategy,
    meetings: &[Meeting],
    judges: &[Judge],
    rooms: &[Room],
    day_config: &DayConfig,
) -> Result<Vec<court_case_aps::Appointment>, ScheduleError> {
    ScheduleOrchestrator::new(MatchingOptions::with_strategy(strategy))
        .run(meetings, judges, rooms, day_config)
}

// ==========================================
// 标准场景
// ==========================================

#[test]
fn test_trivial_single_case_all_strategies() {
    let meetings = vec![create_test_meeting(1, Sagstype::Straffe, false)];
    let judges = vec![Judge::new(1, vec![Sagstype::Straffe], false)];
    let rooms = vec![create_test_room(1)];
    let day_config = DayConfig::new(1, 480, 30);

    for strategy in ALL_STRATEGIES {
        let appointments =
            run_strategy(strategy, &meetings, &judges, &rooms, &day_config).unwrap();
        assert_eq!(appointments.len(), 1, "策略 {} 预约数不符", strategy);
        let appointment = &appointments[0];
        assert_eq!(
            (appointment.meeting_id, appointment.judge_id, appointment.room_id),
            (1, 1, 1)
        );
        assert_eq!((appointment.day, appointment.timeslot_start), (0, 0));
        assert_eq!(appointment.duration_minutes, 30);
    }
}

#[test]
fn test_two_meetings_one_room_get_distinct_slots() {
    let meetings = vec![
        create_test_meeting(1, Sagstype::Straffe, false),
        create_test_meeting(2, Sagstype::Straffe, false),
    ];
    let judges = vec![
        Judge::new(1, vec![Sagstype::Straffe], false),
        Judge::new(2, vec![Sagstype::Straffe], false),
    ];
    let rooms = vec![create_test_room(1)];
    let day_config = DayConfig::new(1, 480, 30);

    for strategy in ALL_STRATEGIES {
        let appointments =
            run_strategy(strategy, &meetings, &judges, &rooms, &day_config).unwrap();
        verify_schedule_invariants(&appointments, &meetings, &judges);

        // 共用法庭 → 时隙必然错开 (颜色 0 与 1),且同在第一天
        let mut slots: Vec<i32> = appointments.iter().map(|a| a.timeslot_start).collect();
        slots.sort();
        assert_eq!(slots, vec![0, 1], "策略 {} 时隙分布不符", strategy);
        assert!(appointments.iter().all(|a| a.day == 0));
    }
}

#[test]
fn test_capacity_limited_nine_meetings() {
    // 9 个会议, 3 位全技能法官, 3 个法庭: 任一时隙至多 3 场
    let meetings: Vec<Meeting> = (1..=9)
        .map(|id| create_test_meeting(id, Sagstype::ALL[(id as usize - 1) % 3], false))
        .collect();
    let judges: Vec<Judge> = (1..=3).map(create_full_skill_judge).collect();
    let rooms: Vec<Room> = (1..=3).map(create_test_room).collect();
    let day_config = DayConfig::new(5, 480, 30);

    for strategy in ALL_STRATEGIES {
        let appointments =
            run_strategy(strategy, &meetings, &judges, &rooms, &day_config).unwrap();
        assert_eq!(appointments.len(), 9, "策略 {} 预约数不符", strategy);
        verify_schedule_invariants(&appointments, &meetings, &judges);

        let mut per_slot = std::collections::HashMap::new();
        for appointment in &appointments {
            *per_slot.entry(appointment.timeslot_start).or_insert(0) += 1;
        }
        assert!(per_slot.values().all(|&n| n <= 3), "策略 {} 单时隙超载", strategy);
        // 着色数不超过会议数
        assert!(per_slot.len() <= 9);
    }
}

#[test]
fn test_virtual_meetings_use_virtual_rooms() {
    let meetings = vec![
        create_test_meeting(1, Sagstype::Civile, true),
        create_test_meeting(2, Sagstype::Civile, false),
    ];
    let judges = vec![
        Judge::new(1, vec![Sagstype::Civile], true),
        Judge::new(2, vec![Sagstype::Civile], false),
    ];
    let rooms = vec![Room::new(1, true), Room::new(2, false)];
    let day_config = DayConfig::new(1, 480, 30);

    for strategy in [AssignStrategy::Combined, AssignStrategy::Layered] {
        let appointments =
            run_strategy(strategy, &meetings, &judges, &rooms, &day_config).unwrap();
        assert_eq!(appointments.len(), 2);
        verify_virtual_mode_match(&appointments, &meetings, &rooms);
    }
}

// ==========================================
// 边界场景
// ==========================================

#[test]
fn test_zero_meetings_yield_empty_schedule() {
    let day_config = DayConfig::new(1, 480, 30);
    for strategy in ALL_STRATEGIES {
        let appointments = run_strategy(strategy, &[], &[], &[], &day_config).unwrap();
        assert!(appointments.is_empty(), "策略 {} 应返回空排期", strategy);
    }
}

#[test]
fn test_single_judge_covering_all_types() {
    let meetings = vec![
        create_test_meeting(1, Sagstype::Straffe, false),
        create_test_meeting(2, Sagstype::Civile, false),
        create_test_meeting(3, Sagstype::Tvang, false),
    ];
    let judges = vec![create_full_skill_judge(1)];
    let rooms: Vec<Room> = (1..=3).map(create_test_room).collect();
    let day_config = DayConfig::new(1, 480, 30);

    // 单法官串行审理: 每个会议独占一个时隙
    let appointments = run_strategy(
        AssignStrategy::Layered,
        &meetings,
        &judges,
        &rooms,
        &day_config,
    )
    .unwrap();
    assert_eq!(appointments.len(), 3);
    verify_schedule_invariants(&appointments, &meetings, &judges);
}

#[test]
fn test_single_room_forces_meeting_count_colors() {
    let meetings: Vec<Meeting> = (1..=5)
        .map(|id| create_test_meeting(id, Sagstype::Straffe, false))
        .collect();
    let judges: Vec<Judge> = (1..=5)
        .map(|id| Judge::new(id, vec![Sagstype::Straffe], false))
        .collect();
    let rooms = vec![create_test_room(1)];
    let day_config = DayConfig::new(1, 480, 30);

    let appointments = run_strategy(
        AssignStrategy::Layered,
        &meetings,
        &judges,
        &rooms,
        &day_config,
    )
    .unwrap();

    // 单法庭 → 冲突图为完全图 → 使用恰好 |会议数| 个时隙
    let slots: std::collections::HashSet<i32> =
        appointments.iter().map(|a| a.timeslot_start).collect();
    assert_eq!(slots.len(), 5);
    verify_schedule_invariants(&appointments, &meetings, &judges);
}

// ==========================================
// 不可行场景
// ==========================================

#[test]
fn test_skill_incompatibility_reports_zero_flow() {
    let meetings = vec![create_test_meeting(1, Sagstype::Tvang, false)];
    let judges = vec![Judge::new(1, vec![Sagstype::Straffe], false)];
    let rooms = vec![create_test_room(1)];
    let day_config = DayConfig::new(1, 480, 30);

    for strategy in ALL_STRATEGIES {
        let result = run_strategy(strategy, &meetings, &judges, &rooms, &day_config);
        match result {
            Err(ScheduleError::InfeasibleAssignment { required, achieved }) => {
                assert_eq!((required, achieved), (1, 0), "策略 {} 流量诊断不符", strategy);
            }
            other => panic!("策略 {} 期望 InfeasibleAssignment, 实际 {:?}", strategy, other.map(|_| ())),
        }
    }
}

#[test]
fn test_virtual_mismatch_is_infeasible_for_layered() {
    let meetings = vec![create_test_meeting(1, Sagstype::Straffe, true)];
    let judges = vec![Judge::new(1, vec![Sagstype::Straffe], false)];
    let rooms = vec![create_test_room(1)];
    let day_config = DayConfig::new(1, 480, 30);

    let result = run_strategy(
        AssignStrategy::Layered,
        &meetings,
        &judges,
        &rooms,
        &day_config,
    );
    assert!(matches!(
        result,
        Err(ScheduleError::InfeasibleAssignment { .. })
    ));
}

#[test]
fn test_invalid_granularity_rejected_before_solving() {
    let meetings = vec![create_test_meeting(1, Sagstype::Straffe, false)];
    let judges = vec![Judge::new(1, vec![Sagstype::Straffe], false)];
    let rooms = vec![create_test_room(1)];

    let result = run_strategy(
        AssignStrategy::Layered,
        &meetings,
        &judges,
        &rooms,
        &DayConfig::new(1, 480, 0),
    );
    assert!(matches!(result, Err(ScheduleError::InvalidInput(_))));
}
