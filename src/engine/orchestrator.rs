// ==========================================
// 法院庭审排期系统 - 引擎编排器
// ==========================================
// 用途: 协调指派、冲突图、着色、时隙排布的执行顺序
// ==========================================
// 管线 (直线状态机,失败即终止,不重试):
//   输入校验 → 流量图构建 → 流量饱和 → 指派提取
//   → 冲突图构建 → 着色 → 时隙排布
// ==========================================

use crate::config::{AssignStrategy, DayConfig, MatchingOptions};
use crate::domain::{Appointment, Assignment, Judge, Meeting, Room};
use crate::engine::capacity::JudgeCapacityEstimator;
use crate::engine::coloring::DsaturColorer;
use crate::engine::conflict::ConflictGraph;
use crate::engine::error::{ScheduleError, ScheduleResult};
use crate::engine::extract::AssignmentExtractor;
use crate::engine::flow_graph::FlowGraph;
use crate::engine::max_flow::MaxFlowSolver;
use crate::engine::slotting::SlotScheduler;
use tracing::{debug, info, instrument};

// ==========================================
// ScheduleOrchestrator - 引擎编排器
// ==========================================
pub struct ScheduleOrchestrator {
    options: MatchingOptions,
    estimator: JudgeCapacityEstimator,
    solver: MaxFlowSolver,
    extractor: AssignmentExtractor,
    colorer: DsaturColorer,
    slotter: SlotScheduler,
}

impl ScheduleOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - options: 指派策略与匹配选项
    pub fn new(options: MatchingOptions) -> Self {
        Self {
            options,
            estimator: JudgeCapacityEstimator::new(),
            solver: MaxFlowSolver::new(),
            extractor: AssignmentExtractor::new(),
            colorer: DsaturColorer::new(),
            slotter: SlotScheduler::new(),
        }
    }

    /// 执行完整排期流程
    ///
    /// # 参数
    /// - meetings: 会议列表
    /// - judges: 法官列表
    /// - rooms: 法庭列表
    /// - day_config: 工作日参数
    ///
    /// # 返回
    /// 预约列表; 任一阶段失败时原样返回该阶段错误
    #[instrument(skip_all, fields(
        strategy = %self.options.strategy,
        meetings_count = meetings.len(),
        judges_count = judges.len(),
        rooms_count = rooms.len()
    ))]
    pub fn run(
        &self,
        meetings: &[Meeting],
        judges: &[Judge],
        rooms: &[Room],
        day_config: &DayConfig,
    ) -> ScheduleResult<Vec<Appointment>> {
        info!("开始执行排期流程");

        // ==========================================
        // 步骤0: 输入校验
        // ==========================================
        day_config.validate()?;

        // 零会议直接短路为空排期,不算错误
        if meetings.is_empty() {
            info!("会议列表为空,返回空排期");
            return Ok(Vec::new());
        }

        self.validate_entities(meetings, judges, rooms)?;

        // ==========================================
        // 步骤1: 指派求解 (流量图构建 → 饱和 → 提取)
        // ==========================================
        debug!("步骤1: 执行指派求解");
        let assignments = self.assign(meetings, judges, rooms)?;
        info!(assignments_count = assignments.len(), "指派求解完成");

        // ==========================================
        // 步骤2: 冲突图构建
        // ==========================================
        debug!("步骤2: 构建冲突图");
        let mut conflict_graph = ConflictGraph::build(assignments);

        // ==========================================
        // 步骤3: DSATUR 着色
        // ==========================================
        debug!("步骤3: 执行 DSATUR 着色");
        let colors = self.colorer.color(&mut conflict_graph);
        info!(colors, "着色完成");

        // ==========================================
        // 步骤4: 时隙排布
        // ==========================================
        debug!("步骤4: 映射时隙与工作日");
        let appointments = self.slotter.schedule(&conflict_graph, day_config);

        info!(appointments_count = appointments.len(), "排期流程完成");
        Ok(appointments)
    }

    /// 按配置的策略求解指派
    fn assign(
        &self,
        meetings: &[Meeting],
        judges: &[Judge],
        rooms: &[Room],
    ) -> ScheduleResult<Vec<Assignment>> {
        let demand = meetings.len() as i32;

        match self.options.strategy {
            AssignStrategy::Combined => {
                let capacities = self.estimator.estimate_all(meetings, judges);
                let mut graph = FlowGraph::build_combined(
                    meetings,
                    judges,
                    rooms,
                    &capacities,
                    self.options.enforce_virtual_match,
                )?;
                self.solver.saturate(&mut graph, demand)?;
                Ok(self.extractor.extract_combined(&graph))
            }
            AssignStrategy::TwoStage => {
                // 第一阶段: 法官 ⇢ 会议
                let capacities = self.estimator.estimate_all(meetings, judges);
                let mut stage1 =
                    FlowGraph::build_judge_stage(meetings, judges, &capacities)?;
                self.solver.saturate(&mut stage1, demand)?;
                let pairs = self.extractor.extract_judge_pairs(&stage1);
                debug!(pairs_count = pairs.len(), "第一阶段配对完成");

                // 第二阶段: 法庭 ⇢ (会议, 法官) 配对
                let mut stage2 = FlowGraph::build_room_stage(
                    &pairs,
                    rooms,
                    self.options.enforce_virtual_match,
                )?;
                self.solver.saturate(&mut stage2, pairs.len() as i32)?;
                Ok(self.extractor.extract_room_assignments(&stage2))
            }
            AssignStrategy::Layered => {
                let mut graph = FlowGraph::build_layered(meetings, judges, rooms)?;
                self.solver.saturate(&mut graph, demand)?;
                Ok(self.extractor.extract_layered(&graph))
            }
        }
    }

    /// 实体校验: ID 非负、必需列表非空、法官技能非空
    fn validate_entities(
        &self,
        meetings: &[Meeting],
        judges: &[Judge],
        rooms: &[Room],
    ) -> ScheduleResult<()> {
        if judges.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "法官列表为空,无法为会议指派法官".to_string(),
            ));
        }
        if rooms.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "法庭列表为空,无法为会议指派法庭".to_string(),
            ));
        }

        if let Some(meeting) = meetings.iter().find(|m| m.id < 0) {
            return Err(ScheduleError::InvalidInput(format!(
                "会议 ID 不可为负: {}",
                meeting.id
            )));
        }
        if let Some(meeting) = meetings.iter().find(|m| m.duration_minutes <= 0) {
            return Err(ScheduleError::InvalidInput(format!(
                "会议 {} 的时长必须为正: {}",
                meeting.id, meeting.duration_minutes
            )));
        }
        if let Some(judge) = judges.iter().find(|j| j.id < 0) {
            return Err(ScheduleError::InvalidInput(format!(
                "法官 ID 不可为负: {}",
                judge.id
            )));
        }
        if let Some(judge) = judges.iter().find(|j| j.skills.is_empty()) {
            return Err(ScheduleError::InvalidInput(format!(
                "法官 {} 的技能集为空",
                judge.id
            )));
        }
        if let Some(room) = rooms.iter().find(|r| r.id < 0) {
            return Err(ScheduleError::InvalidInput(format!(
                "法庭 ID 不可为负: {}",
                room.id
            )));
        }

        Ok(())
    }
}
