// ==========================================
// 法院庭审排期系统 - 流量图构建
// ==========================================
// 职责: 分层容量有向图的构建 (三种指派策略)
// 红线: 边集为追加式 arena,邻接表只存边索引;
//       反向残量边在构图时显式成对创建
// 红线: 构图后容量不可变,只有求解器改写流量
// ==========================================

use crate::domain::{Judge, Meeting, MeetingJudge, Room};
use crate::engine::error::{ScheduleError, ScheduleResult};
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// FlowNode - 流量图节点 (带标签的变体)
// ==========================================
#[derive(Debug, Clone)]
pub enum FlowNode {
    Source,
    Sink,
    Judge(Judge),
    Room(Room),
    Meeting { meeting: Meeting, capacity: i32 },
    JudgeRoom { judge: Judge, room: Room },
    JudgeMeeting { judge: Judge, meeting: Meeting },
}

// ==========================================
// FlowEdge - 流量图边
// ==========================================
// 每条正向边在构图时配对一条反向残量边, mate 互指
#[derive(Debug, Clone)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub capacity: i32,
    pub flow: i32,
    mate: usize,       // 配对边索引 (正向↔反向)
    is_residual: bool, // 是否为反向残量边
}

impl FlowEdge {
    pub fn is_residual(&self) -> bool {
        self.is_residual
    }

    /// 正向边是否已饱和承载流量
    pub fn is_saturated(&self) -> bool {
        !self.is_residual && self.flow > 0 && self.flow == self.capacity
    }
}

// ==========================================
// FlowGraph - 分层容量有向图
// ==========================================
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<usize>>, // 每节点出边索引 (含反向边)
    edge_index: HashMap<(usize, usize), usize>, // (from,to) → 正向边索引
    pub source: usize,
    pub sink: usize,
    pub num_meetings: usize,
    pub num_judges: usize,
    pub num_rooms: usize,
    pub num_pairs: usize,
}

impl FlowGraph {
    fn with_nodes(node_hint: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_hint),
            edges: Vec::new(),
            adjacency: Vec::new(),
            edge_index: HashMap::new(),
            source: 0,
            sink: 0,
            num_meetings: 0,
            num_judges: 0,
            num_rooms: 0,
            num_pairs: 0,
        }
    }

    fn add_node(&mut self, node: FlowNode) -> usize {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    /// 添加正向边并配对创建反向残量边
    ///
    /// # 规则
    /// - 正向边初始流量 0; 反向边容量恒为 0,其残量 = 正向边流量
    fn add_edge(&mut self, from: usize, to: usize, capacity: i32) {
        debug_assert!(from < self.nodes.len() && to < self.nodes.len(), "节点索引越界");
        debug_assert!(capacity >= 0, "容量不可为负");

        let forward = self.edges.len();
        let backward = forward + 1;
        self.edges.push(FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
            mate: backward,
            is_residual: false,
        });
        self.edges.push(FlowEdge {
            from: to,
            to: from,
            capacity: 0,
            flow: 0,
            mate: forward,
            is_residual: true,
        });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);
        self.edge_index.insert((from, to), forward);
    }

    // ==========================================
    // 访问接口
    // ==========================================

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: usize) -> &FlowNode {
        &self.nodes[id]
    }

    /// O(1) 查找正向边
    pub fn edge(&self, from: usize, to: usize) -> Option<&FlowEdge> {
        self.edge_index.get(&(from, to)).map(|&idx| &self.edges[idx])
    }

    /// 所有正向边 (跳过反向残量边)
    pub fn forward_edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter().filter(|e| !e.is_residual)
    }

    pub(crate) fn outgoing(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub(crate) fn edge_at(&self, idx: usize) -> &FlowEdge {
        &self.edges[idx]
    }

    /// 边的残量容量
    ///
    /// # 规则
    /// - 正向边: capacity - flow
    /// - 反向边: 配对正向边的当前流量 (可回退的流量)
    pub(crate) fn residual_capacity(&self, idx: usize) -> i32 {
        let edge = &self.edges[idx];
        if edge.is_residual {
            self.edges[edge.mate].flow
        } else {
            edge.capacity - edge.flow
        }
    }

    /// 沿边推送流量 (正反两侧通过 mate 原子更新)
    pub(crate) fn push_flow(&mut self, idx: usize, delta: i32) {
        let (target, signed) = {
            let edge = &self.edges[idx];
            if edge.is_residual {
                (edge.mate, -delta)
            } else {
                (idx, delta)
            }
        };
        self.edges[target].flow += signed;
        debug_assert!(
            self.edges[target].flow >= 0 && self.edges[target].flow <= self.edges[target].capacity,
            "流量越界: 0 <= flow <= capacity 被破坏"
        );
    }

    /// 校验流量不变式: 边流量界 + 内部节点流量守恒
    pub fn verify_flow_invariants(&self) -> bool {
        for edge in self.forward_edges() {
            if edge.flow < 0 || edge.flow > edge.capacity {
                return false;
            }
        }
        for node in 0..self.nodes.len() {
            if node == self.source || node == self.sink {
                continue;
            }
            let outgoing: i32 = self
                .forward_edges()
                .filter(|e| e.from == node)
                .map(|e| e.flow)
                .sum();
            let incoming: i32 = self
                .forward_edges()
                .filter(|e| e.to == node)
                .map(|e| e.flow)
                .sum();
            if outgoing != incoming {
                return false;
            }
        }
        true
    }

    // ==========================================
    // 构建入口 - 三种指派策略
    // ==========================================

    /// 单次最大流策略 (Combined)
    ///
    /// 分层: [source, 法官, 会议(入口/出口拆点), 法庭, sink]
    ///
    /// # 规则
    /// - source→法官: 容量 = 技能稀缺度加权容量 (由调用方传入)
    /// - 法官→会议入口: 容量 1,仅当法官具备案件类型资格
    /// - 会议入口→会议出口: 容量 1 (节点容量拆点门)
    /// - 会议出口→法庭: 容量 1; enforce_virtual_match 开启时要求模式一致
    /// - 法庭→sink: 容量 ⌈会议数/法庭数⌉ + 1 (整数取整余量)
    pub fn build_combined(
        meetings: &[Meeting],
        judges: &[Judge],
        rooms: &[Room],
        judge_capacities: &[i32],
        enforce_virtual_match: bool,
    ) -> ScheduleResult<FlowGraph> {
        guard_entity_count("meetings", meetings.len())?;
        guard_entity_count("judges", judges.len())?;
        guard_entity_count("rooms", rooms.len())?;
        if rooms.is_empty() {
            return Err(ScheduleError::InconsistentConfig(
                "法庭数为零,无法计算法庭承载容量".to_string(),
            ));
        }

        let mut graph = FlowGraph::with_nodes(2 + judges.len() + 2 * meetings.len() + rooms.len());
        graph.num_meetings = meetings.len();
        graph.num_judges = judges.len();
        graph.num_rooms = rooms.len();

        let source = graph.add_node(FlowNode::Source);
        let judge_ids: Vec<usize> = judges
            .iter()
            .map(|j| graph.add_node(FlowNode::Judge(j.clone())))
            .collect();
        // 会议拆点: 入口节点承接法官边,出口节点连向法庭;
        // 两点之间的单位容量门即节点容量
        let meeting_in_ids: Vec<usize> = meetings
            .iter()
            .map(|m| {
                graph.add_node(FlowNode::Meeting {
                    meeting: m.clone(),
                    capacity: 1,
                })
            })
            .collect();
        let meeting_out_ids: Vec<usize> = meetings
            .iter()
            .map(|m| {
                graph.add_node(FlowNode::Meeting {
                    meeting: m.clone(),
                    capacity: 1,
                })
            })
            .collect();
        let room_ids: Vec<usize> = rooms
            .iter()
            .map(|r| graph.add_node(FlowNode::Room(r.clone())))
            .collect();
        let sink = graph.add_node(FlowNode::Sink);
        graph.source = source;
        graph.sink = sink;

        for j in 0..judges.len() {
            graph.add_edge(source, judge_ids[j], judge_capacities[j]);
        }

        for (j, judge) in judges.iter().enumerate() {
            for (i, meeting) in meetings.iter().enumerate() {
                if judge.has_skill(meeting.sagstype) {
                    graph.add_edge(judge_ids[j], meeting_in_ids[i], 1);
                }
            }
        }

        for i in 0..meetings.len() {
            graph.add_edge(meeting_in_ids[i], meeting_out_ids[i], 1);
        }

        for (i, meeting) in meetings.iter().enumerate() {
            for (r, room) in rooms.iter().enumerate() {
                if !enforce_virtual_match || room.is_virtual == meeting.is_virtual {
                    graph.add_edge(meeting_out_ids[i], room_ids[r], 1);
                }
            }
        }

        // +1 余量吸收会议数不能被法庭数整除时的取整误差
        let room_capacity = div_ceil(meetings.len(), rooms.len()) + 1;
        for &room_node in &room_ids {
            graph.add_edge(room_node, sink, room_capacity as i32);
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.edges.len() / 2,
            "单次最大流图构建完成"
        );
        Ok(graph)
    }

    /// 两阶段策略第一阶段 (法官⇢会议)
    ///
    /// 分层: [source, 法官, 会议, sink]
    ///
    /// # 规则
    /// - source→法官: 容量 = 技能稀缺度加权容量
    /// - 法官→会议: 容量 1,仅当技能匹配
    /// - 会议→sink: 容量 1
    pub fn build_judge_stage(
        meetings: &[Meeting],
        judges: &[Judge],
        judge_capacities: &[i32],
    ) -> ScheduleResult<FlowGraph> {
        guard_entity_count("meetings", meetings.len())?;
        guard_entity_count("judges", judges.len())?;

        let mut graph = FlowGraph::with_nodes(2 + judges.len() + meetings.len());
        graph.num_meetings = meetings.len();
        graph.num_judges = judges.len();

        let source = graph.add_node(FlowNode::Source);
        let judge_ids: Vec<usize> = judges
            .iter()
            .map(|j| graph.add_node(FlowNode::Judge(j.clone())))
            .collect();
        let meeting_ids: Vec<usize> = meetings
            .iter()
            .map(|m| {
                graph.add_node(FlowNode::Meeting {
                    meeting: m.clone(),
                    capacity: 1,
                })
            })
            .collect();
        let sink = graph.add_node(FlowNode::Sink);
        graph.source = source;
        graph.sink = sink;

        for j in 0..judges.len() {
            graph.add_edge(source, judge_ids[j], judge_capacities[j]);
        }

        for (j, judge) in judges.iter().enumerate() {
            for (i, meeting) in meetings.iter().enumerate() {
                if judge.has_skill(meeting.sagstype) {
                    graph.add_edge(judge_ids[j], meeting_ids[i], 1);
                }
            }
        }

        for &meeting_node in &meeting_ids {
            graph.add_edge(meeting_node, sink, 1);
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.edges.len() / 2,
            "法官指派图构建完成"
        );
        Ok(graph)
    }

    /// 两阶段策略第二阶段 (法庭⇢会议-法官配对)
    ///
    /// 分层: [source, 法庭, 配对, sink]
    ///
    /// # 规则
    /// - source→法庭: 容量 ⌈配对数/法庭数⌉
    /// - 法庭→配对: 容量 1; enforce_virtual_match 开启时要求模式一致
    /// - 配对→sink: 容量 1
    pub fn build_room_stage(
        pairs: &[MeetingJudge],
        rooms: &[Room],
        enforce_virtual_match: bool,
    ) -> ScheduleResult<FlowGraph> {
        guard_entity_count("pairs", pairs.len())?;
        guard_entity_count("rooms", rooms.len())?;
        if rooms.is_empty() {
            return Err(ScheduleError::InconsistentConfig(
                "法庭数为零,无法计算法庭承载容量".to_string(),
            ));
        }

        let mut graph = FlowGraph::with_nodes(2 + rooms.len() + pairs.len());
        graph.num_meetings = pairs.len();
        graph.num_rooms = rooms.len();
        graph.num_pairs = pairs.len();

        let source = graph.add_node(FlowNode::Source);
        let room_ids: Vec<usize> = rooms
            .iter()
            .map(|r| graph.add_node(FlowNode::Room(r.clone())))
            .collect();
        let pair_ids: Vec<usize> = pairs
            .iter()
            .map(|p| {
                graph.add_node(FlowNode::JudgeMeeting {
                    judge: p.judge.clone(),
                    meeting: p.meeting.clone(),
                })
            })
            .collect();
        let sink = graph.add_node(FlowNode::Sink);
        graph.source = source;
        graph.sink = sink;

        let room_capacity = div_ceil(pairs.len(), rooms.len());
        for &room_node in &room_ids {
            graph.add_edge(source, room_node, room_capacity as i32);
        }

        for (r, room) in rooms.iter().enumerate() {
            for (p, pair) in pairs.iter().enumerate() {
                if !enforce_virtual_match || room.is_virtual == pair.meeting.is_virtual {
                    graph.add_edge(room_ids[r], pair_ids[p], 1);
                }
            }
        }

        for &pair_node in &pair_ids {
            graph.add_edge(pair_node, sink, 1);
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.edges.len() / 2,
            "法庭指派图构建完成"
        );
        Ok(graph)
    }

    /// 分层策略 (Layered)
    ///
    /// 分层: [source, 会议, (法官,法庭)配对, 法官汇聚, sink]
    ///
    /// # 规则
    /// - (法官,法庭)配对节点仅在两者模式一致时存在
    /// - source→会议: 容量 1
    /// - 会议→配对: 容量 1,要求技能匹配且法庭模式与会议一致
    /// - 配对→法官汇聚: 容量 1
    /// - 法官汇聚→sink: 容量 ⌊会议数/法官数⌋
    pub fn build_layered(
        meetings: &[Meeting],
        judges: &[Judge],
        rooms: &[Room],
    ) -> ScheduleResult<FlowGraph> {
        guard_entity_count("meetings", meetings.len())?;
        guard_entity_count("judges", judges.len())?;
        guard_entity_count("rooms", rooms.len())?;
        if judges.is_empty() {
            return Err(ScheduleError::InconsistentConfig(
                "法官数为零,无法计算法官汇聚容量".to_string(),
            ));
        }

        let mut graph = FlowGraph::with_nodes(
            2 + meetings.len() + judges.len() * rooms.len() + judges.len(),
        );
        graph.num_meetings = meetings.len();
        graph.num_judges = judges.len();
        graph.num_rooms = rooms.len();

        let source = graph.add_node(FlowNode::Source);
        let meeting_ids: Vec<usize> = meetings
            .iter()
            .map(|m| {
                graph.add_node(FlowNode::Meeting {
                    meeting: m.clone(),
                    capacity: 1,
                })
            })
            .collect();

        // 配对节点过滤: 法官与法庭模式一致才可同场
        let mut pair_ids: Vec<(usize, usize, usize)> = Vec::new(); // (节点, 法官下标, 法庭下标)
        for (j, judge) in judges.iter().enumerate() {
            for (r, room) in rooms.iter().enumerate() {
                if judge.is_virtual == room.is_virtual {
                    let node = graph.add_node(FlowNode::JudgeRoom {
                        judge: judge.clone(),
                        room: room.clone(),
                    });
                    pair_ids.push((node, j, r));
                }
            }
        }
        graph.num_pairs = pair_ids.len();

        // 法官汇聚节点限制单个法官的总承载
        let aggregate_ids: Vec<usize> = judges
            .iter()
            .map(|j| graph.add_node(FlowNode::Judge(j.clone())))
            .collect();
        let sink = graph.add_node(FlowNode::Sink);
        graph.source = source;
        graph.sink = sink;

        for &meeting_node in &meeting_ids {
            graph.add_edge(source, meeting_node, 1);
        }

        for (i, meeting) in meetings.iter().enumerate() {
            for &(pair_node, j, r) in &pair_ids {
                let skill_ok = judges[j].has_skill(meeting.sagstype);
                let mode_ok = rooms[r].is_virtual == meeting.is_virtual;
                if skill_ok && mode_ok {
                    graph.add_edge(meeting_ids[i], pair_node, 1);
                }
            }
        }

        for &(pair_node, j, _) in &pair_ids {
            graph.add_edge(pair_node, aggregate_ids[j], 1);
        }

        let aggregate_capacity = (meetings.len() / judges.len()) as i32;
        for &aggregate_node in &aggregate_ids {
            graph.add_edge(aggregate_node, sink, aggregate_capacity);
        }

        debug!(
            nodes = graph.num_nodes(),
            edges = graph.edges.len() / 2,
            pairs = graph.num_pairs,
            "分层流量图构建完成"
        );
        Ok(graph)
    }
}

/// 实体数量上限守卫 (2^31)
fn guard_entity_count(entity: &'static str, count: usize) -> ScheduleResult<()> {
    if count > i32::MAX as usize {
        return Err(ScheduleError::TooManyEntities { entity, count });
    }
    Ok(())
}

/// 整数向上取整除法
fn div_ceil(numerator: usize, denominator: usize) -> usize {
    (numerator + denominator - 1) / denominator
}
