// ==========================================
// 法院庭审排期系统 - 指派提取引擎
// ==========================================
// 职责: 从饱和流量图回收 (会议, 法官, 法庭) 指派
// 红线: 只读流量图; 输出为独立值对象,不回引图
// 红线: 输出顺序不承诺,下游不得依赖
// ==========================================

use crate::domain::{Assignment, MeetingJudge};
use crate::engine::flow_graph::{FlowGraph, FlowNode};
use tracing::debug;

// ==========================================
// AssignmentExtractor - 指派提取器
// ==========================================
pub struct AssignmentExtractor {
    // 无状态引擎,不需要注入依赖
}

impl AssignmentExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// 从单次最大流图提取指派三元组
    ///
    /// # 规则
    /// - 遍历承载流量的 会议→法庭 边得到 (会议, 法庭)
    /// - 法官为流入该会议入口节点且承载流量的唯一前驱
    pub fn extract_combined(&self, graph: &FlowGraph) -> Vec<Assignment> {
        let mut assignments = Vec::new();

        for edge in graph.forward_edges().filter(|e| e.flow > 0) {
            let (meeting, room) = match (graph.node(edge.from), graph.node(edge.to)) {
                (FlowNode::Meeting { meeting, .. }, FlowNode::Room(room)) => (meeting, room),
                _ => continue,
            };

            let judge = graph
                .forward_edges()
                .filter(|e| e.flow > 0)
                .find_map(|e| match (graph.node(e.from), graph.node(e.to)) {
                    (FlowNode::Judge(judge), FlowNode::Meeting { meeting: m, .. })
                        if m.id == meeting.id =>
                    {
                        Some(judge)
                    }
                    _ => None,
                });

            if let Some(judge) = judge {
                assignments.push(Assignment::new(meeting.clone(), judge.clone(), room.clone()));
            }
        }

        debug!(count = assignments.len(), "单次最大流指派提取完成");
        assignments
    }

    /// 从第一阶段图提取 (会议, 法官) 配对
    pub fn extract_judge_pairs(&self, graph: &FlowGraph) -> Vec<MeetingJudge> {
        let pairs: Vec<MeetingJudge> = graph
            .forward_edges()
            .filter(|e| e.flow > 0)
            .filter_map(|e| match (graph.node(e.from), graph.node(e.to)) {
                (FlowNode::Judge(judge), FlowNode::Meeting { meeting, .. }) => {
                    Some(MeetingJudge::new(meeting.clone(), judge.clone()))
                }
                _ => None,
            })
            .collect();

        debug!(count = pairs.len(), "法官配对提取完成");
        pairs
    }

    /// 从第二阶段图提取指派三元组
    ///
    /// 配对节点自持有 (会议, 法官),按承载流量的 法庭→配对 边拼装
    pub fn extract_room_assignments(&self, graph: &FlowGraph) -> Vec<Assignment> {
        let assignments: Vec<Assignment> = graph
            .forward_edges()
            .filter(|e| e.flow > 0)
            .filter_map(|e| match (graph.node(e.from), graph.node(e.to)) {
                (FlowNode::Room(room), FlowNode::JudgeMeeting { judge, meeting }) => {
                    Some(Assignment::new(meeting.clone(), judge.clone(), room.clone()))
                }
                _ => None,
            })
            .collect();

        debug!(count = assignments.len(), "法庭指派提取完成");
        assignments
    }

    /// 从分层流量图提取指派三元组
    pub fn extract_layered(&self, graph: &FlowGraph) -> Vec<Assignment> {
        let assignments: Vec<Assignment> = graph
            .forward_edges()
            .filter(|e| e.flow > 0)
            .filter_map(|e| match (graph.node(e.from), graph.node(e.to)) {
                (FlowNode::Meeting { meeting, .. }, FlowNode::JudgeRoom { judge, room }) => {
                    Some(Assignment::new(meeting.clone(), judge.clone(), room.clone()))
                }
                _ => None,
            })
            .collect();

        debug!(count = assignments.len(), "分层指派提取完成");
        assignments
    }
}

impl Default for AssignmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
