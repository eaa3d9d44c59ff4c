// ==========================================
// 法院庭审排期系统 - 最大流求解引擎
// ==========================================
// 职责: Edmonds-Karp (BFS 最短增广路径的 Ford-Fulkerson)
// 红线: 只改写边流量,不改写容量与图结构
// 红线: 整数容量保证终止, O(VE²)
// ==========================================

use crate::engine::error::{ScheduleError, ScheduleResult};
use crate::engine::flow_graph::FlowGraph;
use std::collections::VecDeque;
use tracing::{debug, trace};

// ==========================================
// MaxFlowSolver - 最大流求解器
// ==========================================
pub struct MaxFlowSolver {
    // 无状态引擎,不需要注入依赖
}

impl MaxFlowSolver {
    pub fn new() -> Self {
        Self {}
    }

    /// 求解最大流
    ///
    /// # 规则
    /// - 反复 BFS 在残量图中寻找最短增广路径
    /// - 瓶颈 = 路径上残量的最小值 (正向边 capacity-flow, 反向边为配对边流量)
    /// - 沿路径推流,正反两侧通过 mate 同步更新
    /// - sink 不可达时终止
    ///
    /// # 返回
    /// 总流量
    pub fn solve(&self, graph: &mut FlowGraph) -> i32 {
        let mut total_flow = 0;
        let mut parent_edge: Vec<Option<usize>> = vec![None; graph.num_nodes()];

        while self.bfs(graph, &mut parent_edge) {
            // 回溯路径求瓶颈
            let mut bottleneck = i32::MAX;
            let mut node = graph.sink;
            while node != graph.source {
                let edge_idx = parent_edge[node].expect("BFS 可达节点必有父边");
                bottleneck = bottleneck.min(graph.residual_capacity(edge_idx));
                node = graph.edge_at(edge_idx).from;
            }

            // 沿路径推送瓶颈流量
            let mut node = graph.sink;
            while node != graph.source {
                let edge_idx = parent_edge[node].expect("BFS 可达节点必有父边");
                graph.push_flow(edge_idx, bottleneck);
                node = graph.edge_at(edge_idx).from;
            }

            total_flow += bottleneck;
            trace!(bottleneck, total_flow, "完成一次增广");
        }

        debug!(total_flow, "最大流求解完成");
        total_flow
    }

    /// 求解并校验流量饱和度
    ///
    /// # 参数
    /// - demand: 必须达到的流量 (通常为会议数)
    ///
    /// # 返回
    /// - Ok(总流量) 当流量 >= demand
    /// - Err(InfeasibleAssignment) 当流量不足,附带实际达到的流量
    pub fn saturate(&self, graph: &mut FlowGraph, demand: i32) -> ScheduleResult<i32> {
        let total_flow = self.solve(graph);
        if total_flow < demand {
            return Err(ScheduleError::InfeasibleAssignment {
                required: demand,
                achieved: total_flow,
            });
        }
        Ok(total_flow)
    }

    /// 残量图上的 BFS,记录每个节点的父边
    fn bfs(&self, graph: &FlowGraph, parent_edge: &mut [Option<usize>]) -> bool {
        parent_edge.iter_mut().for_each(|p| *p = None);
        let mut visited = vec![false; graph.num_nodes()];
        let mut queue = VecDeque::from([graph.source]);
        visited[graph.source] = true;

        while let Some(u) = queue.pop_front() {
            for &edge_idx in graph.outgoing(u) {
                let v = graph.edge_at(edge_idx).to;
                if visited[v] || graph.residual_capacity(edge_idx) <= 0 {
                    continue;
                }
                visited[v] = true;
                parent_edge[v] = Some(edge_idx);
                if v == graph.sink {
                    return true;
                }
                queue.push_back(v);
            }
        }

        false
    }
}

impl Default for MaxFlowSolver {
    fn default() -> Self {
        Self::new()
    }
}
