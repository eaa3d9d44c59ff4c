// ==========================================
// 法院庭审排期系统 - DSATUR 着色引擎
// ==========================================
// 职责: 饱和度优先的贪心图着色 (Brélaz DSATUR)
// 红线: 产出合法着色即可,不承诺色数最优
// ==========================================

use crate::engine::conflict::ConflictGraph;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// DsaturColorer - DSATUR 着色器
// ==========================================
pub struct DsaturColorer {
    // 无状态引擎,不需要注入依赖
}

impl DsaturColorer {
    pub fn new() -> Self {
        Self {}
    }

    /// 对冲突图执行 DSATUR 着色
    ///
    /// # 规则
    /// - 全部顶点初始化为未着色 (-1)
    /// - 每轮选取: 饱和度最大 → 度最大 → 顶点下标最小
    /// - 赋予邻域未用的最小非负颜色
    ///
    /// # 返回
    /// 使用的颜色数 (所有颜色落在 [0, 返回值))
    pub fn color(&self, graph: &mut ConflictGraph) -> i32 {
        graph.reset_colors();

        let mut used_colors = 0;
        for _ in 0..graph.num_vertices() {
            let Some(vertex) = self.next_vertex(graph) else {
                break; // 全部顶点已着色
            };
            let color = self.lowest_available_color(graph, vertex);
            graph.set_color(vertex, color);
            used_colors = used_colors.max(color + 1);
        }

        debug!(
            vertices = graph.num_vertices(),
            colors = used_colors,
            "DSATUR 着色完成"
        );
        used_colors
    }

    /// 顶点饱和度: 已着色邻居的不同颜色数
    fn saturation_degree(&self, graph: &ConflictGraph, vertex: usize) -> usize {
        let neighbor_colors: HashSet<i32> = graph
            .neighbors(vertex)
            .map(|n| graph.color(n))
            .filter(|&c| c >= 0)
            .collect();
        neighbor_colors.len()
    }

    /// 选取下一个待着色顶点
    fn next_vertex(&self, graph: &ConflictGraph) -> Option<usize> {
        let mut selected: Option<(usize, usize, usize)> = None; // (顶点, 饱和度, 度)

        for vertex in 0..graph.num_vertices() {
            if graph.color(vertex) >= 0 {
                continue; // 跳过已着色顶点
            }
            let saturation = self.saturation_degree(graph, vertex);
            let degree = graph.degree(vertex);

            let better = match selected {
                None => true,
                Some((_, best_saturation, best_degree)) => {
                    saturation > best_saturation
                        || (saturation == best_saturation && degree > best_degree)
                }
            };
            // 饱和度与度均打平时保留下标较小者 (顺序遍历天然成立)
            if better {
                selected = Some((vertex, saturation, degree));
            }
        }

        selected.map(|(vertex, _, _)| vertex)
    }

    /// 邻域未使用的最小非负颜色
    fn lowest_available_color(&self, graph: &ConflictGraph, vertex: usize) -> i32 {
        let mut color_used = vec![false; graph.num_vertices()];
        for neighbor in graph.neighbors(vertex) {
            let color = graph.color(neighbor);
            if color >= 0 {
                color_used[color as usize] = true;
            }
        }

        color_used
            .iter()
            .position(|&used| !used)
            .map(|c| c as i32)
            .unwrap_or(graph.num_vertices() as i32)
    }
}

impl Default for DsaturColorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Sagstype;
    use crate::domain::{Assignment, Judge, Meeting, Room};

    fn assignment(meeting_id: i32, judge_id: i32, room_id: i32) -> Assignment {
        Assignment::new(
            Meeting::new(meeting_id, 30, Sagstype::Straffe, false),
            Judge::new(judge_id, vec![Sagstype::Straffe], false),
            Room::new(room_id, false),
        )
    }

    #[test]
    fn test_coloring_is_proper() {
        // 三个指派共用一个法庭 → 完全图 → 3 色
        let mut graph = ConflictGraph::build(vec![
            assignment(1, 1, 1),
            assignment(2, 2, 1),
            assignment(3, 3, 1),
        ]);
        let colors = DsaturColorer::new().color(&mut graph);

        assert_eq!(colors, 3);
        assert!(graph.is_properly_colored());
    }

    #[test]
    fn test_independent_vertices_share_lowest_color() {
        let mut graph = ConflictGraph::build(vec![
            assignment(1, 1, 1),
            assignment(2, 2, 2),
            assignment(3, 3, 3),
        ]);
        let colors = DsaturColorer::new().color(&mut graph);

        assert_eq!(colors, 1);
        for i in 0..graph.num_vertices() {
            assert_eq!(graph.color(i), 0);
        }
    }

    #[test]
    fn test_path_graph_uses_two_colors() {
        // 指派链: 0-1 共法官, 1-2 共法庭, 0-2 无冲突 → 2 色
        let mut graph = ConflictGraph::build(vec![
            assignment(1, 1, 1),
            assignment(2, 1, 2),
            assignment(3, 3, 2),
        ]);
        let colors = DsaturColorer::new().color(&mut graph);

        assert_eq!(colors, 2);
        assert!(graph.is_properly_colored());
    }

    #[test]
    fn test_recolor_remains_proper() {
        let mut graph = ConflictGraph::build(vec![
            assignment(1, 1, 1),
            assignment(2, 1, 2),
            assignment(3, 3, 2),
        ]);
        let colorer = DsaturColorer::new();
        colorer.color(&mut graph);
        // 重复着色不要求颜色逐一相同,但必须仍然合法
        colorer.color(&mut graph);
        assert!(graph.is_properly_colored());
    }

    #[test]
    fn test_empty_graph_uses_zero_colors() {
        let mut graph = ConflictGraph::build(Vec::new());
        assert_eq!(DsaturColorer::new().color(&mut graph), 0);
    }
}
