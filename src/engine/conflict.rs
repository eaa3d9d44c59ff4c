// ==========================================
// 法院庭审排期系统 - 冲突图构建
// ==========================================
// 职责: 指派三元组上的无向冲突图 (共用法官或法庭即冲突)
// 红线: 稠密邻接矩阵 (图规模小,简化着色);
//       禁止自环,重复加边幂等
// ==========================================

use crate::domain::Assignment;
use tracing::debug;

// ==========================================
// ConflictGraph - 冲突无向图
// ==========================================
// 顶点顺序与输入指派顺序一致; 颜色 -1 表示未着色
pub struct ConflictGraph {
    vertices: Vec<Assignment>,
    adj_matrix: Vec<Vec<bool>>,
    colors: Vec<i32>,
}

impl ConflictGraph {
    /// 从指派三元组构建冲突图
    ///
    /// # 规则
    /// - 顶点 i 与 j (i≠j) 之间存在边,当且仅当共用法官ID或法庭ID
    pub fn build(assignments: Vec<Assignment>) -> Self {
        let n = assignments.len();
        let mut graph = Self {
            vertices: assignments,
            adj_matrix: vec![vec![false; n]; n],
            colors: vec![-1; n],
        };

        for i in 0..n {
            for j in (i + 1)..n {
                if graph.vertices[i].conflicts_with(&graph.vertices[j]) {
                    graph.add_edge(i, j);
                }
            }
        }

        debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "冲突图构建完成"
        );
        graph
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        let mut count = 0;
        for i in 0..self.num_vertices() {
            for j in (i + 1)..self.num_vertices() {
                if self.adj_matrix[i][j] {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn vertex(&self, i: usize) -> &Assignment {
        &self.vertices[i]
    }

    pub fn vertices(&self) -> &[Assignment] {
        &self.vertices
    }

    /// 添加无向边 (幂等)
    ///
    /// # 规则
    /// - 禁止自环
    pub fn add_edge(&mut self, i: usize, j: usize) {
        assert!(i != j, "冲突图禁止自环");
        self.adj_matrix[i][j] = true;
        self.adj_matrix[j][i] = true;
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adj_matrix[i][j]
    }

    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj_matrix[i]
            .iter()
            .enumerate()
            .filter(|(_, &connected)| connected)
            .map(|(j, _)| j)
    }

    pub fn degree(&self, i: usize) -> usize {
        self.adj_matrix[i].iter().filter(|&&c| c).count()
    }

    // ==========================================
    // 颜色访问
    // ==========================================

    pub fn color(&self, i: usize) -> i32 {
        self.colors[i]
    }

    pub fn set_color(&mut self, i: usize, color: i32) {
        self.colors[i] = color;
    }

    /// 全部顶点重置为未着色
    pub fn reset_colors(&mut self) {
        self.colors.iter_mut().for_each(|c| *c = -1);
    }

    /// 校验着色合法性: 每条边两端颜色不同且均已着色
    pub fn is_properly_colored(&self) -> bool {
        for i in 0..self.num_vertices() {
            if self.colors[i] < 0 {
                return false;
            }
            for j in (i + 1)..self.num_vertices() {
                if self.adj_matrix[i][j] && self.colors[i] == self.colors[j] {
                    return false;
                }
            }
        }
        true
    }
}
