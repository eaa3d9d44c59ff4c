// ==========================================
// 法院庭审排期系统 - 法官领域模型
// ==========================================

use crate::domain::types::Sagstype;
use serde::{Deserialize, Serialize};

// ==========================================
// Judge - 法官
// ==========================================
// 红线: skills 非空 (每位法官至少掌握一种案件类型)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    pub id: i32,               // 法官ID (稳定整数)
    pub skills: Vec<Sagstype>, // 可审理的案件类型集合
    pub is_virtual: bool,      // 是否可主持线上庭审
}

impl Judge {
    pub fn new(id: i32, skills: Vec<Sagstype>, is_virtual: bool) -> Self {
        Self {
            id,
            skills,
            is_virtual,
        }
    }

    /// 判断法官是否具备指定案件类型的审理资格
    pub fn has_skill(&self, sagstype: Sagstype) -> bool {
        self.skills.contains(&sagstype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_skill() {
        let judge = Judge::new(1, vec![Sagstype::Straffe, Sagstype::Civile], false);
        assert!(judge.has_skill(Sagstype::Straffe));
        assert!(judge.has_skill(Sagstype::Civile));
        assert!(!judge.has_skill(Sagstype::Tvang));
    }
}
