// ==========================================
// 法院庭审排期系统 - 匹配策略配置
// ==========================================
// 职责: 指派策略选择与可配置匹配开关
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// AssignStrategy - 指派策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignStrategy {
    Combined, // 单次最大流: source→法官→会议→法庭→sink
    TwoStage, // 两阶段: 先配法官,再配法庭
    Layered,  // 分层: source→会议→(法官,法庭)对→法官汇聚→sink
}

impl fmt::Display for AssignStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignStrategy::Combined => write!(f, "combined"),
            AssignStrategy::TwoStage => write!(f, "two-stage"),
            AssignStrategy::Layered => write!(f, "layered"),
        }
    }
}

impl FromStr for AssignStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "combined" => Ok(AssignStrategy::Combined),
            "two-stage" | "two_stage" | "twostage" => Ok(AssignStrategy::TwoStage),
            "layered" => Ok(AssignStrategy::Layered),
            other => Err(format!("未知的指派策略: {}", other)),
        }
    }
}

// ==========================================
// MatchingOptions - 匹配选项
// ==========================================
// 说明: Layered 策略始终强制线上/线下模式匹配;
//       Combined 与 TwoStage 的模式匹配由 enforce_virtual_match 控制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingOptions {
    pub strategy: AssignStrategy,    // 指派策略
    pub enforce_virtual_match: bool, // 会议与法庭的线上/线下模式是否必须一致
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            strategy: AssignStrategy::Layered,
            enforce_virtual_match: true,
        }
    }
}

impl MatchingOptions {
    pub fn with_strategy(strategy: AssignStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("combined".parse::<AssignStrategy>().unwrap(), AssignStrategy::Combined);
        assert_eq!("two-stage".parse::<AssignStrategy>().unwrap(), AssignStrategy::TwoStage);
        assert_eq!("Layered".parse::<AssignStrategy>().unwrap(), AssignStrategy::Layered);
        assert!("greedy".parse::<AssignStrategy>().is_err());
    }

    #[test]
    fn test_default_options() {
        let options = MatchingOptions::default();
        assert_eq!(options.strategy, AssignStrategy::Layered);
        assert!(options.enforce_virtual_match);
    }
}
