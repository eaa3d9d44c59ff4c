// ==========================================
// 法院庭审排期系统 - 测试数据生成器
// ==========================================
// 职责: 生成排期请求测试数据 (截断正态分布时长)
// 红线: 仅用于测试与演示; 随机性不进入核心管线
// ==========================================

pub mod truncated_normal;

use crate::domain::types::Sagstype;
use crate::importer::{JudgeRecord, MeetingRecord, RoomRecord, ScheduleRequest};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use truncated_normal::TruncatedNormal;

/// 会议时长分布: 均值 30 分钟,标准差 80,截断于 [5, 360]
const DURATION_MEAN: f64 = 30.0;
const DURATION_STDDEV: f64 = 80.0;
const DURATION_MIN: f64 = 5.0;
const DURATION_MAX: f64 = 360.0;

/// 线上庭审的生成概率 (四分之一)
const VIRTUAL_PROBABILITY: f64 = 0.25;

// ==========================================
// TestDataGenerator - 测试数据生成器
// ==========================================
// 使用可复现的种子随机源 (ChaCha8)
pub struct TestDataGenerator {
    rng: ChaCha8Rng,
    duration_dist: TruncatedNormal,
}

impl TestDataGenerator {
    /// 创建带种子的生成器 (同种子产出相同数据)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            duration_dist: TruncatedNormal::new(
                DURATION_MEAN,
                DURATION_STDDEV,
                DURATION_MIN,
                DURATION_MAX,
            ),
        }
    }

    /// 生成完整的排期请求
    ///
    /// # 参数
    /// - fixed: true 时生成确定性数据 (时长=粒度,全技能法官,全线下),
    ///          false 时生成随机数据 (截断正态时长,随机技能与模式)
    pub fn generate_request(
        &mut self,
        n_meetings: i32,
        n_judges: i32,
        n_rooms: i32,
        work_days: i32,
        granularity: i32,
        min_per_day: i32,
        fixed: bool,
    ) -> ScheduleRequest {
        let meetings = if fixed {
            self.generate_fixed_meetings(n_meetings, granularity)
        } else {
            self.generate_random_meetings(n_meetings)
        };
        let judges = self.generate_judges(n_judges, fixed);
        let court_rooms = self.generate_rooms(n_rooms, fixed);

        ScheduleRequest {
            meetings,
            judges,
            court_rooms,
            work_days,
            min_per_work_day: min_per_day,
            granularity,
        }
    }

    /// 抽取一个截断正态时长,取整到最近的 5 分钟
    pub fn generate_duration(&mut self) -> i32 {
        let raw = self.duration_dist.sample(&mut self.rng);
        ((raw / 5.0).round() * 5.0) as i32
    }

    fn generate_fixed_meetings(&mut self, n: i32, duration: i32) -> Vec<MeetingRecord> {
        (1..=n)
            .map(|id| MeetingRecord {
                id,
                duration,
                // 案件类型轮转覆盖全集
                sagstype: Sagstype::ALL[(id as usize - 1) % Sagstype::ALL.len()],
                is_virtual: false,
            })
            .collect()
    }

    fn generate_random_meetings(&mut self, n: i32) -> Vec<MeetingRecord> {
        (1..=n)
            .map(|id| MeetingRecord {
                id,
                duration: self.generate_duration(),
                sagstype: self.random_sagstype(),
                is_virtual: self.rng.random_bool(VIRTUAL_PROBABILITY),
            })
            .collect()
    }

    fn generate_judges(&mut self, n: i32, fixed: bool) -> Vec<JudgeRecord> {
        (1..=n)
            .map(|id| JudgeRecord {
                id,
                skills: if fixed {
                    Sagstype::ALL.to_vec()
                } else {
                    self.random_skills()
                },
                is_virtual: !fixed && self.rng.random_bool(VIRTUAL_PROBABILITY),
            })
            .collect()
    }

    fn generate_rooms(&mut self, n: i32, fixed: bool) -> Vec<RoomRecord> {
        (1..=n)
            .map(|id| RoomRecord {
                id,
                is_virtual: !fixed && self.rng.random_bool(VIRTUAL_PROBABILITY),
            })
            .collect()
    }

    fn random_sagstype(&mut self) -> Sagstype {
        Sagstype::ALL[self.rng.random_range(0..Sagstype::ALL.len())]
    }

    /// 随机非空技能子集
    fn random_skills(&mut self) -> Vec<Sagstype> {
        let mut skills: Vec<Sagstype> = Sagstype::ALL
            .into_iter()
            .filter(|_| self.rng.random_bool(0.5))
            .collect();
        if skills.is_empty() {
            skills.push(self.random_sagstype());
        }
        skills
    }
}
