// ==========================================
// 法院庭审排期系统 - 截断正态分布
// ==========================================
// 职责: 逆变换采样的区间截断正态分布
// ==========================================

use rand::Rng;

// ==========================================
// TruncatedNormal - 截断正态分布
// ==========================================
// 采样方法: u ~ U[Φ(α), Φ(β)], x = μ + σ·√2·erfinv(2u-1)
pub struct TruncatedNormal {
    mu: f64,    // 均值
    sigma: f64, // 标准差
    lo: f64,    // 下界
    hi: f64,    // 上界
}

impl TruncatedNormal {
    pub fn new(mu: f64, sigma: f64, lo: f64, hi: f64) -> Self {
        debug_assert!(lo < hi, "截断区间必须非空");
        debug_assert!(sigma > 0.0, "标准差必须为正");
        Self { mu, sigma, lo, hi }
    }

    /// 逆变换采样
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let alpha = standard_normal_cdf((self.lo - self.mu) / self.sigma);
        let beta = standard_normal_cdf((self.hi - self.mu) / self.sigma);

        let u: f64 = rng.random::<f64>() * (beta - alpha) + alpha;

        let x = self.mu + self.sigma * std::f64::consts::SQRT_2 * erfinv(2.0 * u - 1.0);
        // 逆误差函数的近似误差可能溢出边界,夹回区间
        x.clamp(self.lo, self.hi)
    }
}

/// 标准正态分布 CDF: Φ(x) = (1 + erf(x/√2)) / 2
fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// 误差函数 (Abramowitz & Stegun 7.1.26 近似,|误差| < 1.5e-7)
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// 逆误差函数 (Winitzki 近似)
fn erfinv(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };

    let ln_term = (1.0 - x * x).ln();
    let a = 0.147;
    let tt1 = 2.0 / (std::f64::consts::PI * a) + 0.5 * ln_term;
    let tt2 = ln_term / a;

    sign * (-tt1 + (tt1 * tt1 - tt2).sqrt()).sqrt()
}
