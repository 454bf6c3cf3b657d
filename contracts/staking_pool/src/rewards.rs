//! Pure reward-accrual arithmetic.
//!
//! Everything here is integer math: `i128` for amounts, floor on the
//! basis-point divide, so accrued rewards are never over-credited and two
//! computations over the same interval always agree.

use common::math;

/// Reward units accrued over `elapsed` seconds at `rate_per_second`
/// (reward units per staked token per second, pre-multiplier), scaled by
/// the tier multiplier. `None` on i128 overflow.
pub fn accrued(rate_per_second: i128, elapsed: u64, multiplier_bps: u32) -> Option<i128> {
    let base = rate_per_second.checked_mul(elapsed as i128)?;
    math::mul_bps(base, multiplier_bps)
}
