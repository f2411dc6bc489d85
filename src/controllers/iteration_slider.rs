//! Non-linear slider positions for the iteration cap.
//!
//! Positions 1-10 step by 1, 11-20 by 10, 21-30 by 100 and anything above
//! by 1000, each tier continuing from where the previous one ended.

/// Positions per tier.
pub const TIER_WIDTH: u32 = 10;

const TIERS: [(u32, u32); 3] = [(1, 0), (10, 10), (100, 110)];
const LAST_TIER_STEP: u32 = 1000;
const LAST_TIER_BASE: u32 = 1110;

/// Resolves a slider position to an iteration cap.
#[must_use]
pub fn slider_to_max_iterations(position: u32) -> u32 {
    for (tier, &(step, base)) in TIERS.iter().enumerate() {
        let tier_start = tier as u32 * TIER_WIDTH;

        if position <= tier_start + TIER_WIDTH {
            return base + position.saturating_sub(tier_start) * step;
        }
    }

    let offset = position - TIERS.len() as u32 * TIER_WIDTH;

    LAST_TIER_BASE.saturating_add(offset.saturating_mul(LAST_TIER_STEP))
}
