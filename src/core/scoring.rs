pub const MAX_LEVEL_SCORE: u32 = 100;
pub const MIN_LEVEL_SCORE: u32 = 10;

/// Score for a completed level: `max(10, 100 - seconds - 2 * moves)`.
pub fn score(seconds: u32, moves: u32) -> u32 {
    let penalty = u64::from(seconds) + 2 * u64::from(moves);
    let raw = u64::from(MAX_LEVEL_SCORE).saturating_sub(penalty) as u32;
    raw.max(MIN_LEVEL_SCORE)
}
