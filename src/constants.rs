use crate::chains::Rule;

/// Most unplayed games the enumerator will expand (2^16 scenarios, each
/// holding a full standings table)
pub const MAX_UNPLAYED_GAMES: usize = 16;

/// Most unplayed games the condition analyzer will search over
pub const MAX_CONDITION_GAMES: usize = 14;

/// Largest number of game outcomes in a single condition
pub const MAX_CONDITION_DEPTH: usize = 6;

/// Number of finishing places that qualify (title game participants)
pub const QUALIFYING_PLACES: usize = 2;

/// Trace code recorded when a tie falls through to a random draw
pub const COIN_TOSS_CODE: &str = "R";

/// Rules of the default tie-break chain, in order
pub const DEFAULT_CHAIN: [Rule; 4] = [
    Rule::HeadToHead,
    Rule::CommonOpponents,
    Rule::NextHighestOpponents,
    Rule::OpponentStrength,
];
