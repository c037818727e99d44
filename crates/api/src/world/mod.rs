//! World-level API: chunk generation phases and game rules

pub mod chunk;
pub mod chunk_states;
pub mod gamerule;

pub use chunk::{ChunkProgress, ChunkState, ChunkStateError};
pub use gamerule::{game_rules, GameRule, GameRuleError, GameRuleStore, GameRuleType, GameRuleValue, RuleValue};
