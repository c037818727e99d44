//! Chunk generation phases

use registry::ResourceKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phase of the chunk generation pipeline.
///
/// Variants are declared in pipeline order, so the derived ordering is the
/// order a chunk moves through them. A chunk never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkState {
    /// Placeholder without content. Also used as a dummy chunk during generation.
    #[default]
    Empty,
    /// Biomes are being assigned
    Biomes,
    /// Block states and structure locations are being set
    Noise,
    /// The base terrain layer is being generated. No entities or block entities yet.
    Surface,
    /// Caves and canyons are being carved out
    Carvers,
    /// Underwater caves and ravines are being carved out
    LiquidCarvers,
    /// Decoration such as leaves and tall grass
    Features,
    /// Structures for this chunk are being picked and primed
    StructureStarts,
    /// Final validity checks on primed structures
    StructureReferences,
    /// Height maps are being calculated
    Heightmaps,
    /// Entity spawning. Needs populated neighbours and lighting.
    Spawn,
    /// Lighting relative to the containing world
    Light,
    /// Live chunk owned by a world. Only world chunks may be in this state.
    Full,
}

impl ChunkState {
    /// Every state, in pipeline order
    pub const ALL: [ChunkState; 13] = [
        Self::Empty,
        Self::Biomes,
        Self::Noise,
        Self::Surface,
        Self::Carvers,
        Self::LiquidCarvers,
        Self::Features,
        Self::StructureStarts,
        Self::StructureReferences,
        Self::Heightmaps,
        Self::Spawn,
        Self::Light,
        Self::Full,
    ];

    /// Registry key of this state
    pub const fn key(self) -> ResourceKey {
        ResourceKey::minecraft(self.name())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Biomes => "biomes",
            Self::Noise => "noise",
            Self::Surface => "surface",
            Self::Carvers => "carvers",
            Self::LiquidCarvers => "liquid_carvers",
            Self::Features => "features",
            Self::StructureStarts => "structure_starts",
            Self::StructureReferences => "structure_references",
            Self::Heightmaps => "heightmaps",
            Self::Spawn => "spawn",
            Self::Light => "light",
            Self::Full => "full",
        }
    }

    pub fn from_key(key: &ResourceKey) -> Option<Self> {
        if key.namespace() != registry::MINECRAFT_NAMESPACE {
            return None;
        }
        Self::ALL.into_iter().find(|state| state.name() == key.value())
    }

    /// Position in the pipeline. `Empty` is 0.
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.ordinal() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.ordinal().checked_sub(1).map(|i| Self::ALL[i])
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Whether the chunk is live and mutable by general game logic
    #[inline]
    pub fn is_full(self) -> bool {
        self == Self::Full
    }

    /// Whether the chunk is still owned by generation code
    #[inline]
    pub fn is_generating(self) -> bool {
        !self.is_empty() && !self.is_full()
    }

    #[inline]
    pub fn is_at_least(self, other: ChunkState) -> bool {
        self >= other
    }

    /// Whether a chunk with or without generated content may be in this state.
    ///
    /// Only `Empty` describes a chunk without content, and a chunk with
    /// content is never `Empty`.
    #[inline]
    pub fn is_valid_for(self, has_content: bool) -> bool {
        self.is_empty() != has_content
    }

    /// Whether a chunk in this state may move to `target`
    #[inline]
    pub fn can_advance_to(self, target: ChunkState) -> bool {
        target >= self
    }
}

impl std::fmt::Display for ChunkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "minecraft:{}", self.name())
    }
}

/// Errors raised when moving a chunk between states
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkStateError {
    #[error("Chunk cannot regress from {from} to {to}")]
    Regression { from: ChunkState, to: ChunkState },

    #[error("Chunk is already {0} and cannot advance further")]
    Complete(ChunkState),
}

/// Generation progress of a single chunk.
///
/// Starts at [`ChunkState::Empty`] and only ever moves forward. Skipping
/// phases is allowed, a chunk read back from storage jumps straight to
/// [`ChunkState::Full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChunkProgress {
    state: ChunkState,
}

impl ChunkProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChunkState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state.is_full()
    }

    /// Move to `target`, returning the previous state.
    pub fn advance_to(&mut self, target: ChunkState) -> Result<ChunkState, ChunkStateError> {
        if !self.state.can_advance_to(target) {
            return Err(ChunkStateError::Regression {
                from: self.state,
                to: target,
            });
        }

        let previous = std::mem::replace(&mut self.state, target);
        if previous != target {
            tracing::trace!("Chunk advanced from {} to {}", previous, target);
        }

        Ok(previous)
    }

    /// Move to the next phase, returning the new state.
    pub fn advance(&mut self) -> Result<ChunkState, ChunkStateError> {
        let next = self.state.next().ok_or(ChunkStateError::Complete(self.state))?;
        self.advance_to(next)?;
        Ok(next)
    }
}
