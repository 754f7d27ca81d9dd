//! Deterministic pseudo-random stream driving every fuzzer decision.
//!
//! The generator is a plain 32-bit multiply-add step. It is bit-exact with
//! the stream used by the reference FSE fuzzers, so a seed and test number
//! printed by either tool select the same inputs.

/// Multiplier of the state transition.
pub const PRIME1: u32 = 2_654_435_761;

/// Increment of the state transition.
pub const PRIME2: u32 = 2_246_822_519;

/// Mixed into the global seed to derive a round-local seed.
pub const ROUND_SEED_MASK: u32 = 0xEDA5_B371;

/// Low bits dropped from the state when producing a value.
const OUTPUT_SHIFT: u32 = 11;

/// Advances `state` once and returns `(next_state, value)`.
pub const fn step(state: u32) -> (u32, u32) {
    let next = state.wrapping_mul(PRIME1).wrapping_add(PRIME2);
    (next, next >> OUTPUT_SHIFT)
}

/// Seeded generator with a replayable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzRng {
    state: u32,
}

impl FuzzRng {
    /// Creates a generator positioned at `seed`.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state; equal states produce equal streams.
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns the next 21-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let (state, value) = step(self.state);
        self.state = state;
        value
    }

    /// Advances the state `steps` times, discarding the values.
    ///
    /// Replaying the stream this way reaches the exact state an
    /// uninterrupted run has after the same number of draws.
    pub fn skip(&mut self, steps: u32) {
        for _ in 0..steps {
            self.next_u32();
        }
    }

    /// Derives the round-local generator from the current state.
    ///
    /// Does not advance `self`.
    pub const fn round_rng(&self) -> FuzzRng {
        FuzzRng::new(self.state ^ ROUND_SEED_MASK)
    }
}
