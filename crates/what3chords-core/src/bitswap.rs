//! Validity-guarded bit swaps.
//!
//! A [`BitSwapSpec`] is an ordered list of position pairs. Walking the list
//! is a small state machine over immutable [`PayloadBits`]: each step
//! proposes the payload with one pair exchanged and moves to it only if the
//! proposal is still a valid cell, otherwise it stays put. The inverse walks
//! the same list backwards.
//!
//! Each step is an involution whose guard is checked on the state it would
//! move to, so the reverse walk re-tests exactly the states the forward
//! walk left behind. Consequently `inverse(forward(x)) == x` for every
//! valid `x`. For invalid inputs it can fail: a swap that repairs an invalid
//! payload is taken going forward, and going back the guard refuses to
//! return to the invalid state.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{H3_RESOLUTION, PAYLOAD_BITS};
use crate::payload::PayloadBits;
use crate::{Error, Result};

/// Two payload bit positions to exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct SwapPair {
    a: usize,
    b: usize,
}

impl SwapPair {
    pub fn new(a: usize, b: usize) -> Result<Self> {
        if a >= PAYLOAD_BITS || b >= PAYLOAD_BITS {
            return Err(Error::InvalidConfig(format!(
                "swap ({a}, {b}) outside the {PAYLOAD_BITS}-bit payload"
            )));
        }
        Ok(Self { a, b })
    }

    pub fn positions(self) -> (usize, usize) {
        (self.a, self.b)
    }
}

impl TryFrom<[usize; 2]> for SwapPair {
    type Error = Error;

    fn try_from([a, b]: [usize; 2]) -> Result<Self> {
        Self::new(a, b)
    }
}

impl From<SwapPair> for [usize; 2] {
    fn from(pair: SwapPair) -> Self {
        [pair.a, pair.b]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    Applied,
    /// The exchanged payload would not be a valid cell.
    Skipped,
}

/// One transition of the swap state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapStep {
    pub pair: SwapPair,
    pub before: PayloadBits,
    pub after: PayloadBits,
    pub outcome: SwapOutcome,
}

/// Pure transition: propose the swap, keep it only if the result is valid.
pub fn transition(state: PayloadBits, pair: SwapPair) -> SwapStep {
    let candidate = state.swapped_at(pair.a, pair.b);
    let (after, outcome) = if candidate.is_valid() {
        (candidate, SwapOutcome::Applied)
    } else {
        (state, SwapOutcome::Skipped)
    };

    SwapStep {
        pair,
        before: state,
        after,
        outcome,
    }
}

/// Every step of one walk through a [`BitSwapSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapTrace {
    pub direction: Direction,
    pub input: PayloadBits,
    pub steps: Vec<SwapStep>,
}

impl SwapTrace {
    pub fn output(&self) -> PayloadBits {
        self.steps.last().map_or(self.input, |step| step.after)
    }

    pub fn applied(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome == SwapOutcome::Applied)
            .count()
    }
}

/// Ordered swap pairs; see the module docs for the walk semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitSwapSpec {
    pairs: Vec<SwapPair>,
}

impl Default for BitSwapSpec {
    fn default() -> Self {
        Self::standard()
    }
}

impl BitSwapSpec {
    pub fn new(pairs: Vec<SwapPair>) -> Self {
        Self { pairs }
    }

    /// No swaps: forward and inverse are the identity.
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// `[(6, 3R - 1), (12, 3R - 2)]`: the low region bit traded with a
    /// fine digit bit, then a coarse digit bit with another fine one.
    pub fn standard() -> Self {
        let r = H3_RESOLUTION as usize;
        Self {
            pairs: vec![
                SwapPair { a: 6, b: 3 * r - 1 },
                SwapPair { a: 12, b: 3 * r - 2 },
            ],
        }
    }

    pub fn pairs(&self) -> &[SwapPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn forward(&self, payload: PayloadBits) -> PayloadBits {
        self.pairs
            .iter()
            .fold(payload, |state, &pair| step(state, pair))
    }

    pub fn inverse(&self, payload: PayloadBits) -> PayloadBits {
        self.pairs
            .iter()
            .rev()
            .fold(payload, |state, &pair| step(state, pair))
    }

    pub fn apply(&self, payload: PayloadBits, direction: Direction) -> PayloadBits {
        match direction {
            Direction::Forward => self.forward(payload),
            Direction::Inverse => self.inverse(payload),
        }
    }

    /// Same walk as [`apply`](Self::apply), recording every transition.
    pub fn trace(&self, payload: PayloadBits, direction: Direction) -> SwapTrace {
        let order: Box<dyn Iterator<Item = &SwapPair>> = match direction {
            Direction::Forward => Box::new(self.pairs.iter()),
            Direction::Inverse => Box::new(self.pairs.iter().rev()),
        };

        let mut state = payload;
        let mut steps = Vec::with_capacity(self.pairs.len());
        for &pair in order {
            let next = transition(state, pair);
            state = next.after;
            steps.push(next);
        }

        SwapTrace {
            direction,
            input: payload,
            steps,
        }
    }
}

fn step(state: PayloadBits, pair: SwapPair) -> PayloadBits {
    let next = transition(state, pair);
    if next.outcome == SwapOutcome::Skipped {
        trace!(a = pair.a, b = pair.b, payload = %state, "swap skipped, candidate invalid");
    }
    next.after
}
