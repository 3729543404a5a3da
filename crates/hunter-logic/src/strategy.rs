//! Hunter definitions, classifier metadata and execution

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::constant::{alternator_hunter, cooperator_hunter, defector_hunter};
use crate::cycle::{cycle_hunter, eventual_cycle_hunter};
use crate::error::HunterError;
use crate::history::{History, MatchView};
use crate::stats::{math_constant_hunter, random_hunter};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn as_char(self) -> char {
        match self {
            Move::Cooperate => 'C',
            Move::Defect => 'D',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Move {
    type Error = HunterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' => Ok(Move::Cooperate),
            'D' | 'd' => Ok(Move::Defect),
            other => Err(HunterError::InvalidMove(other)),
        }
    }
}

/// Hunter type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HunterKind {
    /// Defect once the opponent has only ever defected.
    DefectorHunter,
    /// Defect once the opponent has only ever cooperated.
    CooperatorHunter,
    /// Defect against strict alternation.
    AlternatorHunter,
    /// Defect against any cycle of period two or more.
    CycleHunter,
    /// Defect against a cycle in the recent window.
    EventualCycleHunter,
    /// Defect against a stationary cooperation rate.
    MathConstantHunter,
    /// Defect against memoryless responses.
    RandomHunter,
}

impl HunterKind {
    pub const ALL: [HunterKind; 7] = [
        HunterKind::DefectorHunter,
        HunterKind::CooperatorHunter,
        HunterKind::AlternatorHunter,
        HunterKind::CycleHunter,
        HunterKind::EventualCycleHunter,
        HunterKind::MathConstantHunter,
        HunterKind::RandomHunter,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            HunterKind::DefectorHunter => "DefectorHunter",
            HunterKind::CooperatorHunter => "CooperatorHunter",
            HunterKind::AlternatorHunter => "AlternatorHunter",
            HunterKind::CycleHunter => "CycleHunter",
            HunterKind::EventualCycleHunter => "EventualCycleHunter",
            HunterKind::MathConstantHunter => "MathConstantHunter",
            HunterKind::RandomHunter => "RandomHunter",
        }
    }

    /// Human-readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            HunterKind::DefectorHunter => "Defector Hunter",
            HunterKind::CooperatorHunter => "Cooperator Hunter",
            HunterKind::AlternatorHunter => "Alternator Hunter",
            HunterKind::CycleHunter => "Cycle Hunter",
            HunterKind::EventualCycleHunter => "Eventual Cycle Hunter",
            HunterKind::MathConstantHunter => "Math Constant Hunter",
            HunterKind::RandomHunter => "Random Hunter",
        }
    }

    pub fn classifier(self) -> Classifier {
        // Every hunter reads the whole history and nothing else.
        Classifier::default()
    }

    pub fn decide_fn(self) -> DecideFn {
        match self {
            HunterKind::DefectorHunter => defector_hunter,
            HunterKind::CooperatorHunter => cooperator_hunter,
            HunterKind::AlternatorHunter => alternator_hunter,
            HunterKind::CycleHunter => cycle_hunter,
            HunterKind::EventualCycleHunter => eventual_cycle_hunter,
            HunterKind::MathConstantHunter => math_constant_hunter,
            HunterKind::RandomHunter => random_hunter,
        }
    }
}

impl fmt::Display for HunterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HunterKind {
    type Err = HunterError;

    /// Accepts either the identifier (`CycleHunter`) or the display name
    /// (`Cycle Hunter`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        HunterKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s || kind.name() == s)
            .ok_or_else(|| HunterError::UnknownHunter(s.to_string()))
    }
}

/// How far back a strategy looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryDepth {
    Finite(u32),
    Unbounded,
}

/// Static capability descriptor attached to each registered hunter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    pub memory_depth: MemoryDepth,
    pub stochastic: bool,
    pub inspects_source: bool,
    pub manipulates_source: bool,
    pub manipulates_state: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            memory_depth: MemoryDepth::Unbounded,
            stochastic: false,
            inspects_source: false,
            manipulates_source: false,
            manipulates_state: false,
        }
    }
}

/// Signature shared by every detector.
pub type DecideFn = fn(&MatchView<'_>, &DetectorConfig) -> Move;

/// One registry row: a hunter's decision function and its metadata.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub kind: HunterKind,
    pub name: &'static str,
    pub classifier: Classifier,
    pub decide: DecideFn,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

/// All known hunters in declaration order.
pub fn registry() -> Vec<RegistryEntry> {
    HunterKind::ALL
        .into_iter()
        .map(|kind| RegistryEntry {
            kind,
            name: kind.name(),
            classifier: kind.classifier(),
            decide: kind.decide_fn(),
        })
        .collect()
}

/// Complete hunter with its tunables
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    pub kind: HunterKind,
    pub config: DetectorConfig,
}

impl Hunter {
    /// Create a new hunter with standard thresholds
    pub fn new(kind: HunterKind) -> Self {
        Self {
            kind,
            config: DetectorConfig::standard(),
        }
    }

    /// Create with custom thresholds
    pub fn with_config(kind: HunterKind, config: DetectorConfig) -> Result<Self, HunterError> {
        config.validate()?;
        Ok(Self { kind, config })
    }

    pub fn decide(&self, view: &MatchView<'_>) -> Move {
        (self.kind.decide_fn())(view, &self.config)
    }
}

/// Execute a hunter for one round
///
/// # Arguments
/// * `kind` - The hunter to execute
/// * `own` - Our past moves
/// * `opponent` - Opponent's past moves
/// * `config` - Detector thresholds
pub fn execute_hunter(
    kind: HunterKind,
    own: &History,
    opponent: &History,
    config: &DetectorConfig,
) -> Move {
    let view = MatchView::new(own, opponent);
    (kind.decide_fn())(&view, config)
}

/// Get a human-readable description of a hunter
pub fn describe_hunter(kind: HunterKind) -> &'static str {
    match kind {
        HunterKind::DefectorHunter => "Defects once the opponent has defected every round (after 4 rounds).",
        HunterKind::CooperatorHunter => "Defects once the opponent has cooperated every round (after 4 rounds).",
        HunterKind::AlternatorHunter => "Defects against an opponent that strictly alternates (after 6 rounds).",
        HunterKind::CycleHunter => "Defects when the opponent's whole history repeats a block of two or more moves.",
        HunterKind::EventualCycleHunter => "Defects when the opponent's last 15 moves settle into a cycle.",
        HunterKind::MathConstantHunter => "Defects when the cooperation rate stays flat across the match.",
        HunterKind::RandomHunter => "Defects when the opponent's responses look like coin flips.",
    }
}
