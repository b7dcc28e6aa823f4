//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_arena_games() -> u32 {
    defaults::arena_games()
}
fn d_adversarial_depth() -> u32 {
    defaults::adversarial_depth()
}
fn d_adversarial_time() -> u64 {
    defaults::adversarial_time_threshold_ms()
}
fn d_beam_width() -> usize {
    defaults::beam_width()
}
fn d_beam_depth() -> u32 {
    defaults::beam_depth()
}
fn d_beam_time() -> u64 {
    defaults::beam_time_threshold_ms()
}
fn d_chokudai_width() -> usize {
    defaults::chokudai_width()
}
fn d_chokudai_depth() -> u32 {
    defaults::chokudai_depth()
}
fn d_chokudai_beam_number() -> u32 {
    defaults::chokudai_beam_number()
}
fn d_chokudai_time() -> u64 {
    defaults::chokudai_time_threshold_ms()
}
fn d_annealing_iterations() -> u32 {
    defaults::annealing_iterations()
}
fn d_start_temp() -> f64 {
    defaults::annealing_start_temp()
}
fn d_end_temp() -> f64 {
    defaults::annealing_end_temp()
}
fn d_annealing_time() -> u64 {
    defaults::annealing_time_threshold_ms()
}
fn d_montecarlo_playouts() -> u32 {
    defaults::montecarlo_playouts()
}
fn d_mcts_playouts() -> u32 {
    defaults::mcts_playouts()
}
fn d_mcts_c() -> f64 {
    defaults::mcts_c()
}
fn d_mcts_expand_threshold() -> u32 {
    defaults::mcts_expand_threshold()
}
fn d_mcts_time() -> u64 {
    defaults::mcts_time_threshold_ms()
}
fn d_thunder_playouts() -> u32 {
    defaults::thunder_playouts()
}
fn d_thunder_time() -> u64 {
    defaults::thunder_time_threshold_ms()
}
fn d_duct_playouts() -> u32 {
    defaults::duct_playouts()
}
fn d_duct_c() -> f64 {
    defaults::duct_c()
}
fn d_duct_expand_threshold() -> u32 {
    defaults::duct_expand_threshold()
}
fn d_duct_time() -> u64 {
    defaults::duct_time_threshold_ms()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub adversarial: AdversarialConfig,
    #[serde(default)]
    pub beam: BeamConfig,
    #[serde(default)]
    pub chokudai: ChokudaiConfig,
    #[serde(default)]
    pub annealing: AnnealingConfig,
    #[serde(default)]
    pub montecarlo: MonteCarloConfig,
    #[serde(default)]
    pub mcts: MctsSection,
    #[serde(default)]
    pub thunder: ThunderConfig,
    #[serde(default)]
    pub duct: DuctSection,
}

/// Settings shared by every engine
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Seed for every `ChaCha20Rng` the arena hands out
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Match runner settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_arena_games")]
    pub games: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::arena_games(),
        }
    }
}

/// Minimax, alpha-beta and iterative deepening
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AdversarialConfig {
    #[serde(default = "d_adversarial_depth")]
    pub depth: u32,
    #[serde(default = "d_adversarial_time")]
    pub time_threshold_ms: u64,
}

impl Default for AdversarialConfig {
    fn default() -> Self {
        Self {
            depth: defaults::adversarial_depth(),
            time_threshold_ms: defaults::adversarial_time_threshold_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BeamConfig {
    #[serde(default = "d_beam_width")]
    pub width: usize,
    #[serde(default = "d_beam_depth")]
    pub depth: u32,
    #[serde(default = "d_beam_time")]
    pub time_threshold_ms: u64,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            width: defaults::beam_width(),
            depth: defaults::beam_depth(),
            time_threshold_ms: defaults::beam_time_threshold_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChokudaiConfig {
    #[serde(default = "d_chokudai_width")]
    pub width: usize,
    #[serde(default = "d_chokudai_depth")]
    pub depth: u32,
    /// Number of sweeps when running without a deadline
    #[serde(default = "d_chokudai_beam_number")]
    pub beam_number: u32,
    #[serde(default = "d_chokudai_time")]
    pub time_threshold_ms: u64,
}

impl Default for ChokudaiConfig {
    fn default() -> Self {
        Self {
            width: defaults::chokudai_width(),
            depth: defaults::chokudai_depth(),
            beam_number: defaults::chokudai_beam_number(),
            time_threshold_ms: defaults::chokudai_time_threshold_ms(),
        }
    }
}

/// Hill climbing and simulated annealing
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnnealingConfig {
    #[serde(default = "d_annealing_iterations")]
    pub iterations: u32,
    #[serde(default = "d_start_temp")]
    pub start_temp: f64,
    #[serde(default = "d_end_temp")]
    pub end_temp: f64,
    #[serde(default = "d_annealing_time")]
    pub time_threshold_ms: u64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::annealing_iterations(),
            start_temp: defaults::annealing_start_temp(),
            end_temp: defaults::annealing_end_temp(),
            time_threshold_ms: defaults::annealing_time_threshold_ms(),
        }
    }
}

/// Primitive Monte Carlo
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MonteCarloConfig {
    #[serde(default = "d_montecarlo_playouts")]
    pub playouts: u32,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            playouts: defaults::montecarlo_playouts(),
        }
    }
}

/// MCTS (Monte Carlo Tree Search) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsSection {
    #[serde(default = "d_mcts_playouts")]
    pub playouts: u32,
    /// UCB1 exploration constant
    #[serde(default = "d_mcts_c")]
    pub c: f64,
    /// Visits a leaf needs before it is expanded
    #[serde(default = "d_mcts_expand_threshold")]
    pub expand_threshold: u32,
    #[serde(default = "d_mcts_time")]
    pub time_threshold_ms: u64,
}

impl Default for MctsSection {
    fn default() -> Self {
        Self {
            playouts: defaults::mcts_playouts(),
            c: defaults::mcts_c(),
            expand_threshold: defaults::mcts_expand_threshold(),
            time_threshold_ms: defaults::mcts_time_threshold_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThunderConfig {
    #[serde(default = "d_thunder_playouts")]
    pub playouts: u32,
    #[serde(default = "d_thunder_time")]
    pub time_threshold_ms: u64,
}

impl Default for ThunderConfig {
    fn default() -> Self {
        Self {
            playouts: defaults::thunder_playouts(),
            time_threshold_ms: defaults::thunder_time_threshold_ms(),
        }
    }
}

/// Decoupled UCT for simultaneous-move games
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DuctSection {
    #[serde(default = "d_duct_playouts")]
    pub playouts: u32,
    #[serde(default = "d_duct_c")]
    pub c: f64,
    #[serde(default = "d_duct_expand_threshold")]
    pub expand_threshold: u32,
    #[serde(default = "d_duct_time")]
    pub time_threshold_ms: u64,
}

impl Default for DuctSection {
    fn default() -> Self {
        Self {
            playouts: defaults::duct_playouts(),
            c: defaults::duct_c(),
            expand_threshold: defaults::duct_expand_threshold(),
            time_threshold_ms: defaults::duct_time_threshold_ms(),
        }
    }
}
