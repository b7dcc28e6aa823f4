//! Default configuration values loaded from config.defaults.toml.
//!
//! The TOML file is embedded at compile time so every binary and test sees
//! the same numbers without touching the filesystem.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    arena: ArenaDefaults,
    adversarial: AdversarialDefaults,
    beam: BeamDefaults,
    chokudai: ChokudaiDefaults,
    annealing: AnnealingDefaults,
    montecarlo: MonteCarloDefaults,
    mcts: TreeSearchDefaults,
    thunder: ThunderDefaults,
    duct: TreeSearchDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
}

#[derive(Debug, Deserialize)]
struct AdversarialDefaults {
    depth: u32,
    time_threshold_ms: u64,
}

#[derive(Debug, Deserialize)]
struct BeamDefaults {
    width: usize,
    depth: u32,
    time_threshold_ms: u64,
}

#[derive(Debug, Deserialize)]
struct ChokudaiDefaults {
    width: usize,
    depth: u32,
    beam_number: u32,
    time_threshold_ms: u64,
}

#[derive(Debug, Deserialize)]
struct AnnealingDefaults {
    iterations: u32,
    start_temp: f64,
    end_temp: f64,
    time_threshold_ms: u64,
}

#[derive(Debug, Deserialize)]
struct MonteCarloDefaults {
    playouts: u32,
}

/// Shared shape of the `[mcts]` and `[duct]` sections.
#[derive(Debug, Deserialize)]
struct TreeSearchDefaults {
    playouts: u32,
    c: f64,
    expand_threshold: u32,
    time_threshold_ms: u64,
}

#[derive(Debug, Deserialize)]
struct ThunderDefaults {
    playouts: u32,
    time_threshold_ms: u64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> u64 {
    DEFAULTS.common.seed
}

// Arena
pub fn arena_games() -> u32 {
    DEFAULTS.arena.games
}

// Adversarial
pub fn adversarial_depth() -> u32 {
    DEFAULTS.adversarial.depth
}
pub fn adversarial_time_threshold_ms() -> u64 {
    DEFAULTS.adversarial.time_threshold_ms
}

// Beam
pub fn beam_width() -> usize {
    DEFAULTS.beam.width
}
pub fn beam_depth() -> u32 {
    DEFAULTS.beam.depth
}
pub fn beam_time_threshold_ms() -> u64 {
    DEFAULTS.beam.time_threshold_ms
}

// Chokudai
pub fn chokudai_width() -> usize {
    DEFAULTS.chokudai.width
}
pub fn chokudai_depth() -> u32 {
    DEFAULTS.chokudai.depth
}
pub fn chokudai_beam_number() -> u32 {
    DEFAULTS.chokudai.beam_number
}
pub fn chokudai_time_threshold_ms() -> u64 {
    DEFAULTS.chokudai.time_threshold_ms
}

// Annealing
pub fn annealing_iterations() -> u32 {
    DEFAULTS.annealing.iterations
}
pub fn annealing_start_temp() -> f64 {
    DEFAULTS.annealing.start_temp
}
pub fn annealing_end_temp() -> f64 {
    DEFAULTS.annealing.end_temp
}
pub fn annealing_time_threshold_ms() -> u64 {
    DEFAULTS.annealing.time_threshold_ms
}

// Monte Carlo
pub fn montecarlo_playouts() -> u32 {
    DEFAULTS.montecarlo.playouts
}

// MCTS
pub fn mcts_playouts() -> u32 {
    DEFAULTS.mcts.playouts
}
pub fn mcts_c() -> f64 {
    DEFAULTS.mcts.c
}
pub fn mcts_expand_threshold() -> u32 {
    DEFAULTS.mcts.expand_threshold
}
pub fn mcts_time_threshold_ms() -> u64 {
    DEFAULTS.mcts.time_threshold_ms
}

// Thunder
pub fn thunder_playouts() -> u32 {
    DEFAULTS.thunder.playouts
}
pub fn thunder_time_threshold_ms() -> u64 {
    DEFAULTS.thunder.time_threshold_ms
}

// DUCT
pub fn duct_playouts() -> u32 {
    DEFAULTS.duct.playouts
}
pub fn duct_c() -> f64 {
    DEFAULTS.duct.c
}
pub fn duct_expand_threshold() -> u32 {
    DEFAULTS.duct.expand_threshold
}
pub fn duct_time_threshold_ms() -> u64 {
    DEFAULTS.duct.time_threshold_ms
}
