//! Core building blocks: random sources, dice, players, configuration.

pub mod rng;
pub mod die;
pub mod player;
pub mod config;

pub use rng::{share, GameRng, RandomSource, ScriptedSource, SharedSource};
pub use die::{Die, DEFAULT_DRAW_RANGE};
pub use player::{Player, PlayerId, PlayerMap};
pub use config::{GameConfig, KNOCK_OUT_RANGE, WIN_THRESHOLD};
