//! # padmiss-core
//!
//! Client library for the Padmiss tournament service, used by arcade
//! cabinet software to register cabs, look up players and submit play
//! results.
//!
//! This crate provides:
//! - Schema-validated record types (players, scores, songs, chart uploads)
//! - Hydration of raw query documents into records
//! - Flattening of nested records into flat submission payloads
//! - The blocking HTTP client for the service endpoints

pub mod config;
pub mod error;
pub mod network;
pub mod records;

pub use config::{Config, WebserverConfig};
pub use error::{Error, Result};
pub use network::{
    AuthSession, ChartHistory, ChartRef, PlayerFilter, ScoreSummary, SongRef, StepchartInfo,
    TournamentApi, Transport, UreqTransport,
};
pub use records::{
    ChartUpload, FieldSpec, InputEvent, NoteScore, PlayMode, Player, Record, Score,
    ScoreBreakdown, Song, SpeedMod, TimingWindows,
};
