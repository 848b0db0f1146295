//! The blocking HTTP client for the tournament service.

pub mod api;
pub mod history;
pub mod query;
pub mod transport;

pub use api::{AuthSession, TournamentApi};
pub use history::{ChartHistory, ChartRef, ScoreSummary, SongRef, StepchartInfo};
pub use query::PlayerFilter;
pub use transport::{Transport, UreqTransport};
