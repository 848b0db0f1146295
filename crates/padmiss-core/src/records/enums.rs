use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Play style a chart was played in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum PlayMode {
    #[default]
    Single,
    Double,
    Versus,
}

impl PlayMode {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Pads in use for this mode.
    pub fn pad_count(&self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double | Self::Versus => 2,
        }
    }
}
