use strum_macros::{AsRefStr, Display};

/// Vessel resources the launch program reads, named as the server spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Resource {
    LiquidFuel,
    SolidFuel,
}
