/// How sprite coordinates that fall off the edge of the display are brought back on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WrapMode {
    /// Full modular wraparound; every coordinate lands on the display.
    Modular,
    /// A single add/subtract of the axis span. Coordinates still off the
    /// display afterwards are dropped.
    SingleStep,
}

/// Behaviors where interpreters have historically disagreed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quirks {
    pub wrap: WrapMode,
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks {
            wrap: WrapMode::Modular,
        }
    }
}
