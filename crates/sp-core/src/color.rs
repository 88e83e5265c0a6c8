//! Display color tags assigned to subjects.

use std::fmt;

/// A color from the fixed subject palette.
///
/// The core only guarantees a stable identifier per variant; mapping it to an
/// actual color is left to whatever renders the plan.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Pink,
    Orange,
    Teal,
    Indigo,
    Red,
}

impl ColorTag {
    /// Every color in the palette, in a fixed order.
    pub const ALL: [ColorTag; 8] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Pink,
        ColorTag::Orange,
        ColorTag::Teal,
        ColorTag::Indigo,
        ColorTag::Red,
    ];

    /// Stable lowercase identifier, e.g. `"teal"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Orange => "orange",
            ColorTag::Teal => "teal",
            ColorTag::Indigo => "indigo",
            ColorTag::Red => "red",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
