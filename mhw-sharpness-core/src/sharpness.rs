use serde::{Deserialize, Serialize};

/// Sharpness rank colors, worst to best.
pub const SHARPNESS_COLORS: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "white"];

/// Upper bound of a single rank on the canonical scale.
pub const MAX_RANK_VALUE: u16 = 400;

/// Per-rank sharpness on the canonical 0-400 scale, worst rank first.
///
/// Trailing empty ranks are dropped, so a weapon without white sharpness
/// has at most five entries. Interior empty ranks stay as 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sharpness(Vec<u16>);

impl Sharpness {
    /// Build from raw rank values. Returns `None` when more than six ranks
    /// are given or a rank exceeds [`MAX_RANK_VALUE`].
    pub fn from_ranks(ranks: impl IntoIterator<Item = u16>) -> Option<Self> {
        let mut ranks: Vec<u16> = ranks.into_iter().collect();
        if ranks.len() > SHARPNESS_COLORS.len() || ranks.iter().any(|&v| v > MAX_RANK_VALUE) {
            return None;
        }
        while ranks.last() == Some(&0) {
            ranks.pop();
        }
        Some(Self(ranks))
    }

    pub fn ranks(&self) -> &[u16] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all ranks.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&v| u32::from(v)).sum()
    }

    pub fn to_colors(&self) -> SharpnessByColor {
        let rank = |i: usize| self.0.get(i).copied();
        SharpnessByColor {
            red: rank(0),
            orange: rank(1),
            yellow: rank(2),
            green: rank(3),
            blue: rank(4),
            white: rank(5),
        }
    }
}

/// Sharpness keyed by rank color, as written to the merged export.
/// Absent ranks are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SharpnessByColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orange: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<u16>,
}

impl std::fmt::Display for Sharpness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
