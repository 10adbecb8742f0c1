//! Color themes
//!
//! The engine only compares [`NodeColor`] values; a theme maps them to CSS
//! colors for whatever renders the board. Themes with a price are sold in the
//! shop, which lives outside this crate.

use serde::Serialize;

use crate::sim::NodeColor;

/// Theme used when none (or an unknown one) is selected
pub const DEFAULT_THEME_ID: &str = "neon";

/// A rendering palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Hex color per node color, in [`NodeColor::ALL`] order
    pub colors: [&'static str; 5],
    /// Background gradient class
    pub background: &'static str,
    /// Accent color for the timer and highlights
    pub accent: &'static str,
    /// Shop price; `None` means free
    pub price: Option<u32>,
}

/// Built-in themes
pub static THEMES: [Theme; 3] = [
    Theme {
        id: "neon",
        name: "Neon Dreams",
        colors: ["#FF3366", "#3366FF", "#33FF66", "#FFFF33", "#9933FF"],
        background: "from-purple-900 via-blue-900 to-indigo-900",
        accent: "#00FFFF",
        price: None,
    },
    Theme {
        id: "cyber",
        name: "Cyber Punk",
        colors: ["#FF0080", "#0080FF", "#80FF00", "#FFFF00", "#FF00FF"],
        background: "from-gray-900 via-purple-900 to-violet-900",
        accent: "#00FF41",
        price: Some(50),
    },
    Theme {
        id: "pastel",
        name: "Pastel Dreams",
        colors: ["#FFB3BA", "#BAE1FF", "#BAFFC9", "#FFFFBA", "#E1BAFF"],
        background: "from-pink-200 via-purple-200 to-indigo-200",
        accent: "#FF69B4",
        price: Some(30),
    },
];

impl Theme {
    /// Theme by id, falling back to the default
    pub fn by_id(id: &str) -> &'static Theme {
        THEMES
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(id))
            .unwrap_or(&THEMES[0])
    }

    pub fn all() -> &'static [Theme] {
        &THEMES
    }

    /// Visual value for a node color
    pub fn color(&self, color: NodeColor) -> &'static str {
        match color {
            NodeColor::Red => self.colors[0],
            NodeColor::Blue => self.colors[1],
            NodeColor::Green => self.colors[2],
            NodeColor::Yellow => self.colors[3],
            NodeColor::Purple => self.colors[4],
        }
    }

    pub fn is_free(&self) -> bool {
        self.price.is_none()
    }
}
