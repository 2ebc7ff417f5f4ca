use crate::Probability;

/// Behavioral category of the opponent in the big blind.
///
/// The set is closed so the fold-rate lookup stays total: free text that
/// matches none of the known labels resolves to [`Style::Neutral`].
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Tight,
    Loose,
    Aggressive,
    Passive,
    #[default]
    Neutral,
}

impl Style {
    /// Adjustment to the base fold-to-raise rate.
    pub fn fold_offset(&self) -> Probability {
        match self {
            Style::Tight => 0.10,
            Style::Loose => -0.10,
            Style::Aggressive => -0.15,
            Style::Passive => 0.15,
            Style::Neutral => 0.00,
        }
    }
    /// Reads a category label, including common table lingo.
    /// Returns `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tight" | "tag" | "nit" | "rock" | "turtle" => Some(Style::Tight),
            "loose" | "fish" | "station" | "caller" | "gambler" => Some(Style::Loose),
            "aggressive" | "lag" | "maniac" | "viking" | "hunter" => Some(Style::Aggressive),
            "passive" | "limper" => Some(Style::Passive),
            "neutral" | "balanced" | "reg" => Some(Style::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Style::Tight => write!(f, "tight"),
            Style::Loose => write!(f, "loose"),
            Style::Aggressive => write!(f, "aggressive"),
            Style::Passive => write!(f, "passive"),
            Style::Neutral => write!(f, "neutral"),
        }
    }
}

/// Who the hero is up against: a style category plus the descriptive
/// text shown to the player and handed to the coach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    style: Style,
    label: String,
    notes: String,
}

impl Opponent {
    pub fn new(style: Style, label: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            style,
            label: label.into(),
            notes: notes.into(),
        }
    }
    /// Resolves a loosely-typed profile. The category is tried first,
    /// then the type label; if neither is known the style is neutral.
    pub fn resolve(category: &str, label: &str, notes: &str) -> Self {
        let style = Style::parse(category)
            .or_else(|| Style::parse(label))
            .unwrap_or_else(|| {
                log::debug!("unrecognized opponent style {:?}/{:?}", category, label);
                Style::Neutral
            });
        Self::new(style, label, notes)
    }
    pub fn style(&self) -> Style {
        self.style
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(Style::Neutral, "regular", "balanced, standard play")
    }
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.style)
    }
}
