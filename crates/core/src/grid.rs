//! Core slots, rarities and build axes.

use crate::inventory::Inventory;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of cores in a grid.
pub const CORE_COUNT: usize = 3;

/// Target used when none is configured.
pub const DEFAULT_TARGET: u32 = 20;

/// Lowest selectable target.
pub const MIN_TARGET: u32 = 10;

/// Highest selectable target.
pub const MAX_TARGET: u32 = 20;

/// Core rarity. Determines the will budget and the absolute point cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Rarity {
    Legendary,
    #[default]
    Relic,
    Ancient,
    /// No core in this slot.
    None,
}

impl Rarity {
    /// Will budget of a core of this rarity.
    pub const fn will_budget(self) -> u32 {
        match self {
            Rarity::Legendary => 12,
            Rarity::Relic => 15,
            Rarity::Ancient => 17,
            Rarity::None => 0,
        }
    }

    /// Highest point total a core of this rarity can make use of.
    pub const fn point_cap(self) -> u32 {
        match self {
            Rarity::Legendary => 14,
            Rarity::Relic | Rarity::Ancient => 20,
            Rarity::None => 0,
        }
    }

    /// Parses a rarity name, case-insensitively.
    ///
    /// Unknown names map to [`Rarity::None`] (zero budget).
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "legendary" => Rarity::Legendary,
            "relic" => Rarity::Relic,
            "ancient" => Rarity::Ancient,
            _ => Rarity::None,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Legendary => "Legendary",
            Rarity::Relic => "Relic",
            Rarity::Ancient => "Ancient",
            Rarity::None => "None",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Rarity {
    fn from(name: &str) -> Self {
        Rarity::parse_lenient(name)
    }
}

impl From<String> for Rarity {
    fn from(name: String) -> Self {
        Rarity::parse_lenient(&name)
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.name().to_string()
    }
}

/// Normalizes a raw target: 0 means "unset", anything else is clamped
/// to `MIN_TARGET..=MAX_TARGET`.
pub fn normalize_target(target: u32) -> u32 {
    if target == 0 {
        DEFAULT_TARGET
    } else {
        target.clamp(MIN_TARGET, MAX_TARGET)
    }
}

/// Configuration of one core slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoreConfig {
    /// Core rarity.
    pub rarity: Rarity,

    /// Point target. Points above it are worth nothing.
    #[cfg_attr(feature = "serde", serde(default = "default_target"))]
    pub target: u32,

    /// Minimum capped points the core must reach (0 = no minimum).
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_points: u32,
}

#[cfg(feature = "serde")]
fn default_target() -> u32 {
    DEFAULT_TARGET
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(Rarity::default())
    }
}

impl CoreConfig {
    /// Creates a config with the default target and no minimum.
    pub fn new(rarity: Rarity) -> Self {
        Self {
            rarity,
            target: DEFAULT_TARGET,
            min_points: 0,
        }
    }

    /// An empty slot.
    pub fn none() -> Self {
        Self::new(Rarity::None)
    }

    /// Sets the point target.
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = normalize_target(target);
        self
    }

    /// Sets the minimum capped points.
    pub fn with_min_points(mut self, min_points: u32) -> Self {
        self.min_points = min_points;
        self
    }

    /// Will budget of this core.
    pub fn will_budget(&self) -> u32 {
        self.rarity.will_budget()
    }

    /// Effective point cap: the target bounded by the rarity cap.
    pub fn point_cap(&self) -> u32 {
        normalize_target(self.target).min(self.rarity.point_cap())
    }
}

/// Scoring path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Path {
    /// Order path; eligible for the order synergy bonus.
    #[default]
    Order,
    /// Chaos path.
    Chaos,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Order => f.write_str("order"),
            Path::Chaos => f.write_str("chaos"),
        }
    }
}

/// Build role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    #[default]
    Damage,
    Support,
}

impl Role {
    /// Returns the role for a support flag.
    pub fn from_support(is_support: bool) -> Self {
        if is_support {
            Role::Support
        } else {
            Role::Damage
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Damage => f.write_str("damage"),
            Role::Support => f.write_str("support"),
        }
    }
}

/// One optimization request: an inventory, three cores and the build axes.
#[derive(Debug, Clone, Default)]
pub struct GridProblem {
    pub inventory: Inventory,
    pub cores: [CoreConfig; CORE_COUNT],
    pub path: Path,
    pub role: Role,
}

impl GridProblem {
    /// Creates a problem with three default (Relic) cores on the order path.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    /// Sets the three core configurations.
    pub fn with_cores(mut self, cores: [CoreConfig; CORE_COUNT]) -> Self {
        self.cores = cores;
        self
    }

    /// Sets a single core configuration.
    pub fn with_core(mut self, index: usize, core: CoreConfig) -> Self {
        self.cores[index] = core;
        self
    }

    /// Sets the scoring path.
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    /// Sets the build role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_tables() {
        assert_eq!(Rarity::Legendary.will_budget(), 12);
        assert_eq!(Rarity::Relic.will_budget(), 15);
        assert_eq!(Rarity::Ancient.will_budget(), 17);
        assert_eq!(Rarity::None.will_budget(), 0);
        assert_eq!(Rarity::Legendary.point_cap(), 14);
        assert_eq!(Rarity::None.point_cap(), 0);
    }

    #[test]
    fn test_rarity_parse_lenient() {
        assert_eq!(Rarity::from("relic"), Rarity::Relic);
        assert_eq!(Rarity::from(" ANCIENT "), Rarity::Ancient);
        assert_eq!(Rarity::from("Mythic"), Rarity::None);
        assert_eq!(Rarity::from(String::new()), Rarity::None);
    }

    #[test]
    fn test_target_normalization() {
        assert_eq!(normalize_target(0), 20);
        assert_eq!(normalize_target(3), 10);
        assert_eq!(normalize_target(17), 17);
        assert_eq!(normalize_target(99), 20);
    }

    #[test]
    fn test_point_cap() {
        assert_eq!(CoreConfig::new(Rarity::Relic).point_cap(), 20);
        assert_eq!(CoreConfig::new(Rarity::Relic).with_target(17).point_cap(), 17);
        assert_eq!(CoreConfig::new(Rarity::Legendary).point_cap(), 14);
        assert_eq!(CoreConfig::none().point_cap(), 0);

        let raw = CoreConfig {
            rarity: Rarity::Ancient,
            target: 0,
            min_points: 0,
        };
        assert_eq!(raw.point_cap(), 20);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_core_config_serde_defaults() {
        let cfg: CoreConfig = serde_json::from_str(r#"{"rarity":"Legendary"}"#).unwrap();
        assert_eq!(cfg.rarity, Rarity::Legendary);
        assert_eq!(cfg.target, DEFAULT_TARGET);
        assert_eq!(cfg.min_points, 0);

        let cfg: CoreConfig =
            serde_json::from_str(r#"{"rarity":"Bogus","target":18,"minPoints":14}"#).unwrap();
        assert_eq!(cfg.rarity, Rarity::None);
        assert_eq!(cfg.min_points, 14);
        assert_eq!(serde_json::to_string(&cfg.rarity).unwrap(), "\"None\"");
    }
}
