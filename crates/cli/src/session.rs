//! Session files: the class and general inventories, their core
//! configurations and the build role.
//!
//! Loading is lenient. Unknown gem types are skipped, missing inventories
//! are empty, a configuration list that is missing or does not hold exactly
//! three cores falls back to three Relic cores, and unreadable targets fall
//! back to 20.

use arkgrid::core::grid::{CORE_COUNT, DEFAULT_TARGET};
use arkgrid::{CoreConfig, GemType, GridProblem, Inventory, Path, Rarity, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use thiserror::Error;

/// Highest side-point value the editor accepts.
pub const MAX_SIDE_POINTS: u32 = 20;

/// Errors that can occur when reading or writing sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// One half of a session. The class grid is scored on the order path, the
/// general grid on the chaos path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Class,
    General,
}

impl Side {
    /// Both sides, class first.
    pub const BOTH: [Side; 2] = [Side::Class, Side::General];

    /// Scoring path of this side.
    pub fn path(self) -> Path {
        match self {
            Side::Class => Path::Order,
            Side::General => Path::Chaos,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Side::Class => "Class",
            Side::General => "General",
        }
    }
}

/// Saved optimizer state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub class: Inventory,
    pub general: Inventory,
    pub is_support: bool,
    pub class_cfg: [CoreConfig; CORE_COUNT],
    pub general_cfg: [CoreConfig; CORE_COUNT],
}

impl Session {
    /// Creates an empty session with three Relic cores per side.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory of a side.
    pub fn inventory(&self, side: Side) -> &Inventory {
        match side {
            Side::Class => &self.class,
            Side::General => &self.general,
        }
    }

    /// Mutable inventory of a side.
    pub fn inventory_mut(&mut self, side: Side) -> &mut Inventory {
        match side {
            Side::Class => &mut self.class,
            Side::General => &mut self.general,
        }
    }

    /// Core configurations of a side.
    pub fn cores(&self, side: Side) -> &[CoreConfig; CORE_COUNT] {
        match side {
            Side::Class => &self.class_cfg,
            Side::General => &self.general_cfg,
        }
    }

    /// Mutable core configurations of a side.
    pub fn cores_mut(&mut self, side: Side) -> &mut [CoreConfig; CORE_COUNT] {
        match side {
            Side::Class => &mut self.class_cfg,
            Side::General => &mut self.general_cfg,
        }
    }

    /// Build role of the session.
    pub fn role(&self) -> Role {
        Role::from_support(self.is_support)
    }

    /// Builds the optimization problem of a side.
    pub fn problem(&self, side: Side, role: Role) -> GridProblem {
        GridProblem::new(self.inventory(side).clone())
            .with_cores(*self.cores(side))
            .with_path(side.path())
            .with_role(role)
    }

    /// Replaces the gems of one type. Values above [`MAX_SIDE_POINTS`] are
    /// clamped.
    pub fn set_gems(&mut self, side: Side, gem: GemType, side_points: &[u32]) {
        let values = side_points
            .iter()
            .map(|&p| p.min(MAX_SIDE_POINTS))
            .collect();
        self.inventory_mut(side).set_gems(gem, values);
    }

    /// Changes the number of gems of one type, padding with zero-valued
    /// gems or dropping the last ones.
    pub fn resize_gems(&mut self, side: Side, gem: GemType, count: usize) {
        let mut values = self.inventory(side).side_points(gem).to_vec();
        values.resize(count, 0);
        self.inventory_mut(side).set_gems(gem, values);
    }

    /// Parses a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let raw: RawSession = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Serializes the session as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a session file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SessionError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Writes a session file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), SessionError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn from_raw(raw: RawSession) -> Self {
        Self {
            class: convert_inventory(raw.class.as_ref()),
            general: convert_inventory(raw.general.as_ref()),
            is_support: raw.is_support.as_ref().map_or(false, truthy),
            class_cfg: convert_cores(raw.class_cfg.as_ref()),
            general_cfg: convert_cores(raw.general_cfg.as_ref()),
        }
    }
}

/// Raw session as parsed from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    class: Option<Value>,
    general: Option<Value>,
    is_support: Option<Value>,
    class_cfg: Option<Value>,
    general_cfg: Option<Value>,
}

fn convert_inventory(raw: Option<&Value>) -> Inventory {
    let mut inventory = Inventory::new();
    let Some(Value::Object(map)) = raw else {
        return inventory;
    };

    for (key, entry) in map {
        let gem = match key.parse::<GemType>() {
            Ok(gem) => gem,
            Err(e) => {
                log::warn!("Skipping inventory entry: {}", e);
                continue;
            }
        };
        let values = match entry {
            Value::Array(values) => values
                .iter()
                .map(|v| number(v).map_or(0, |n| n.max(0.0) as u32))
                .collect(),
            _ => Vec::new(),
        };
        inventory.set_gems(gem, values);
    }
    inventory
}

fn convert_cores(raw: Option<&Value>) -> [CoreConfig; CORE_COUNT] {
    match raw {
        Some(Value::Array(items)) if items.len() == CORE_COUNT => {
            std::array::from_fn(|i| convert_core(&items[i]))
        }
        Some(_) => {
            log::warn!("Core list must hold {} cores, using defaults", CORE_COUNT);
            Default::default()
        }
        None => Default::default(),
    }
}

fn convert_core(raw: &Value) -> CoreConfig {
    let rarity = raw
        .get("rarity")
        .and_then(Value::as_str)
        .map_or(Rarity::None, Rarity::from);
    let target = raw
        .get("target")
        .and_then(number)
        .map_or(DEFAULT_TARGET, |t| t.max(0.0) as u32);
    let min_points = raw
        .get("minPoints")
        .and_then(number)
        .map_or(0, |m| m.max(0.0) as u32);

    CoreConfig::new(rarity)
        .with_target(target)
        .with_min_points(min_points)
}

/// Reads a number, accepting numeric strings.
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    n.is_finite().then(|| n.floor())
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert!(session.class.is_empty());
        assert!(!session.is_support);
        for core in session.class_cfg.iter().chain(session.general_cfg.iter()) {
            assert_eq!(core.rarity, Rarity::Relic);
            assert_eq!(core.target, 20);
        }
    }

    #[test]
    fn test_side_paths() {
        assert_eq!(Side::Class.path(), Path::Order);
        assert_eq!(Side::General.path(), Path::Chaos);
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(number(&Value::from(18)), Some(18.0));
        assert_eq!(number(&Value::from(7.9)), Some(7.0));
        assert_eq!(number(&Value::from("17")), Some(17.0));
        assert_eq!(number(&Value::from("high")), None);
        assert_eq!(number(&Value::Null), None);
    }

    #[test]
    fn test_truthy() {
        assert!(truthy(&Value::from(true)));
        assert!(truthy(&Value::from(1)));
        assert!(!truthy(&Value::from(0)));
        assert!(!truthy(&Value::from("")));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn test_set_and_resize_gems() {
        let mut session = Session::new();
        session.set_gems(Side::Class, GemType::A, &[25, 10]);
        assert_eq!(session.class.side_points(GemType::A), &[20, 10]);

        session.resize_gems(Side::Class, GemType::A, 4);
        assert_eq!(session.class.side_points(GemType::A), &[20, 10, 0, 0]);
        session.resize_gems(Side::Class, GemType::A, 1);
        assert_eq!(session.class.side_points(GemType::A), &[20]);
        assert!(session.general.is_empty());
    }

    #[test]
    fn test_problem_uses_side_path() {
        let mut session = Session::new();
        session.cores_mut(Side::General)[2] = CoreConfig::none();
        let problem = session.problem(Side::General, Role::Support);

        assert_eq!(problem.path, Path::Chaos);
        assert_eq!(problem.role, Role::Support);
        assert_eq!(problem.cores[2].rarity, Rarity::None);
    }
}
