//! # Stages
//!
//! The closed set of points an order moves through, from the moment the
//! checkout hands it over until it reaches the customer.
//!
//! Status strings coming from the order service are free text. They are turned
//! into a [`Stage`] in exactly one place, [`StatusCatalog::parse`](crate::StatusCatalog::parse),
//! which yields a [`ParsedStatus`]. Anything that does not match a stage name
//! stays visible as [`ParsedStatus::Unrecognized`] instead of being guessed.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the four fixed stages of the order lifecycle.
///
/// The discriminant is the stage ordinal, so `Stage::Enviado as usize == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Procesando = 0,
    Enviado = 1,
    EnTransito = 2,
    Entregado = 3,
}

impl Stage {
    /// Number of stages in the lifecycle.
    pub const COUNT: usize = 4;

    /// Every stage in ordinal order.
    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::Procesando,
        Stage::Enviado,
        Stage::EnTransito,
        Stage::Entregado,
    ];

    /// 0-based position in the lifecycle.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Stage> {
        Self::ALL.get(ordinal).copied()
    }

    /// The stage an `advance` moves to, `None` for [`Stage::Entregado`].
    pub fn next(self) -> Option<Stage> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Entregado
    }

    /// Display name used by the standard catalog.
    pub fn default_name(self) -> &'static str {
        match self {
            Stage::Procesando => "Procesando",
            Stage::Enviado => "Enviado",
            Stage::EnTransito => "En Tránsito",
            Stage::Entregado => "Entregado",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Presentation metadata attached to a stage by a catalog.
///
/// `icon` and `style_class` carry no invariant; `name` is the canonical status
/// string written back to the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    pub stage: Stage,
    pub name: String,
    pub icon: String,
    pub style_class: String,
}

impl StageInfo {
    pub fn new(
        stage: Stage,
        name: impl Into<String>,
        icon: impl Into<String>,
        style_class: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            name: name.into(),
            icon: icon.into(),
            style_class: style_class.into(),
        }
    }

    pub fn ordinal(&self) -> usize {
        self.stage.ordinal()
    }

    /// Case-insensitive match of a raw status string against this stage's name.
    pub fn matches(&self, status: &str) -> bool {
        status_eq(&self.name, status)
    }
}

/// Result of resolving a raw status string against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStatus {
    Known(Stage),
    /// The raw string, kept as received.
    Unrecognized(String),
}

impl ParsedStatus {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ParsedStatus::Known(stage) => Some(*stage),
            ParsedStatus::Unrecognized(_) => None,
        }
    }

    pub fn ordinal(&self) -> Option<usize> {
        self.stage().map(Stage::ordinal)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ParsedStatus::Known(_))
    }
}

/// Case-insensitive status comparison used everywhere a status string is
/// compared with another one.
pub fn status_eq(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.ordinal(), i);
            assert_eq!(Stage::from_ordinal(i), Some(*stage));
        }
        assert_eq!(Stage::from_ordinal(4), None);
    }

    #[test]
    fn test_next_stops_at_entregado() {
        assert_eq!(Stage::Procesando.next(), Some(Stage::Enviado));
        assert_eq!(Stage::EnTransito.next(), Some(Stage::Entregado));
        assert_eq!(Stage::Entregado.next(), None);
        assert!(Stage::Entregado.is_terminal());
        assert!(!Stage::EnTransito.is_terminal());
    }

    #[test]
    fn test_status_eq_handles_accents() {
        assert!(status_eq("En Tránsito", "EN TRÁNSITO"));
        assert!(status_eq("entregado", "Entregado"));
        assert!(!status_eq("En Transito", "En Tránsito"));
    }
}
