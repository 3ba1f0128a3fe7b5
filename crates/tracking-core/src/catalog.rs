//! # Status Catalog
//!
//! The single source of truth for the four ordered stages and their
//! presentation metadata. A catalog is an immutable value: build it once
//! (usually with [`StatusCatalog::standard`]), wrap it in an `Arc` and hand it
//! to the [`ProgressionEngine`](crate::ProgressionEngine) and
//! [`TransitionAuthority`](crate::TransitionAuthority).
//!
//! ```rust
//! use tracking_core::{ParsedStatus, Stage, StatusCatalog};
//!
//! let catalog = StatusCatalog::standard();
//! assert_eq!(catalog.parse("en tránsito"), ParsedStatus::Known(Stage::EnTransito));
//! assert_eq!(catalog.ordinal_of("Cancelado"), -1);
//! ```

use crate::stage::{ParsedStatus, Stage, StageInfo};

/// Errors raised when building a catalog with custom metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Stage {found:?} listed at position {position}, expected {expected:?}")]
    OutOfOrder {
        position: usize,
        expected: Stage,
        found: Stage,
    },
    #[error("Stage name {0:?} is used more than once")]
    DuplicateName(String),
    #[error("Stage {0:?} has an empty name")]
    EmptyName(Stage),
}

/// Ordered, fixed list of the lifecycle stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCatalog {
    stages: [StageInfo; Stage::COUNT],
}

impl StatusCatalog {
    /// The catalog used by the order panel.
    pub fn standard() -> Self {
        Self {
            stages: [
                StageInfo::new(Stage::Procesando, "Procesando", "⏳", "procesando"),
                StageInfo::new(Stage::Enviado, "Enviado", "📦", "enviado"),
                StageInfo::new(Stage::EnTransito, "En Tránsito", "🚚", "en-transito"),
                StageInfo::new(Stage::Entregado, "Entregado", "✓", "entregado"),
            ],
        }
    }

    /// Builds a catalog with custom metadata (e.g. another locale).
    ///
    /// Entries must be listed in canonical ordinal order and their names must
    /// be distinct ignoring case, otherwise lookups would be ambiguous.
    pub fn new(stages: [StageInfo; Stage::COUNT]) -> Result<Self, CatalogError> {
        for (position, info) in stages.iter().enumerate() {
            let expected = Stage::ALL[position];
            if info.stage != expected {
                return Err(CatalogError::OutOfOrder {
                    position,
                    expected,
                    found: info.stage,
                });
            }
            if info.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(info.stage));
            }
            if stages[..position].iter().any(|prev| prev.matches(&info.name)) {
                return Err(CatalogError::DuplicateName(info.name.clone()));
            }
        }
        Ok(Self { stages })
    }

    /// All stages in ordinal order.
    pub fn stages(&self) -> &[StageInfo] {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn last_ordinal(&self) -> usize {
        self.stages.len() - 1
    }

    pub fn info(&self, stage: Stage) -> &StageInfo {
        &self.stages[stage.ordinal()]
    }

    pub fn at(&self, ordinal: usize) -> Option<&StageInfo> {
        self.stages.get(ordinal)
    }

    /// Canonical name of a stage in this catalog.
    pub fn name(&self, stage: Stage) -> &str {
        &self.info(stage).name
    }

    /// Case-insensitive lookup by name.
    pub fn lookup(&self, status: &str) -> Option<&StageInfo> {
        self.stages.iter().find(|info| info.matches(status))
    }

    /// The string boundary: resolves a raw status into a stage or keeps it as
    /// unrecognized.
    pub fn parse(&self, status: &str) -> ParsedStatus {
        match self.lookup(status) {
            Some(info) => ParsedStatus::Known(info.stage),
            None => ParsedStatus::Unrecognized(status.to_string()),
        }
    }

    /// Ordinal of the matching stage, or `-1` when nothing matches.
    pub fn ordinal_of(&self, status: &str) -> isize {
        self.lookup(status)
            .map(|info| info.ordinal() as isize)
            .unwrap_or(-1)
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = StatusCatalog::standard();
        let names: Vec<&str> = catalog.stages().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Procesando", "Enviado", "En Tránsito", "Entregado"]);
        assert_eq!(catalog.last_ordinal(), 3);
        assert_eq!(catalog.info(Stage::EnTransito).style_class, "en-transito");
    }

    #[test]
    fn test_ordinal_of_every_stage_any_case() {
        let catalog = StatusCatalog::standard();
        for info in catalog.stages() {
            assert_eq!(catalog.ordinal_of(&info.name), info.ordinal() as isize);
            assert_eq!(catalog.ordinal_of(&info.name.to_uppercase()), info.ordinal() as isize);
            assert_eq!(catalog.ordinal_of(&info.name.to_lowercase()), info.ordinal() as isize);
        }
    }

    #[test]
    fn test_unknown_status_is_minus_one() {
        let catalog = StatusCatalog::standard();
        assert_eq!(catalog.ordinal_of("Cancelado"), -1);
        assert_eq!(catalog.ordinal_of(""), -1);
        assert_eq!(catalog.ordinal_of(" Enviado"), -1);
        assert_eq!(
            catalog.parse("Cancelado"),
            ParsedStatus::Unrecognized("Cancelado".to_string())
        );
    }

    #[test]
    fn test_custom_catalog_must_keep_order() {
        let mut stages = StatusCatalog::standard().stages;
        stages.swap(0, 1);
        let err = StatusCatalog::new(stages).unwrap_err();
        assert_eq!(
            err,
            CatalogError::OutOfOrder {
                position: 0,
                expected: Stage::Procesando,
                found: Stage::Enviado,
            }
        );
    }

    #[test]
    fn test_custom_catalog_rejects_duplicate_names() {
        let mut stages = StatusCatalog::standard().stages;
        stages[2].name = "ENVIADO".to_string();
        assert_eq!(
            StatusCatalog::new(stages),
            Err(CatalogError::DuplicateName("ENVIADO".to_string()))
        );
    }

    #[test]
    fn test_custom_catalog_with_english_names() {
        let catalog = StatusCatalog::new([
            StageInfo::new(Stage::Procesando, "Processing", "⏳", "procesando"),
            StageInfo::new(Stage::Enviado, "Shipped", "📦", "enviado"),
            StageInfo::new(Stage::EnTransito, "In Transit", "🚚", "en-transito"),
            StageInfo::new(Stage::Entregado, "Delivered", "✓", "entregado"),
        ])
        .unwrap();
        assert_eq!(catalog.parse("in transit"), ParsedStatus::Known(Stage::EnTransito));
        assert_eq!(catalog.ordinal_of("Enviado"), -1);
    }
}
