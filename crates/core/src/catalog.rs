//! Achievement catalog loading and lookup (PRD-21).
//!
//! The catalog is the validated, immutable set of achievement
//! definitions active for a deployment. It is constructed once at
//! startup and passed by reference into every evaluation call; nothing
//! in the engine reads definitions from ambient state.

use std::collections::HashMap;

use crate::achievement::{validate_definition, AchievementDefinition, ReleasePhase};
use crate::error::CoreError;

/// Validated, immutable set of achievement definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<AchievementDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate and index a set of definitions.
    ///
    /// Fails with [`CoreError::InvalidDefinition`] if any definition is
    /// invalid or any id appears twice. A failed load rejects the whole
    /// catalog; there is no partial acceptance.
    pub fn load(definitions: Vec<AchievementDefinition>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(definitions.len());

        for (i, definition) in definitions.iter().enumerate() {
            validate_definition(definition)?;
            if index.insert(definition.id.clone(), i).is_some() {
                return Err(CoreError::InvalidDefinition(format!(
                    "Duplicate achievement id '{}'",
                    definition.id
                )));
            }
        }

        Ok(Self { definitions, index })
    }

    /// Load a catalog from its JSON configuration form: an array of
    /// definitions.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let definitions: Vec<AchievementDefinition> = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidDefinition(format!("Malformed catalog JSON: {e}")))?;
        Self::load(definitions)
    }

    /// The definition with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&AchievementDefinition> {
        self.index.get(id).map(|&i| &self.definitions[i])
    }

    /// The definition with the given id, or [`CoreError::NotFound`].
    pub fn require(&self, id: &str) -> Result<&AchievementDefinition, CoreError> {
        self.get(id).ok_or_else(|| CoreError::NotFound {
            entity: "Achievement",
            id: id.to_string(),
        })
    }

    /// All definitions, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AchievementDefinition> {
        self.definitions.iter()
    }

    /// Definitions live under the given active phase, in catalog order.
    ///
    /// Definitions gated behind a later phase are excluded from all
    /// evaluation and display for that deployment.
    pub fn active(
        &self,
        active_phase: ReleasePhase,
    ) -> impl Iterator<Item = &AchievementDefinition> {
        self.definitions
            .iter()
            .filter(move |d| d.phase <= active_phase)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::{
        AchievementCategory, AchievementTier, ProgressType, Visibility,
    };
    use assert_matches::assert_matches;

    fn definition(id: &str, phase: ReleasePhase) -> AchievementDefinition {
        AchievementDefinition {
            id: id.to_string(),
            name: format!("Achievement {id}"),
            description: "Test achievement".to_string(),
            category: AchievementCategory::Milestone,
            tier: AchievementTier::Bronze,
            progress_type: ProgressType::Count,
            target_value: 10.0,
            visibility: Visibility::Visible,
            phase,
            expires_at: None,
            xp_override: None,
        }
    }

    // -- load -----------------------------------------------------------------

    #[test]
    fn load_accepts_valid_definitions() {
        let catalog = Catalog::load(vec![
            definition("first_shift_logged", ReleasePhase::Mvp),
            definition("week_streak", ReleasePhase::Phase1),
        ])
        .expect("catalog should load");

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("first_shift_logged").is_some());
        assert!(catalog.get("unknown").is_none());
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let result = Catalog::load(vec![
            definition("dup", ReleasePhase::Mvp),
            definition("dup", ReleasePhase::Mvp),
        ]);

        assert_matches!(result, Err(CoreError::InvalidDefinition(msg)) => {
            assert!(msg.contains("dup"));
        });
    }

    #[test]
    fn load_rejects_invalid_target() {
        let mut bad = definition("bad_target", ReleasePhase::Mvp);
        bad.target_value = 0.0;
        let result = Catalog::load(vec![definition("ok", ReleasePhase::Mvp), bad]);
        assert_matches!(result, Err(CoreError::InvalidDefinition(_)));
    }

    #[test]
    fn empty_catalog_loads() {
        let catalog = Catalog::load(Vec::new()).expect("empty catalog is valid");
        assert!(catalog.is_empty());
    }

    // -- from_json_str --------------------------------------------------------

    #[test]
    fn json_catalog_loads() {
        let json = r#"[
            {
                "id": "first_hundred_earned",
                "name": "First $100",
                "description": "Earn your first $100 in tips",
                "category": "earnings",
                "tier": "bronze",
                "progress_type": "amount",
                "target_value": 100.0,
                "visibility": "visible",
                "phase": "mvp"
            }
        ]"#;

        let catalog = Catalog::from_json_str(json).expect("json catalog should load");
        assert_eq!(catalog.len(), 1);
        let def = catalog.get("first_hundred_earned").expect("present");
        assert_eq!(def.xp_reward(), 50);
        assert!(def.expires_at.is_none());
    }

    #[test]
    fn malformed_json_rejected() {
        assert_matches!(
            Catalog::from_json_str("not json"),
            Err(CoreError::InvalidDefinition(_))
        );
    }

    // -- require --------------------------------------------------------------

    #[test]
    fn require_missing_id_is_not_found() {
        let catalog = Catalog::load(Vec::new()).expect("load");
        assert_matches!(
            catalog.require("ghost"),
            Err(CoreError::NotFound { entity: "Achievement", .. })
        );
    }

    // -- phase gating ---------------------------------------------------------

    #[test]
    fn active_filters_later_phases() {
        let catalog = Catalog::load(vec![
            definition("mvp_one", ReleasePhase::Mvp),
            definition("p1_one", ReleasePhase::Phase1),
            definition("p2_one", ReleasePhase::Phase2),
        ])
        .expect("load");

        let mvp: Vec<&str> = catalog
            .active(ReleasePhase::Mvp)
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(mvp, vec!["mvp_one"]);

        let p1: Vec<&str> = catalog
            .active(ReleasePhase::Phase1)
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(p1, vec!["mvp_one", "p1_one"]);

        let p2: Vec<&str> = catalog
            .active(ReleasePhase::Phase2)
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(p2.len(), 3);
    }
}
