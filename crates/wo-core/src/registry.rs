//! Builds every exit of a world from its one-way definitions.

use std::collections::BTreeMap;

use crate::error::{WoError, WoResult};
use crate::exit::{Exit, ExitConfig, REVERSE_SUFFIX};
use crate::passage::PassageRule;

/// Label of the station's outer door.
pub const MAIN_PORTAL: &str = "main_portal";
/// Label of the door into the reactor room.
pub const REACTOR_DOOR: &str = "reactor_door";

/// The guarded passages and the rule each one carries.
fn guarded_passages() -> [(&'static str, PassageRule); 2] {
    [
        (
            MAIN_PORTAL,
            PassageRule::DualCredential {
                key: "keycard".to_string(),
                protection: "parka".to_string(),
            },
        ),
        (REACTOR_DOOR, PassageRule::Prerequisite),
    ]
}

/// All exits of a world, keyed by label.
#[derive(Debug, Default)]
pub struct ExitRegistry {
    exits: BTreeMap<String, Exit>,
}

impl ExitRegistry {
    /// Build forward and reverse exits for every definition, then install the
    /// guarded passage rules.
    pub fn populate(configs: &[ExitConfig]) -> WoResult<Self> {
        let mut registry = Self::default();

        for config in configs {
            registry.insert(Exit::from_config(config)?)?;
            registry.insert(Exit::from_config(&config.reversed())?)?;
        }

        registry.install_guards()?;
        tracing::debug!(exits = registry.len(), "exit registry populated");
        Ok(registry)
    }

    fn insert(&mut self, exit: Exit) -> WoResult<()> {
        if self.exits.contains_key(&exit.label) {
            return Err(WoError::DuplicateLabel(exit.label));
        }
        self.exits.insert(exit.label.clone(), exit);
        Ok(())
    }

    /// Both ends of each guarded passage get the same rule and share the
    /// forward end's gate.
    fn install_guards(&mut self) -> WoResult<()> {
        for (label, rule) in guarded_passages() {
            let reverse_label = format!("{label}{REVERSE_SUFFIX}");
            let ends = [label, reverse_label.as_str()];
            if let Some(missing) = ends.iter().find(|end| !self.exits.contains_key(**end)) {
                return Err(WoError::MissingSpecialExit(missing.to_string()));
            }

            let gate = self
                .exits
                .get(label)
                .map(|exit| exit.gate().clone())
                .ok_or_else(|| WoError::MissingSpecialExit(label.to_string()))?;
            for end in ends {
                if let Some(exit) = self.exits.get_mut(end) {
                    exit.guard(rule.clone(), gate.clone());
                }
            }
            tracing::debug!(exit = label, rule = ?rule, "guarded passage installed");
        }
        Ok(())
    }

    /// Get an exit by label.
    pub fn get(&self, label: &str) -> Option<&Exit> {
        self.exits.get(label)
    }

    /// Number of exits, counting both directions.
    pub fn len(&self) -> usize {
        self.exits.len()
    }

    /// Whether the registry holds no exits.
    pub fn is_empty(&self) -> bool {
        self.exits.is_empty()
    }

    /// Iterate exits in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Exit> {
        self.exits.values()
    }

    /// Consume the registry, yielding every exit.
    pub fn into_exits(self) -> impl Iterator<Item = Exit> {
        self.exits.into_values()
    }
}
