//! Holds the planning configuration in effect for this process.
//!
//! The configuration is never persisted. It starts from the settings file and
//! can be replaced through the API; callers take a copy with [`PlanningConfigService::current`]
//! and hand it to the computations explicitly.

use log::info;
use shared::PlanningConfig;
use std::sync::{Arc, RwLock};

use crate::backend::domain::commands::config::UpdatePlanningConfigCommand;
use crate::backend::domain::error::DomainResult;
use crate::backend::domain::validation::InputValidator;

#[derive(Clone)]
pub struct PlanningConfigService {
    current: Arc<RwLock<PlanningConfig>>,
    validator: InputValidator,
}

impl PlanningConfigService {
    pub fn new(initial: PlanningConfig) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
            validator: InputValidator::new(),
        }
    }

    /// Copy of the configuration in effect
    pub fn current(&self) -> PlanningConfig {
        // PlanningConfig is Copy, so a poisoned lock still holds a whole value
        match self.current.read() {
            Ok(config) => *config,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Validate and replace the configuration
    pub fn update(&self, command: UpdatePlanningConfigCommand) -> DomainResult<PlanningConfig> {
        let config = self
            .validator
            .validate_planning_config(command.ride_value, command.work_days)?;

        match self.current.write() {
            Ok(mut current) => *current = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }

        info!(
            "Planning configuration updated: ride_value={}, work_days={}",
            config.ride_value, config.work_days
        );
        Ok(config)
    }
}

impl Default for PlanningConfigService {
    fn default() -> Self {
        Self::new(PlanningConfig::default())
    }
}
