//! Projection configuration
//!
//! Layered from defaults, an optional file, then `APPROVAL__`-prefixed
//! environment variables (`APPROVAL__LABELS__TEAM_LEADER=...`).

use crate::approvers::ApproverLabels;
use approval_types::{ApprovalError, ApprovalResult};
use serde::{Deserialize, Serialize};

/// Configuration for process projection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Placeholder and role labels for approver rows
    #[serde(default)]
    pub labels: ApproverLabels,

    /// Keep hidden nodes in the projection, marked `visible = false`
    #[serde(default)]
    pub include_hidden: bool,
}

impl ProjectionConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&str>) -> ApprovalResult<Self> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(
            config::Config::try_from(&ProjectionConfig::default()).map_err(config_error)?,
        );

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add environment variables with APPROVAL__ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("APPROVAL")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

fn config_error(err: config::ConfigError) -> ApprovalError {
    ApprovalError::Config(err.to_string())
}
