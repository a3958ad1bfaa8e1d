//! Form configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::banner::{BannerTimerPolicy, DEFAULT_BANNER_DURATION};

/// Tunables for a [`FormValidator`](crate::FormValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How long the success banner stays visible.
    pub banner_duration: Duration,
    /// How repeated successes schedule the banner's hide.
    pub banner_timer: BannerTimerPolicy,
}

impl FormConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the success banner lifetime
    pub fn with_banner_duration(mut self, duration: Duration) -> Self {
        self.banner_duration = duration;
        self
    }

    /// Set the banner timer policy
    pub fn with_banner_timer(mut self, policy: BannerTimerPolicy) -> Self {
        self.banner_timer = policy;
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            banner_duration: DEFAULT_BANNER_DURATION,
            banner_timer: BannerTimerPolicy::default(),
        }
    }
}
