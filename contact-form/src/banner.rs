//! Success banner shown after a fully valid submission.

use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Default time the banner stays visible after a successful submit.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_secs(5);

/// How repeated successes schedule the banner's auto-hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerTimerPolicy {
    /// Every success schedules its own hide and none is ever cancelled.
    /// A hide scheduled by an earlier success can end a later banner early.
    #[default]
    Independent,
    /// A single hide deadline, moved forward on each success.
    Restart,
}

/// Visibility of the success banner plus its pending hide deadlines.
#[derive(Debug, Clone)]
pub struct SuccessBanner {
    visible: bool,
    duration: Duration,
    policy: BannerTimerPolicy,
    /// Deadlines not yet fired, oldest first.
    pending: Vec<Instant>,
}

impl SuccessBanner {
    /// Create a hidden banner.
    pub fn new(duration: Duration, policy: BannerTimerPolicy) -> Self {
        Self {
            visible: false,
            duration,
            policy,
            pending: Vec::new(),
        }
    }

    /// Whether the banner is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of hide deadlines that have not fired yet.
    pub fn pending_hides(&self) -> usize {
        self.pending.len()
    }

    /// Show the banner and schedule its hide. Returns `true` if it was hidden before.
    ///
    /// A duration too large to add to `now` schedules no hide; the banner then
    /// stays up until the next submit.
    pub fn show(&mut self, now: Instant) -> bool {
        if self.policy == BannerTimerPolicy::Restart {
            self.pending.clear();
        }
        match now.checked_add(self.duration) {
            Some(deadline) => self.pending.push(deadline),
            None => warn!("Banner duration {:?} out of range, hide not scheduled", self.duration),
        }
        debug!(
            "Banner hide scheduled in {:?} ({} pending)",
            self.duration,
            self.pending.len()
        );
        !std::mem::replace(&mut self.visible, true)
    }

    /// Hide immediately. Pending deadlines are left to fire on their own.
    ///
    /// Returns `true` if the banner was visible.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Fire every deadline at or before `now`.
    ///
    /// Returns `true` if a firing deadline hid a visible banner.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let before = self.pending.len();
        self.pending.retain(|deadline| *deadline > now);
        let fired = before - self.pending.len();
        if fired == 0 {
            return false;
        }
        debug!("{} banner hide(s) fired", fired);
        self.hide()
    }

    /// Earliest deadline still pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }
}

impl Default for SuccessBanner {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_DURATION, BannerTimerPolicy::default())
    }
}
