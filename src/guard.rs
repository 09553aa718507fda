//! Route guard deciding whether a view may be entered

use crate::config::FormConfig;
use crate::state::View;

/// Gate consulted before navigating to a view
#[cfg_attr(test, mockall::automock)]
pub trait RouteGuard: Send + Sync {
    fn can_activate(&self, view: View) -> bool;
}

/// Guard driven by the `allow_form_route` setting
#[derive(Debug, Clone, Copy)]
pub struct ConfigGuard {
    allow_form: bool,
}

impl ConfigGuard {
    pub fn new(allow_form: bool) -> Self {
        Self { allow_form }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.allow_form_route())
    }
}

impl RouteGuard for ConfigGuard {
    fn can_activate(&self, view: View) -> bool {
        match view {
            View::Welcome => true,
            View::CustomerForm => self.allow_form,
        }
    }
}
