//! Single vs double click disambiguation on site markers.
//!
//! Two clicks on the same site less than [`DOUBLE_CLICK_WINDOW_MS`] apart
//! form a double click. There is no timer: the deadline is checked when
//! the next click arrives.

/// Window for the second click of a double click, in milliseconds.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClickState {
    #[default]
    Idle,
    AwaitingSecondClick { site: String, deadline: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Single,
    Double,
}

#[derive(Debug, Default)]
pub struct ClickTracker {
    state: ClickState,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ClickState {
        &self.state
    }

    /// Register a click on `site` at `now_ms`.
    pub fn click(&mut self, site: &str, now_ms: u64) -> ClickOutcome {
        match &self.state {
            ClickState::AwaitingSecondClick { site: pending, deadline }
                if pending == site && now_ms < *deadline =>
            {
                self.state = ClickState::Idle;
                ClickOutcome::Double
            }
            _ => {
                self.state = ClickState::AwaitingSecondClick {
                    site: site.to_string(),
                    deadline: now_ms.saturating_add(DOUBLE_CLICK_WINDOW_MS),
                };
                ClickOutcome::Single
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = ClickState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_inside_window() {
        let mut clicks = ClickTracker::new();
        assert_eq!(clicks.click("A", 10_000), ClickOutcome::Single);
        assert_eq!(clicks.click("A", 10_999), ClickOutcome::Double);
        assert_eq!(clicks.state(), &ClickState::Idle);
    }

    #[test]
    fn test_clicks_at_window_edge_are_singles() {
        let mut clicks = ClickTracker::new();
        assert_eq!(clicks.click("A", 10_000), ClickOutcome::Single);
        assert_eq!(clicks.click("A", 11_000), ClickOutcome::Single);
        assert_eq!(
            clicks.state(),
            &ClickState::AwaitingSecondClick {
                site: "A".to_string(),
                deadline: 12_000
            }
        );
    }

    #[test]
    fn test_other_site_starts_fresh() {
        let mut clicks = ClickTracker::new();
        clicks.click("A", 0);
        assert_eq!(clicks.click("B", 200), ClickOutcome::Single);
        assert_eq!(clicks.click("B", 400), ClickOutcome::Double);
    }

    #[test]
    fn test_third_click_after_double_is_single() {
        let mut clicks = ClickTracker::new();
        clicks.click("A", 0);
        clicks.click("A", 100);
        assert_eq!(clicks.click("A", 200), ClickOutcome::Single);
    }
}
