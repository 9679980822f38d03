/// Click-suppression window for the trailing click a drag produces.
///
/// Expressed as an armed flag plus a disarm deadline evaluated against
/// event timestamps instead of a real timer: there is nothing to leak past
/// page teardown, and starting a new gesture is the timer reset. Clicks
/// start armed (first-ever tap must navigate); a gesture schedules a
/// disarm at `press + timeout`, and a tap-classified release re-arms
/// immediately.
#[derive(Debug)]
pub struct ClickCooldown {
    armed: bool,
    disarm_at_ms: Option<f64>,
}

impl ClickCooldown {
    pub fn new() -> Self {
        Self {
            armed: true,
            disarm_at_ms: None,
        }
    }

    /// Gesture start: settle any previous deadline, then schedule a fresh
    /// disarm. Rapid repeated drags therefore never stack windows.
    pub fn begin_gesture(&mut self, now_ms: f64, timeout_ms: f64) {
        self.settle(now_ms);
        self.disarm_at_ms = Some(now_ms + timeout_ms);
    }

    /// Tap-classified release: clicks fire again right away.
    pub fn rearm(&mut self) {
        self.armed = true;
        self.disarm_at_ms = None;
    }

    /// Whether a click at `now_ms` should fire navigation.
    pub fn is_armed(&mut self, now_ms: f64) -> bool {
        self.settle(now_ms);
        self.armed
    }

    fn settle(&mut self, now_ms: f64) {
        if let Some(at) = self.disarm_at_ms {
            if now_ms >= at {
                self.armed = false;
                self.disarm_at_ms = None;
            }
        }
    }
}

impl Default for ClickCooldown {
    fn default() -> Self {
        Self::new()
    }
}
