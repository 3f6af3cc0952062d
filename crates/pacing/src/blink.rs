//! Two-state toggle for blinking map markers.

/// Whether the markers are currently on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerState {
    Shown,
    #[default]
    Hidden,
}

/// What the sink should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAction {
    /// Add every configured marker.
    Show,
    /// Remove all markers.
    Clear,
}

/// Marker blink state machine.
///
/// Starts [`MarkerState::Hidden`], so the first tick shows the markers.
/// Every tick flips the state; there is no other transition.
#[derive(Debug, Clone, Default)]
pub struct MarkerBlink {
    state: MarkerState,
}

impl MarkerBlink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MarkerState {
        self.state
    }

    /// Advance one tick and return the action for the new state.
    pub fn tick(&mut self) -> MarkerAction {
        let (next, action) = match self.state {
            MarkerState::Hidden => (MarkerState::Shown, MarkerAction::Show),
            MarkerState::Shown => (MarkerState::Hidden, MarkerAction::Clear),
        };
        self.state = next;
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_shows() {
        let mut blink = MarkerBlink::new();
        assert_eq!(blink.state(), MarkerState::Hidden);
        assert_eq!(blink.tick(), MarkerAction::Show);
        assert_eq!(blink.state(), MarkerState::Shown);
    }

    #[test]
    fn test_alternates() {
        let mut blink = MarkerBlink::new();
        let actions: Vec<_> = (0..5).map(|_| blink.tick()).collect();
        assert_eq!(
            actions,
            vec![
                MarkerAction::Show,
                MarkerAction::Clear,
                MarkerAction::Show,
                MarkerAction::Clear,
                MarkerAction::Show,
            ]
        );
    }
}
