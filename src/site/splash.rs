//! Loading splash shown before the page.

use std::time::{Duration, Instant};

/// Fade-out time once loading completes.
pub const SPLASH_FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Visible,
    Fading,
    Hidden,
}

#[derive(Debug, Clone, Copy)]
pub struct Splash {
    started: Instant,
    loading: Duration,
    enabled: bool,
}

impl Splash {
    pub fn new(started: Instant, loading: Duration, enabled: bool) -> Self {
        Self {
            started,
            loading,
            enabled,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn phase(&self, now: Instant) -> SplashPhase {
        if !self.enabled {
            return SplashPhase::Hidden;
        }
        let elapsed = self.elapsed(now);
        if elapsed < self.loading {
            SplashPhase::Visible
        } else if elapsed < self.loading + SPLASH_FADE {
            SplashPhase::Fading
        } else {
            SplashPhase::Hidden
        }
    }

    /// Time since launch at which the typewriter starts.
    ///
    /// Without the splash only the fade gap remains.
    pub fn typewriter_start_delay(&self) -> Duration {
        if self.enabled {
            self.loading + SPLASH_FADE
        } else {
            SPLASH_FADE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_loading_then_fade() {
        let start = Instant::now();
        let splash = Splash::new(start, Duration::from_millis(2000), true);
        assert_eq!(splash.phase(start), SplashPhase::Visible);
        assert_eq!(
            splash.phase(start + Duration::from_millis(2000)),
            SplashPhase::Fading
        );
        assert_eq!(
            splash.phase(start + Duration::from_millis(2500)),
            SplashPhase::Hidden
        );
    }

    #[test]
    fn typewriter_waits_for_loading_plus_fade() {
        let splash = Splash::new(Instant::now(), Duration::from_millis(2000), true);
        assert_eq!(splash.typewriter_start_delay(), Duration::from_millis(2500));
    }

    #[test]
    fn disabled_splash_is_hidden_and_shortens_start() {
        let start = Instant::now();
        let splash = Splash::new(start, Duration::from_millis(2000), false);
        assert_eq!(splash.phase(start), SplashPhase::Hidden);
        assert_eq!(splash.typewriter_start_delay(), SPLASH_FADE);
    }
}
