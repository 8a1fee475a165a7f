//! The state behind an interactive palette: the current base color text, the
//! selected filter and the schemes derived from them. Hosts feed events in and
//! receive swatches through [`Present`].

use std::time::Duration;

use bitflags::bitflags;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    harmony::{generate, SchemeSet},
    palette::{css_variables, hex_list, select, Filter, Swatch},
};

/// Receives the swatches every time a session renders.
pub trait Present {
    /// Show `swatches` (base first) selected with `filter`.
    fn present(&mut self, filter: Filter, swatches: &[Swatch]);
}

impl<F: FnMut(Filter, &[Swatch])> Present for F {
    fn present(&mut self, filter: Filter, swatches: &[Swatch]) {
        self(filter, swatches)
    }
}

/// Settings for a [`RenderSession`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Used whenever the base color text is blank.
    pub default_base: String,
    /// The filter selected when the session starts.
    pub filter: Filter,
    /// Timing of the auto-advancing demo.
    pub demo: DemoConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_base: "#5eb0e5".to_string(),
            filter: Filter::Split,
            demo: DemoConfig::default(),
        }
    }
}

/// Timing of the auto-advancing demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Delay before the first advance.
    pub start_delay_ms: u64,
    /// Delay between advances.
    pub interval_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 600,
            interval_ms: 2000,
        }
    }
}

impl DemoConfig {
    /// Delay before the first advance.
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    /// Delay between advances.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// A uniformly random `#rrggbb` color.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

/// Everything needed to render a palette. Changing the base color text
/// regenerates the whole [`SchemeSet`]; the filter only changes which of its
/// colors are shown.
#[derive(Clone, Debug)]
pub struct RenderSession {
    config: SessionConfig,
    base_text: String,
    filter: Filter,
    schemes: SchemeSet,
}

impl RenderSession {
    /// Start a session on the configured default base color and filter.
    pub fn new(config: SessionConfig) -> Self {
        let base_text = config.default_base.clone();
        let filter = config.filter;
        let schemes = generate(&base_text);
        Self {
            config,
            base_text,
            filter,
            schemes,
        }
    }

    /// The configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The base color text as last set.
    pub fn base_text(&self) -> &str {
        &self.base_text
    }

    /// The selected filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The schemes derived from the current base color.
    pub fn schemes(&self) -> &SchemeSet {
        &self.schemes
    }

    /// Replace the base color text.
    pub fn set_base_text(&mut self, text: impl Into<String>) {
        self.base_text = text.into();
        self.regenerate();
    }

    /// Select another filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Replace the base color with a random one and return it.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let hex = random_hex(rng);
        self.set_base_text(hex.clone());
        hex
    }

    /// The swatches for the current base color and filter.
    pub fn swatches(&self) -> Vec<Swatch> {
        select(&self.schemes, self.filter)
    }

    /// Hand the swatches for the current base color and filter to
    /// `presenter`.
    pub fn render(&self, presenter: &mut impl Present) {
        presenter.present(self.filter, &self.swatches());
    }

    /// The current swatches as a block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        css_variables(&self.swatches())
    }

    /// The current swatches as a comma separated list of hex values.
    pub fn hex_list(&self) -> String {
        hex_list(&self.swatches())
    }

    fn regenerate(&mut self) {
        let text = self.base_text.trim();
        let text = if text.is_empty() {
            self.config.default_base.as_str()
        } else {
            text
        };
        self.schemes = generate(text);
    }
}

bitflags! {
    /// User interactions that stop the demo.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Interaction : u8 {
        /// A click anywhere.
        const CLICK = 1 << 0;
        /// A key press.
        const KEY_DOWN = 1 << 1;
        /// A touch starting.
        const TOUCH_START = 1 << 2;
        /// A pointer button press.
        const POINTER_DOWN = 1 << 3;
    }
}

/// Cycles the session through the filter tabs until the user interacts. Once
/// stopped it never resumes.
#[derive(Clone, Debug)]
pub struct Demo {
    config: DemoConfig,
    tabs: &'static [Filter],
    next: usize,
    active: bool,
    stop_on: Interaction,
}

impl Demo {
    /// A demo over [`Filter::TABS`], starting with the second tab.
    pub fn new(config: DemoConfig) -> Self {
        Self::with_tabs(config, &Filter::TABS)
    }

    /// A demo over the given tabs. With fewer than two tabs there is nothing
    /// to advance to and the demo starts stopped.
    pub fn with_tabs(config: DemoConfig, tabs: &'static [Filter]) -> Self {
        Self {
            config,
            tabs,
            next: 1,
            active: tabs.len() > 1,
            stop_on: Interaction::all(),
        }
    }

    /// Only stop on the given interactions. Every [`Interaction`] stops the
    /// demo by default; an empty set keeps it running until [`Demo::stop`].
    pub fn stop_on(mut self, interactions: Interaction) -> Self {
        self.stop_on = interactions;
        self
    }

    /// The interactions that stop the demo.
    pub fn stops_on(&self) -> Interaction {
        self.stop_on
    }

    /// The timing the host should drive [`Demo::tick`] with.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Whether further ticks will advance.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance to the next tab and render it. Returns the selected filter, or
    /// `None` once the demo has stopped.
    pub fn tick(
        &mut self,
        session: &mut RenderSession,
        presenter: &mut impl Present,
    ) -> Option<Filter> {
        if !self.active {
            return None;
        }

        let filter = self.tabs[self.next % self.tabs.len()];
        self.next += 1;

        session.set_filter(filter);
        session.render(presenter);
        Some(filter)
    }

    /// Feed a user interaction to the demo. Trusted interactions stop it for
    /// good, synthetic ones are ignored. Returns whether this call stopped it.
    pub fn interrupt(&mut self, interaction: Interaction, trusted: bool) -> bool {
        if !trusted || !self.active || !self.stop_on.intersects(interaction) {
            return false;
        }

        tracing::debug!(?interaction, "demo stopped");
        self.stop();
        true
    }

    /// Stop the demo for good.
    pub fn stop(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Category;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Filter, Vec<Swatch>)>,
    }

    impl Present for Recorder {
        fn present(&mut self, filter: Filter, swatches: &[Swatch]) {
            self.frames.push((filter, swatches.to_vec()));
        }
    }

    #[test]
    fn starts_from_config() {
        let session = RenderSession::new(SessionConfig::default());
        assert_eq!(session.base_text(), "#5eb0e5");
        assert_eq!(session.filter(), Filter::Split);
        assert_eq!(session.schemes().base.hex, "#5EB0E5");
        assert_eq!(session.swatches().len(), 3);
    }

    #[test]
    fn render_presents_current_selection() {
        let mut session = RenderSession::new(SessionConfig::default());
        session.set_base_text("#FF0000");
        session.set_filter(Filter::Triadic);

        let mut recorder = Recorder::default();
        session.render(&mut recorder);

        assert_eq!(recorder.frames.len(), 1);
        let (filter, swatches) = &recorder.frames[0];
        assert_eq!(*filter, Filter::Triadic);
        let hexes = swatches.iter().map(|s| s.hex.as_str()).collect::<Vec<_>>();
        assert_eq!(hexes, vec!["#FF0000", "#0000FF", "#00FF00"]);
        assert_eq!(session.hex_list(), "#FF0000, #0000FF, #00FF00");
    }

    #[test]
    fn closures_present() {
        let session = RenderSession::new(SessionConfig::default());
        let mut count = 0;
        session.render(&mut |_: Filter, swatches: &[Swatch]| count += swatches.len());
        assert_eq!(count, 3);
    }

    #[test]
    fn filter_changes_keep_the_schemes() {
        let mut session = RenderSession::new(SessionConfig::default());
        session.set_base_text("#FF0000");
        let before = session.schemes().clone();

        session.set_filter(Filter::Monochrome);
        assert_eq!(session.schemes(), &before);

        let shared = &session;
        let mut recorder = Recorder::default();
        shared.render(&mut recorder);
        shared.render(&mut recorder);
        assert_eq!(recorder.frames[0], recorder.frames[1]);
        assert_eq!(recorder.frames[0].0, Filter::Monochrome);
        assert_eq!(recorder.frames[0].1.len(), 5);
    }

    #[test]
    fn blank_base_uses_default() {
        let mut session = RenderSession::new(SessionConfig::default());
        session.set_base_text("   ");
        assert_eq!(session.schemes().base.hex, "#5EB0E5");
        session.set_base_text("nonsense");
        assert_eq!(session.schemes().base.hex, "#1AA4FF");
    }

    #[test]
    fn randomize_is_uniform_hex() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = RenderSession::new(SessionConfig::default());
        for _ in 0..32 {
            let hex = session.randomize(&mut rng);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert_eq!(session.base_text(), hex);
            assert_eq!(session.schemes().base.hex, hex.to_uppercase());
        }
    }

    #[test]
    fn demo_cycles_tabs_from_the_second() {
        let mut session = RenderSession::new(SessionConfig::default());
        let mut recorder = Recorder::default();
        let mut demo = Demo::new(DemoConfig::default());

        let filters = (0..8)
            .map_while(|_| demo.tick(&mut session, &mut recorder))
            .collect::<Vec<_>>();
        assert_eq!(
            filters,
            vec![
                Filter::Complementary,
                Filter::Analogous,
                Filter::Triadic,
                Filter::Quadratic,
                Filter::Monochrome,
                Filter::All,
                Filter::Split,
                Filter::Complementary,
            ]
        );
        assert_eq!(recorder.frames.len(), 8);
        assert_eq!(session.filter(), Filter::Complementary);
        assert_eq!(recorder.frames[5].1[1].category, Category::Complementary);
    }

    #[test]
    fn demo_stops_once_on_trusted_interaction() {
        let mut session = RenderSession::new(SessionConfig::default());
        let mut recorder = Recorder::default();
        let mut demo = Demo::new(DemoConfig::default());

        assert!(demo.tick(&mut session, &mut recorder).is_some());
        assert!(!demo.interrupt(Interaction::KEY_DOWN, false));
        assert!(demo.is_active());

        assert!(demo.interrupt(Interaction::POINTER_DOWN, true));
        assert!(!demo.is_active());
        assert!(!demo.interrupt(Interaction::CLICK, true));

        assert_eq!(demo.tick(&mut session, &mut recorder), None);
        assert_eq!(recorder.frames.len(), 1);
    }

    #[test]
    fn demo_stops_only_on_selected_interactions() {
        let mut session = RenderSession::new(SessionConfig::default());
        let mut recorder = Recorder::default();
        let mut demo = Demo::new(DemoConfig::default()).stop_on(Interaction::KEY_DOWN);
        assert_eq!(demo.stops_on(), Interaction::KEY_DOWN);

        assert!(!demo.interrupt(Interaction::CLICK | Interaction::POINTER_DOWN, true));
        assert!(demo.is_active());
        assert!(demo.tick(&mut session, &mut recorder).is_some());

        assert!(demo.interrupt(Interaction::KEY_DOWN, true));
        assert_eq!(demo.tick(&mut session, &mut recorder), None);

        let mut manual = Demo::new(DemoConfig::default()).stop_on(Interaction::empty());
        assert!(!manual.interrupt(Interaction::all(), true));
        manual.stop();
        assert!(!manual.is_active());
    }

    #[test]
    fn single_tab_demo_never_runs() {
        static ONLY: [Filter; 1] = [Filter::All];
        let mut session = RenderSession::new(SessionConfig::default());
        let mut demo = Demo::with_tabs(DemoConfig::default(), &ONLY);
        assert!(!demo.is_active());
        assert_eq!(demo.tick(&mut session, &mut Recorder::default()), None);
    }

    #[test]
    fn config_from_json() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "filter": "all", "demo": { "interval_ms": 500 } }"#)
                .unwrap();
        assert_eq!(config.default_base, "#5eb0e5");
        assert_eq!(config.filter, Filter::All);
        assert_eq!(config.demo.interval(), Duration::from_millis(500));
        assert_eq!(config.demo.start_delay(), Duration::from_millis(600));
    }
}
