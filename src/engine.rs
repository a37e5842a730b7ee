//! Session engine: owns the user's text and selection state and keeps every
//! derived output current.
//!
//! Each public mutation recomputes synchronously before returning, then
//! notifies registered observers. There is no background work; callers that
//! want to debounce keystrokes do so before calling [`TransformEngine::set_input`].

use crate::error::EngineError;
use crate::fancy_text::{
    self, DEFAULT_FALLBACK, FontStyle, InputSource, MarkId, MarkSelection, TransformVariant,
    compose, strip_diacritics,
};
use fancy_text_config::Config;
use serde::Serialize;
use std::sync::Arc;

/// One labelled special output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedOutput {
    pub variant: TransformVariant,
    pub label: &'static str,
    pub value: String,
}

/// Coarse session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No input; every output is empty.
    Empty,
    /// Input present and outputs computed.
    HasInput,
}

/// Notification sent to observers after a recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Input changed; carries the new special outputs and stylized output.
    InputChanged {
        outputs: Vec<NamedOutput>,
        stylized: String,
    },
    /// Font style or mark selection changed.
    StylizedChanged { stylized: String },
    /// Everything was reset.
    Cleared,
}

/// Receives [`EngineEvent`]s from a [`TransformEngine`].
pub trait EngineObserver: Send + Sync {
    fn on_event(&self, event: &EngineEvent);
}

/// Handle returned by [`TransformEngine::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The text-transformation session.
pub struct TransformEngine {
    input: String,
    sanitized: String,
    variants: Vec<TransformVariant>,
    fallback: char,
    outputs: Vec<NamedOutput>,
    font_style: FontStyle,
    marks: MarkSelection,
    stylized: String,
    observers: Vec<(ObserverId, Arc<dyn EngineObserver>)>,
    next_observer_id: u64,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransformEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformEngine")
            .field("input", &self.input)
            .field("variants", &self.variants)
            .field("font_style", &self.font_style)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl TransformEngine {
    /// Engine rendering the default catalog.
    pub fn new() -> Self {
        Self::with_variants(TransformVariant::default_catalog().to_vec(), DEFAULT_FALLBACK)
    }

    /// Engine rendering `variants` in the given order.
    pub fn with_variants(variants: Vec<TransformVariant>, fallback: char) -> Self {
        Self {
            input: String::new(),
            sanitized: String::new(),
            variants,
            fallback,
            outputs: Vec::new(),
            font_style: FontStyle::default(),
            marks: MarkSelection::new(),
            stylized: String::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Build an engine from config.
    ///
    /// Unknown variant keys are logged and skipped. If nothing valid remains
    /// the default catalog is used.
    pub fn from_config(config: &Config) -> Self {
        let keys = config.effective_variants();
        log::info!("Building transform engine from {} config variants", keys.len());

        let mut variants = Vec::with_capacity(keys.len());
        for key in &keys {
            match TransformVariant::from_key(key) {
                Ok(variant) if variants.contains(&variant) => {
                    log::warn!("Duplicate variant '{}' in config ignored", key);
                }
                Ok(variant) => variants.push(variant),
                Err(e) => log::warn!("Skipping config variant: {}", e),
            }
        }

        if variants.is_empty() {
            log::warn!("No valid variants configured, using the default catalog");
            variants = TransformVariant::default_catalog().to_vec();
        }

        log::info!("Transform engine initialized with {} variants", variants.len());
        Self::with_variants(variants, config.fallback_char)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The diacritic-stripped input.
    pub fn sanitized_input(&self) -> &str {
        &self.sanitized
    }

    pub fn variants(&self) -> &[TransformVariant] {
        &self.variants
    }

    pub fn fallback(&self) -> char {
        self.fallback
    }

    /// Special outputs in display order; empty while there is no input.
    pub fn special_outputs(&self) -> &[NamedOutput] {
        &self.outputs
    }

    pub fn stylized_output(&self) -> &str {
        &self.stylized
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn marks(&self) -> &MarkSelection {
        &self.marks
    }

    pub fn state(&self) -> SessionState {
        if self.input.is_empty() {
            SessionState::Empty
        } else {
            SessionState::HasInput
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Replace the input and recompute every output.
    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.sanitized = strip_diacritics(text);
        log::debug!(
            "Input changed ({} bytes, {} after sanitizing)",
            self.input.len(),
            self.sanitized.len()
        );

        self.recompute_special_outputs();
        self.recompute_stylized();

        if !self.observers.is_empty() {
            self.notify(&EngineEvent::InputChanged {
                outputs: self.outputs.clone(),
                stylized: self.stylized.clone(),
            });
        }
    }

    /// Replace the font style toggles and recompute the stylized output.
    pub fn set_font_style(&mut self, bold: bool, italic: bool, serif: bool) {
        self.font_style = FontStyle::new(bold, italic, serif);
        log::debug!("Font style resolved to {}", self.font_style.variant());
        self.stylized_changed();
    }

    /// Flip a combining mark; returns its new state.
    pub fn toggle_mark(&mut self, id: MarkId) -> bool {
        let active = self.marks.toggle(id);
        log::debug!(
            "Mark '{}' {}",
            id.mark().name,
            if active { "enabled" } else { "disabled" }
        );
        self.stylized_changed();
        active
    }

    /// Set a combining mark on or off.
    pub fn set_mark_active(&mut self, id: MarkId, active: bool) {
        if self.marks.is_active(id) == active {
            return;
        }
        self.marks.set_active(id, active);
        self.stylized_changed();
    }

    /// Toggle a mark by catalog name.
    pub fn toggle_mark_by_name(&mut self, name: &str) -> Result<bool, EngineError> {
        let id = MarkId::from_name(name)?;
        Ok(self.toggle_mark(id))
    }

    /// Reset font style and marks, keeping the input.
    pub fn clear_options(&mut self) {
        self.font_style.clear();
        self.marks.clear();
        self.stylized_changed();
    }

    /// Reset input, outputs, font style and marks together.
    pub fn clear_all(&mut self) {
        self.input.clear();
        self.sanitized.clear();
        self.outputs.clear();
        self.stylized.clear();
        self.font_style.clear();
        self.marks.clear();
        log::debug!("Session cleared");
        self.notify(&EngineEvent::Cleared);
    }

    // ========================================================================
    // Observer Management Methods
    // ========================================================================

    pub fn add_observer(&mut self, observer: Arc<dyn EngineObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if the id was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    // ========================================================================
    // Recomputation
    // ========================================================================

    fn recompute_special_outputs(&mut self) {
        if self.input.is_empty() {
            self.outputs.clear();
            return;
        }

        let (input, sanitized, fallback) = (&self.input, &self.sanitized, self.fallback);
        let render = |variant: TransformVariant| {
            fancy_text::transform(variant, input, sanitized, fallback)
        };

        // Same shape as last time: update values in place.
        if self.outputs.len() == self.variants.len() {
            for (output, &variant) in self.outputs.iter_mut().zip(&self.variants) {
                output.value = render(variant);
            }
        } else {
            self.outputs = self
                .variants
                .iter()
                .map(|&variant| NamedOutput {
                    variant,
                    label: variant.display_name(),
                    value: render(variant),
                })
                .collect();
        }

        log::trace!(
            "Recomputed {} special outputs ({} from raw input)",
            self.outputs.len(),
            self.variants
                .iter()
                .filter(|v| v.input_source() == InputSource::Raw)
                .count()
        );
    }

    fn recompute_stylized(&mut self) {
        if self.input.is_empty() {
            self.stylized.clear();
            return;
        }

        let base = fancy_text::font_style::apply(
            self.font_style.variant(),
            &self.input,
            &self.sanitized,
            self.fallback,
        );
        self.stylized = compose(&base, &self.marks.active_scalars());
    }

    fn stylized_changed(&mut self) {
        self.recompute_stylized();
        if !self.observers.is_empty() {
            self.notify(&EngineEvent::StylizedChanged {
                stylized: self.stylized.clone(),
            });
        }
    }

    fn notify(&self, event: &EngineEvent) {
        for (_, observer) in &self.observers {
            observer.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<EngineEvent>>,
    }

    impl EngineObserver for Recorder {
        fn on_event(&self, event: &EngineEvent) {
            self.events.lock().push(event.clone());
        }
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = TransformEngine::new();
        assert_eq!(engine.state(), SessionState::Empty);
        assert!(engine.special_outputs().is_empty());
        assert_eq!(engine.stylized_output(), "");
        assert_eq!(engine.variants().len(), 11);
    }

    #[test]
    fn test_outputs_updated_in_place_keep_labels() {
        let mut engine = TransformEngine::new();
        engine.set_input("abc");
        let labels: Vec<_> = engine.special_outputs().iter().map(|o| o.label).collect();
        engine.set_input("xyz");
        let relabels: Vec<_> = engine.special_outputs().iter().map(|o| o.label).collect();
        assert_eq!(labels, relabels);
        assert_eq!(engine.special_outputs()[1].value, "𝚡𝚢𝚣");
    }

    #[test]
    fn test_emptying_input_returns_to_empty_state() {
        let mut engine = TransformEngine::new();
        engine.set_input("hi");
        assert_eq!(engine.state(), SessionState::HasInput);
        engine.set_input("");
        assert_eq!(engine.state(), SessionState::Empty);
        assert!(engine.special_outputs().is_empty());
        assert_eq!(engine.stylized_output(), "");
    }

    #[test]
    fn test_style_change_with_empty_input_stays_empty() {
        let mut engine = TransformEngine::new();
        engine.set_font_style(true, false, true);
        assert_eq!(engine.stylized_output(), "");
    }

    #[test]
    fn test_set_mark_active_is_idempotent() {
        let mut engine = TransformEngine::new();
        let id = MarkId::from_name("underline").expect("mark should exist");
        engine.set_mark_active(id, true);
        engine.set_mark_active(id, true);
        assert!(engine.marks().is_active(id));
        engine.set_mark_active(id, false);
        assert!(!engine.marks().any_active());
    }

    #[test]
    fn test_toggle_mark_by_unknown_name() {
        let mut engine = TransformEngine::new();
        assert_eq!(
            engine.toggle_mark_by_name("glitter"),
            Err(EngineError::UnknownMark("glitter".to_string()))
        );
        assert!(!engine.marks().any_active());
    }

    #[test]
    fn test_observers_receive_events() {
        let mut engine = TransformEngine::new();
        let recorder = Arc::new(Recorder::default());
        let id = engine.add_observer(recorder.clone());

        engine.set_input("ok");
        engine.set_font_style(true, false, false);
        engine.clear_all();

        {
            let events = recorder.events.lock();
            assert_eq!(events.len(), 3);
            assert!(matches!(&events[0], EngineEvent::InputChanged { outputs, .. } if outputs.len() == 11));
            assert_eq!(
                events[1],
                EngineEvent::StylizedChanged {
                    stylized: "𝗼𝗸".to_string()
                }
            );
            assert_eq!(events[2], EngineEvent::Cleared);
        }

        assert!(engine.remove_observer(id));
        assert!(!engine.remove_observer(id));
        engine.set_input("quiet");
        assert_eq!(recorder.events.lock().len(), 3);
    }

    #[test]
    fn test_from_config_skips_unknown_and_duplicate_variants() {
        let config = Config::new().with_variants(["circles", "sparkle", "Flip 180", "circles"]);
        let engine = TransformEngine::from_config(&config);
        assert_eq!(
            engine.variants(),
            &[TransformVariant::Circles, TransformVariant::Flip180]
        );
    }

    #[test]
    fn test_from_config_all_invalid_uses_default_catalog() {
        let config = Config::new().with_variants(["nope"]);
        let engine = TransformEngine::from_config(&config);
        assert_eq!(engine.variants(), TransformVariant::default_catalog());
    }
}
