//! Startup activation planning for the page widgets.
//!
//! Every widget goes through the same gate: decide a mode from the section
//! presence and the capability snapshot, then activate at most once per run.
//! The decision is pure so the whole table is unit-testable; installing the
//! plan (registering watches, queueing deferred work) happens in the app.

use crate::capability::Capabilities;
use crate::page::{Page, SectionKind};

/// Rows of look-ahead before the FAQ section scrolls into view.
pub const FAQ_LOOKAHEAD_ROWS: u16 = 25;
/// Rows of look-ahead for the chart on narrow viewports.
pub const CHART_LOOKAHEAD_ROWS: u16 = 19;
/// Event-loop tick at which deferred activations run.
pub const DEFER_TICKS: u64 = 2;

/// The activatable behaviors of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Chart,
    Faq,
    Bubbles,
    Newsletter,
}

impl Feature {
    /// The page section this feature attaches to.
    pub fn section(&self) -> SectionKind {
        match self {
            Feature::Chart => SectionKind::Chart,
            Feature::Faq => SectionKind::Faq,
            Feature::Bubbles => SectionKind::Hero,
            Feature::Newsletter => SectionKind::Newsletter,
        }
    }
}

/// When a feature activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationMode {
    /// During startup, before the first frame.
    Immediate,
    /// When its section comes within `margin` rows of the viewport.
    Lazy { margin: u16 },
    /// Shortly after startup, once the first frames have been served.
    Deferred,
    /// Never, for this run.
    Skip,
}

/// The activation decision for every feature, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPlan {
    pub chart: ActivationMode,
    pub faq: ActivationMode,
    pub bubbles: ActivationMode,
    pub newsletter: ActivationMode,
}

impl LoadPlan {
    /// Decide every feature's mode from the page and the snapshot.
    pub fn decide(page: &Page, caps: Capabilities) -> Self {
        let chart = if !page.has(SectionKind::Chart) {
            ActivationMode::Skip
        } else if caps.narrow_viewport {
            ActivationMode::Lazy {
                margin: CHART_LOOKAHEAD_ROWS,
            }
        } else {
            ActivationMode::Immediate
        };

        let faq = if page.has(SectionKind::Faq) {
            ActivationMode::Lazy {
                margin: FAQ_LOOKAHEAD_ROWS,
            }
        } else {
            ActivationMode::Skip
        };

        let bubbles = if page.has(SectionKind::Hero) && caps.is_desktop() {
            ActivationMode::Deferred
        } else {
            ActivationMode::Skip
        };

        let newsletter = if page.has(SectionKind::Newsletter) {
            ActivationMode::Immediate
        } else {
            ActivationMode::Skip
        };

        Self {
            chart,
            faq,
            bubbles,
            newsletter,
        }
    }

    pub fn mode(&self, feature: Feature) -> ActivationMode {
        match feature {
            Feature::Chart => self.chart,
            Feature::Faq => self.faq,
            Feature::Bubbles => self.bubbles,
            Feature::Newsletter => self.newsletter,
        }
    }
}
