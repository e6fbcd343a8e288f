//! Decorative floating bubbles beside the hero.
//!
//! Each bubble has a fixed slot computed from the hero container's bounds, so
//! a terminal resize just recomputes the slots. The float is a slow vertical
//! bob driven by the app clock; it pauses while the hero is (nearly) off
//! screen and resumes when it returns. Clicking a bubble plays a short press
//! squeeze plus an expanding ring that fades out.

use ratatui::layout::Rect;

/// Visible fraction of the hero below which the float pauses.
pub const PAUSE_FRACTION: f32 = 0.1;
/// How long a clicked bubble renders compressed.
pub const PRESS_MS: u64 = 100;
/// How long the expanding ring lives.
pub const PULSE_MS: u64 = 600;
/// Full bob cycle duration.
const BOB_CYCLE_MS: u64 = 1600;

/// One floating bubble.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub label: &'static str,
    /// Column offset relative to the hero container. May stick out past the
    /// container edge; rendering clamps to the screen.
    pub x: i32,
    /// Row offset relative to the hero container.
    pub y: i32,
    pressed_at: Option<u64>,
    pulse_at: Option<u64>,
}

/// Interactive state for the bubble overlay.
#[derive(Debug, Clone)]
pub struct BubblesWidget {
    pub bubbles: Vec<Bubble>,
    running: bool,
    /// Accumulated float time. Only advances while running, so pausing
    /// freezes every bubble in place.
    phase_ms: u64,
}

/// The fixed slot for bubble `index` in a `width` x `height` container.
fn slot(index: usize, width: u16, height: u16) -> (i32, i32) {
    let w = i32::from(width);
    let h = i32::from(height);
    match index {
        0 => (w - 12, 4),
        1 => (w + 2, h / 2 + 1),
        _ => (w + 2, h - 6),
    }
}

impl BubblesWidget {
    /// Activate with the given labels inside the hero bounds. Nothing to do
    /// without labels.
    pub fn mount(labels: &[&'static str], container: Rect) -> Option<Self> {
        if labels.is_empty() {
            return None;
        }
        let bubbles = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let (x, y) = slot(i, container.width, container.height);
                Bubble {
                    label,
                    x,
                    y,
                    pressed_at: None,
                    pulse_at: None,
                }
            })
            .collect();
        Some(Self {
            bubbles,
            running: true,
            phase_ms: 0,
        })
    }

    /// Recompute every slot from new container bounds.
    pub fn reposition(&mut self, container: Rect) {
        for (i, bubble) in self.bubbles.iter_mut().enumerate() {
            let (x, y) = slot(i, container.width, container.height);
            bubble.x = x;
            bubble.y = y;
        }
    }

    /// Feed the hero's visible fraction. Returns `true` when the running
    /// state flipped.
    pub fn set_visible_fraction(&mut self, fraction: f32) -> bool {
        let should_run = fraction >= PAUSE_FRACTION;
        if should_run != self.running {
            self.running = should_run;
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the float clock by one tick. Returns `true` when a redraw is
    /// due.
    pub fn tick(&mut self, tick_ms: u64) -> bool {
        if self.running {
            self.phase_ms = self.phase_ms.wrapping_add(tick_ms);
            return true;
        }
        false
    }

    /// Vertical bob offset for bubble `index`: a slow -1/0/+1 wobble,
    /// phase-shifted per bubble.
    pub fn bob_offset(&self, index: usize) -> i32 {
        let quarter = BOB_CYCLE_MS / 4;
        let step = (self.phase_ms / quarter + index as u64) % 4;
        match step {
            1 => -1,
            3 => 1,
            _ => 0,
        }
    }

    /// Register a click on bubble `index`.
    pub fn click(&mut self, index: usize, now_ms: u64) {
        if let Some(bubble) = self.bubbles.get_mut(index) {
            bubble.pressed_at = Some(now_ms);
            bubble.pulse_at = Some(now_ms);
        }
    }

    /// Bubble renders compressed while the press squeeze lasts.
    pub fn pressed(&self, index: usize, now_ms: u64) -> bool {
        self.bubbles
            .get(index)
            .and_then(|b| b.pressed_at)
            .is_some_and(|at| now_ms.saturating_sub(at) < PRESS_MS)
    }

    /// Ring expansion for bubble `index`, 0.0 to 1.0, or `None` once faded.
    pub fn pulse_progress(&self, index: usize, now_ms: u64) -> Option<f32> {
        let at = self.bubbles.get(index).and_then(|b| b.pulse_at)?;
        let elapsed = now_ms.saturating_sub(at);
        if elapsed >= PULSE_MS {
            return None;
        }
        Some(elapsed as f32 / PULSE_MS as f32)
    }

    /// Whether any click effect is still playing.
    pub fn effects_active(&self, now_ms: u64) -> bool {
        (0..self.bubbles.len())
            .any(|i| self.pressed(i, now_ms) || self.pulse_progress(i, now_ms).is_some())
    }
}
