//! Visitor chart behavior: hover engagement and the staged entrance animation.
//!
//! The animation is a fixed timeline keyed off the app's millisecond clock.
//! It (re)starts whenever the chart area comes into view at half height or
//! more after having been out of view, so scrolling away and back replays it.
//! All progress math is pure in `now_ms`, which keeps it testable without a
//! terminal.

use crate::page::ChartData;

/// Duration of the axis line draw.
pub const LINE_DRAW_MS: u64 = 2000;
/// Delay before the area fill starts fading in.
pub const AREA_FADE_DELAY_MS: u64 = 500;
/// Duration of the area fade.
pub const AREA_FADE_MS: u64 = 1500;
/// Delay before the first point grows in.
pub const POINT_GROW_BASE_MS: u64 = 1800;
/// Extra delay per point index.
pub const POINT_GROW_STAGGER_MS: u64 = 200;
/// Duration of a single point's grow.
pub const POINT_GROW_MS: u64 = 500;
/// Fraction of the chart that must be visible before the animation (re)starts.
pub const REVEAL_FRACTION: f32 = 0.5;

fn stage_progress(now_ms: u64, start: Option<u64>, delay: u64, duration: u64) -> f32 {
    let Some(started) = start else {
        return 0.0;
    };
    let elapsed = now_ms.saturating_sub(started);
    if elapsed <= delay {
        return 0.0;
    }
    if duration == 0 {
        return 1.0;
    }
    ((elapsed - delay) as f32 / duration as f32).min(1.0)
}

/// Interactive state for the visitor chart.
#[derive(Debug, Clone)]
pub struct ChartWidget {
    /// Cursor is somewhere inside the chart area.
    pub engaged: bool,
    point_count: usize,
    in_view: bool,
    /// Millisecond timestamp of the animation start. `None` until the chart
    /// has been revealed for the first time after activation.
    anim_start: Option<u64>,
}

impl ChartWidget {
    /// Activate on the given data. Nothing to do without data points.
    pub fn mount(data: &ChartData) -> Option<Self> {
        if data.points.is_empty() {
            return None;
        }
        Some(Self {
            engaged: false,
            point_count: data.points.len(),
            in_view: false,
            anim_start: None,
        })
    }

    /// Feed the current visible fraction of the chart area. Returns `true`
    /// when the widget changed state (and a redraw is due).
    pub fn update_view(&mut self, fraction: f32, now_ms: u64) -> bool {
        let revealed = fraction >= REVEAL_FRACTION;
        if revealed && !self.in_view {
            self.in_view = true;
            self.anim_start = Some(now_ms);
            return true;
        }
        if !revealed && self.in_view {
            self.in_view = false;
            return true;
        }
        false
    }

    /// Cursor entered or left the chart area. Returns `true` on change.
    pub fn set_engaged(&mut self, engaged: bool) -> bool {
        if self.engaged != engaged {
            self.engaged = engaged;
            return true;
        }
        false
    }

    /// Progress of the axis line draw, 0.0 to 1.0.
    pub fn line_progress(&self, now_ms: u64) -> f32 {
        stage_progress(now_ms, self.anim_start, 0, LINE_DRAW_MS)
    }

    /// Opacity of the area fill, 0.0 to 1.0.
    pub fn area_alpha(&self, now_ms: u64) -> f32 {
        stage_progress(now_ms, self.anim_start, AREA_FADE_DELAY_MS, AREA_FADE_MS)
    }

    /// Growth of point `index`, 0.0 to 1.0.
    pub fn point_scale(&self, index: usize, now_ms: u64) -> f32 {
        let delay = POINT_GROW_BASE_MS + POINT_GROW_STAGGER_MS * index as u64;
        stage_progress(now_ms, self.anim_start, delay, POINT_GROW_MS)
    }

    /// Total running time of the timeline for this data set.
    pub fn total_ms(&self) -> u64 {
        let last_point = POINT_GROW_BASE_MS
            + POINT_GROW_STAGGER_MS * self.point_count.saturating_sub(1) as u64
            + POINT_GROW_MS;
        last_point
            .max(LINE_DRAW_MS)
            .max(AREA_FADE_DELAY_MS + AREA_FADE_MS)
    }

    /// Whether the timeline is still advancing at `now_ms`.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        match self.anim_start {
            Some(started) => now_ms.saturating_sub(started) < self.total_ms(),
            None => false,
        }
    }
}
