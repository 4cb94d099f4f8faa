//! Cosmetic animation timelines
//!
//! A timeline is created for each transition and only ever read by the
//! renderer. A newer transition simply replaces it; nothing is cancelled.

use crate::models::{BlockKind, ContentBlock, Section};
use crate::util::format::parse_simple_percent;
use std::time::{Duration, Instant};

pub const SECTION_FADE: Duration = Duration::from_millis(300);
pub const CARD_STAGGER: Duration = Duration::from_millis(100);
pub const METRIC_STAGGER: Duration = Duration::from_millis(150);
pub const BLOCK_FADE: Duration = Duration::from_millis(400);
pub const CHART_DELAY: Duration = Duration::from_millis(200);
pub const CHART_STAGGER: Duration = Duration::from_millis(100);
pub const CHART_FADE: Duration = Duration::from_millis(500);
pub const COUNT_UP: Duration = Duration::from_millis(1000);
pub const COUNT_UP_STAGGER: Duration = Duration::from_millis(200);

/// How far along an element's entrance is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    Hidden,
    /// Entrance in progress, 0.0 exclusive to 1.0 exclusive
    Entering(f64),
    Shown,
}

impl Visibility {
    fn at(now: Instant, start: Instant, duration: Duration) -> Self {
        let Some(elapsed) = now.checked_duration_since(start) else {
            return Self::Hidden;
        };
        if elapsed >= duration {
            Self::Shown
        } else if elapsed.is_zero() {
            Self::Hidden
        } else {
            Self::Entering(elapsed.as_secs_f64() / duration.as_secs_f64())
        }
    }

    /// Entrance progress from 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        match self {
            Self::Hidden => 0.0,
            Self::Entering(p) => *p,
            Self::Shown => 1.0,
        }
    }
}

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

#[derive(Debug, Clone)]
struct BlockSchedule {
    delay: Duration,
    fade: Duration,
    count_up: Option<CountUp>,
}

#[derive(Debug, Clone)]
struct CountUp {
    target: u32,
    delay: Duration,
}

/// Entrance schedule for one section
#[derive(Debug, Clone)]
pub struct EntranceTimeline {
    started: Instant,
    enabled: bool,
    blocks: Vec<BlockSchedule>,
}

impl EntranceTimeline {
    /// Plan the entrance of `section` beginning at `started`
    pub fn new(section: &Section, started: Instant, enabled: bool) -> Self {
        let mut cards = 0u32;
        let mut metrics = 0u32;
        let mut charts = 0u32;
        let mut figures = 0u32;

        let blocks = section
            .blocks
            .iter()
            .map(|block| match block.kind() {
                BlockKind::Static => BlockSchedule {
                    delay: Duration::ZERO,
                    fade: SECTION_FADE,
                    count_up: None,
                },
                BlockKind::Card => {
                    let delay = CARD_STAGGER * cards;
                    cards += 1;
                    BlockSchedule {
                        delay,
                        fade: BLOCK_FADE,
                        count_up: None,
                    }
                }
                BlockKind::Metric => {
                    let delay = METRIC_STAGGER * metrics;
                    // described metrics are cards; only bare figures count up
                    let count_up = match block {
                        ContentBlock::Metric {
                            value, description, ..
                        } if description.is_empty() => {
                            let delay = COUNT_UP_STAGGER * figures;
                            figures += 1;
                            parse_simple_percent(value).map(|target| CountUp { target, delay })
                        }
                        _ => None,
                    };
                    metrics += 1;
                    BlockSchedule {
                        delay,
                        fade: BLOCK_FADE,
                        count_up,
                    }
                }
                BlockKind::Chart => {
                    let delay = CHART_DELAY + CHART_STAGGER * charts;
                    charts += 1;
                    BlockSchedule {
                        delay,
                        fade: CHART_FADE,
                        count_up: None,
                    }
                }
            })
            .collect();

        Self {
            started,
            enabled,
            blocks,
        }
    }

    /// Entrance of the section as a whole
    pub fn section(&self, now: Instant) -> Visibility {
        if !self.enabled {
            return Visibility::Shown;
        }
        Visibility::at(now, self.started, SECTION_FADE)
    }

    /// Entrance of the block at `index`
    pub fn block(&self, index: usize, now: Instant) -> Visibility {
        match self.blocks.get(index) {
            Some(schedule) if self.enabled => {
                Visibility::at(now, self.started + schedule.delay, schedule.fade)
            }
            _ => Visibility::Shown,
        }
    }

    /// Text to show for a metric value at `now`
    ///
    /// Simple percentages count up from 0% with ease-out; the last frame
    /// shows the exact original text.
    pub fn metric_text(&self, index: usize, value: &str, now: Instant) -> String {
        let count_up = match self.blocks.get(index).and_then(|b| b.count_up.as_ref()) {
            Some(count_up) if self.enabled => count_up,
            _ => return value.to_string(),
        };

        let start = self.started + count_up.delay;
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= COUNT_UP {
            return value.to_string();
        }
        let t = elapsed.as_secs_f64() / COUNT_UP.as_secs_f64();
        let current = (count_up.target as f64 * ease_out_quart(t)).floor() as u32;
        format!("{}%", current)
    }

    /// True once every element has finished its entrance
    pub fn is_settled(&self, now: Instant) -> bool {
        if !self.enabled {
            return true;
        }
        let elapsed = now.saturating_duration_since(self.started);
        self.blocks.iter().all(|schedule| {
            let fade_done = elapsed >= schedule.delay + schedule.fade;
            let count_done = schedule
                .count_up
                .as_ref()
                .map_or(true, |c| elapsed >= c.delay + COUNT_UP);
            fade_done && count_done
        }) && elapsed >= SECTION_FADE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Section {
        Section::new("s", "S")
            .with_block(ContentBlock::text("intro"))
            .with_block(ContentBlock::card("a", "b"))
            .with_block(ContentBlock::card("c", "d"))
            .with_block(ContentBlock::metric("Open rate", "20%", ""))
            .with_block(ContentBlock::metric("CTR", "2-3%", ""))
            .with_block(ContentBlock::chart("Bars", &[("x", 1)]))
    }

    #[test]
    fn test_ease_out_quart() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
        assert_eq!(ease_out_quart(2.0), 1.0);
    }

    #[test]
    fn test_cards_are_staggered() {
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section(), start, true);
        let at = start + Duration::from_millis(50);

        assert!(matches!(timeline.block(1, at), Visibility::Entering(_)));
        assert_eq!(timeline.block(2, at), Visibility::Hidden);
        assert_eq!(timeline.block(2, start + Duration::from_millis(500)), Visibility::Shown);
    }

    #[test]
    fn test_chart_waits_for_initial_delay() {
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section(), start, true);

        assert_eq!(timeline.block(5, start + Duration::from_millis(150)), Visibility::Hidden);
        assert!(matches!(
            timeline.block(5, start + Duration::from_millis(450)),
            Visibility::Entering(_)
        ));
        assert_eq!(timeline.block(5, start + Duration::from_millis(700)), Visibility::Shown);
    }

    #[test]
    fn test_count_up_simple_percentage() {
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section(), start, true);

        assert_eq!(timeline.metric_text(3, "20%", start), "0%");
        // ease_out_quart(0.5) = 0.9375 -> floor(18.75)
        assert_eq!(
            timeline.metric_text(3, "20%", start + Duration::from_millis(500)),
            "18%"
        );
        assert_eq!(timeline.metric_text(3, "20%", start + COUNT_UP), "20%");
    }

    #[test]
    fn test_complex_values_are_not_animated() {
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section(), start, true);
        assert_eq!(timeline.metric_text(4, "2-3%", start), "2-3%");
    }

    #[test]
    fn test_described_metrics_are_not_animated() {
        let section = Section::new("s", "S")
            .with_block(ContentBlock::metric("Mobile opens", "61%", "Share of opens on phones"))
            .with_block(ContentBlock::metric("Open rate", "25%", ""));
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section, start, true);

        assert_eq!(timeline.metric_text(0, "61%", start), "61%");
        // first bare figure starts counting without a stagger
        assert_eq!(timeline.metric_text(1, "25%", start), "0%");
    }

    #[test]
    fn test_disabled_timeline_shows_everything() {
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section(), start, false);

        assert_eq!(timeline.section(start), Visibility::Shown);
        assert_eq!(timeline.block(2, start), Visibility::Shown);
        assert_eq!(timeline.metric_text(3, "20%", start), "20%");
        assert!(timeline.is_settled(start));
    }

    #[test]
    fn test_settles_after_longest_animation() {
        let start = Instant::now();
        let timeline = EntranceTimeline::new(&section(), start, true);
        assert!(!timeline.is_settled(start + Duration::from_millis(900)));
        assert!(timeline.is_settled(start + Duration::from_millis(1200)));
    }
}
