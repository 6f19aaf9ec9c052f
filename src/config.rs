// Layout and timing constants shared by the interaction components.

/// Viewport width at or below which the navigation collapses into the
/// mobile overlay panel.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Fixed header height subtracted when scrolling to an anchor target.
pub const HEADER_OFFSET: f64 = 80.0;

/// A section counts as "in view" once the scroll position is within this
/// many pixels above its top edge.
pub const SECTION_LOOKAHEAD: f64 = 200.0;

/// Scroll depth past which the header gets its `scrolled` class.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Vertical parallax rate applied to the hero image.
pub const PARALLAX_RATE: f64 = 0.3;

/// Scroll depth past which the parallax transform is no longer updated.
pub const PARALLAX_LIMIT: f64 = 800.0;

/// How long a notification stays on screen before the exit animation.
pub const NOTIFICATION_DWELL_MS: u32 = 3_000;

/// Duration of the notification exit animation.
pub const NOTIFICATION_EXIT_MS: u32 = 400;

/// Delay before the main product image fades back in after a swap.
pub const CROSSFADE_DELAY_MS: u32 = 50;

/// Visible fraction of an element required to trigger its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Per-element delay step for staggered reveals.
pub const REVEAL_STAGGER_MS: u32 = 100;
