//! Timing and threshold constants shared across the site behaviors.

/// Delay between mounting an overlay hidden and flipping it visible, so the
/// CSS transition starts from its initial frame.
pub const REVEAL_TICK_MS: u32 = 10;

/// How long a notification stays fully visible before auto-dismissal.
pub const NOTIFICATION_DWELL_MS: u32 = 4_000;

/// Length of the overlay exit transition; nodes detach only after this.
pub const OVERLAY_EXIT_MS: u32 = 300;

/// Vertical spacing between stacked notifications, in px.
pub const NOTIFICATION_SLOT_STEP_PX: u32 = 64;

/// Distance of the first notification from the top edge, in px.
pub const NOTIFICATION_BASE_OFFSET_PX: u32 = 20;

/// Scroll offset past which the navbar gets its solid treatment.
pub const NAVBAR_SOLID_AT_PX: f64 = 100.0;

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_AT_PX: f64 = 300.0;

/// Minimum scroll delta before the hide-on-scroll-down logic reacts.
pub const SCROLL_DIRECTION_DELTA_PX: f64 = 5.0;

/// Fixed header height compensated when smooth-scrolling to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Viewport width below which the hero spawns the smaller particle count.
pub const PARTICLE_BREAKPOINT_PX: f64 = 768.0;

/// Reveal stagger between siblings inside the events/team grids.
pub const REVEAL_STAGGER_STEP_MS: u32 = 100;

/// Simulated network round trip for the contact form.
pub const SUBMIT_SIMULATED_DELAY_MS: u32 = 2_000;

/// How long the submit button keeps its outcome label before resetting.
pub const SUBMIT_RESET_DELAY_MS: u32 = 3_000;

/// Typewriter keystroke interval for the hero title.
pub const TYPE_SPEED_MS: u32 = 100;

/// Delay before the hero title starts typing.
pub const TYPE_START_DELAY_MS: u32 = 1_000;

/// How long the caret lingers after the last character.
pub const TYPE_CARET_LINGER_MS: u32 = 1_000;
