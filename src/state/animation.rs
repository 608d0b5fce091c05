#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Bounds of the animation-speed selector.
pub const SPEED_MIN: u32 = 1;
pub const SPEED_MAX: u32 = 9;

/// Timepoint-animation state machine: Idle (`running == false`) or
/// Running. The interval handle itself lives browser-side in the driver
/// effect; at most one exists, and it is dropped on every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    pub running: bool,
    pub speed: u32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self { running: false, speed: 5 }
    }
}

/// Tick period in milliseconds: `1000 - speed * 100`, with the speed held
/// to the selector's range.
pub fn period_ms(speed: u32) -> u32 {
    1000 - speed.clamp(SPEED_MIN, SPEED_MAX) * 100
}

/// Next timepoint index, wrapping back to 1 past the plate's count.
pub fn next_timepoint(current: u32, count: u32) -> u32 {
    let next = current + 1;
    if next > count { 1 } else { next }
}
