pub mod animations;
pub mod throttle;
