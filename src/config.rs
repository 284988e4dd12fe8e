/// Options for the [`Simulation`](crate::Simulation) and its actors.
///
/// Default options:
/// ```
/// # use waygraph::SimConfig;
/// assert_eq!(
///     SimConfig {
///         follower_speed: 2.0,
///         arrival_tolerance: 1.0,
///         touch_radius: 10.0,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// distance the follower covers per tick, in world units (defaults to `2.0`)
    pub follower_speed: f32,
    /// how close to a target Node counts as having arrived (defaults to `1.0`)
    ///
    /// A follower moves in fixed steps, so a tolerance far below
    /// `follower_speed` makes it overshoot and oscillate around the target
    /// instead of settling.
    pub arrival_tolerance: f32,
    /// hit-test radius for grabbing a Node with the pointer (defaults to `10.0`)
    pub touch_radius: f32,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            follower_speed: 2.0,
            arrival_tolerance: 1.0,
            touch_radius: 10.0,
        }
    }
}
