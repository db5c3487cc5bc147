use crate::controller::DeviceState;

/// What the main loop does for one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Render the target, then halt until the next button event.
    AwaitInput,
    /// Take a sample and render it; loop again without sleeping.
    Sample,
    /// Blank the display, switch the analog front-end off, halt.
    PowerDown,
    /// Reinitialize the peripherals and restore the defaults.
    Reinitialize,
}

impl Activity {
    /// The CPU may halt after this activity until a button wakes it.
    pub fn halts(self) -> bool {
        matches!(self, Activity::AwaitInput | Activity::PowerDown)
    }
}

/// Decide the main-loop activity for the current device state.
pub fn activity_for(state: DeviceState) -> Activity {
    match state {
        DeviceState::Idle => Activity::AwaitInput,
        DeviceState::Weighing => Activity::Sample,
        DeviceState::Sleeping => Activity::PowerDown,
        DeviceState::ResetRequested => Activity::Reinitialize,
    }
}
