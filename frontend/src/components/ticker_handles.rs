/// Cancellation handles the ticker owns between mount and teardown.
///
/// Every slot holds an RAII handle (`Timeout`, `Interval`, `AnimationFrame`,
/// `EventListener` in the component); replacing or clearing a slot drops the
/// handle, which cancels whatever it scheduled.
pub struct TickerHandles<T, I, F, L> {
    hold_delay: Option<T>,
    hold_interval: Option<I>,
    grace: Option<T>,
    frame: Option<F>,
    listeners: Vec<L>,
}

impl<T, I, F, L> Default for TickerHandles<T, I, F, L> {
    fn default() -> Self {
        Self {
            hold_delay: None,
            hold_interval: None,
            grace: None,
            frame: None,
            listeners: Vec::new(),
        }
    }
}

impl<T, I, F, L> TickerHandles<T, I, F, L> {
    /// Starts a gesture: the pending release grace is cancelled, the hold
    /// ramp restarts from its delay and the gesture's listeners replace any
    /// left from before.
    pub fn press(&mut self, hold_delay: T, listeners: Vec<L>) {
        self.grace = None;
        self.hold_interval = None;
        self.hold_delay = Some(hold_delay);
        self.listeners = listeners;
    }

    /// The hold delay elapsed; the repeating ramp takes over.
    pub fn start_hold(&mut self, interval: I) {
        self.hold_delay = None;
        self.hold_interval = Some(interval);
    }

    pub fn cancel_hold(&mut self) {
        self.hold_delay = None;
        self.hold_interval = None;
    }

    /// Ends the gesture's timers and listeners without arming the grace.
    pub fn detach(&mut self) {
        self.cancel_hold();
        self.listeners.clear();
    }

    pub fn release(&mut self, grace: T) {
        self.detach();
        self.grace = Some(grace);
    }

    pub fn grace_elapsed(&mut self) {
        self.grace = None;
    }

    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    pub fn set_frame(&mut self, frame: F) {
        self.frame = Some(frame);
    }

    pub fn frame_fired(&mut self) {
        self.frame = None;
    }

    pub fn clear(&mut self) {
        self.detach();
        self.grace = None;
        self.frame = None;
    }

    #[cfg(test)]
    pub fn is_holding(&self) -> bool {
        self.hold_delay.is_some() || self.hold_interval.is_some()
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        !self.is_holding() && self.grace.is_none() && self.frame.is_none() && self.listeners.is_empty()
    }
}
