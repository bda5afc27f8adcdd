use game_types::format_clock;

/// Default length of a round in seconds
pub const ROUND_DURATION_SECONDS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
    Expired,
}

/// What a single tick did to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed
    Ignored,
    Ticked { remaining: u32 },
    /// Reached zero on this tick. Reported exactly once.
    Expired,
}

/// One-second resolution countdown. Scheduling ticks is up to the caller.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    duration: u32,
    remaining: u32,
    state: TimerState,
}

impl RoundTimer {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration: duration_seconds,
            remaining: duration_seconds,
            state: TimerState::Idle,
        }
    }

    /// Begin counting down from the full duration
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.state = if self.duration == 0 {
            TimerState::Expired
        } else {
            TimerState::Running
        };
    }

    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state != TimerState::Running || self.remaining == 0 {
            return TickOutcome::Ignored;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked {
                remaining: self.remaining,
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seconds counted down so far
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }

    /// Remaining time as `m:ss`
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(ROUND_DURATION_SECONDS)
    }
}
