use chrono::{DateTime, Utc};
use std::fmt;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Time left until the contest deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Remaining { hours: u64, minutes: u8, seconds: u8 },
    Ended,
}

impl CountdownState {
    pub fn is_ended(&self) -> bool {
        matches!(self, CountdownState::Ended)
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownState::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{}h {}m {}s", hours, minutes, seconds),
            CountdownState::Ended => write!(f, "Contest ended"),
        }
    }
}

/// Remaining time from `now` to `target`, truncated to whole seconds.
/// Anything at or past the target is `Ended`.
pub fn tick(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownState {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return CountdownState::Ended;
    }

    CountdownState::Remaining {
        hours: (diff / MS_PER_HOUR) as u64,
        minutes: ((diff % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
        seconds: ((diff % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 3, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_one_hour_one_minute_one_second() {
        let state = tick(target(), target() - Duration::seconds(3661));
        assert_eq!(
            state,
            CountdownState::Remaining {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(state.to_string(), "1h 1m 1s");
    }

    #[test]
    fn test_ended_at_and_after_target() {
        assert_eq!(tick(target(), target()), CountdownState::Ended);
        for secs in [1, 59, 3600, 86_400 * 365] {
            let state = tick(target(), target() + Duration::seconds(secs));
            assert!(state.is_ended());
        }
        assert_eq!(CountdownState::Ended.to_string(), "Contest ended");
    }

    #[test]
    fn test_truncates_partial_second() {
        let now = target() - Duration::milliseconds(1999);
        assert_eq!(
            tick(target(), now),
            CountdownState::Remaining {
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );

        let now = target() - Duration::milliseconds(1);
        assert_eq!(
            tick(target(), now),
            CountdownState::Remaining {
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_hours_exceed_a_day() {
        let now = target() - Duration::hours(50) - Duration::minutes(59) - Duration::seconds(59);
        assert_eq!(tick(target(), now).to_string(), "50h 59m 59s");
    }
}
