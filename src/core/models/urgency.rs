use chrono::{DateTime, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueUrgency {
    Overdue,
    NearDue,
    Normal,
    Completed,
}

impl DueUrgency {
    pub fn text_class(&self) -> &'static str {
        match self {
            DueUrgency::Overdue => "text-red-600",
            DueUrgency::NearDue => "text-orange-600",
            DueUrgency::Normal => "text-slate-600",
            DueUrgency::Completed => "text-slate-400",
        }
    }
}

/// Whole days until `due` (midnight UTC), rounded up. Negative once the day has passed.
pub fn days_until(due: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due_at = due.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (due_at - now).num_milliseconds();
    // integer division truncates toward zero, which is already the ceiling for negatives
    let days = millis / MILLIS_PER_DAY;
    if millis > 0 && millis % MILLIS_PER_DAY != 0 {
        days + 1
    } else {
        days
    }
}

pub fn classify_due_date(due: NaiveDate, now: DateTime<Utc>, near_due_days: i64) -> DueUrgency {
    let diff_days = days_until(due, now);
    if diff_days < 0 {
        DueUrgency::Overdue
    } else if diff_days <= near_due_days {
        DueUrgency::NearDue
    } else {
        DueUrgency::Normal
    }
}

/// Completed tasks get the muted treatment whatever the date says.
pub fn due_urgency(due: NaiveDate, completed: bool, now: DateTime<Utc>, near_due_days: i64) -> DueUrgency {
    if completed {
        DueUrgency::Completed
    } else {
        classify_due_date(due, now, near_due_days)
    }
}
