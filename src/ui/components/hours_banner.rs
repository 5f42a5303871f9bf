// SPDX-License-Identifier: MPL-2.0
//! Business-hours banner shown on the dashboard.
//!
//! The weekly schedule is fixed (the shop is closed Sunday and Monday); the
//! banner tells the customer whether the shop is open right now and, if not,
//! when it opens next.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Weekday};
use iced::{
    alignment::Vertical,
    widget::{Container, Row, Text},
    Element, Length, Theme,
};

/// Opening window for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

/// Where the current moment falls in the weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursStatus {
    /// Open right now, closing at the given time.
    Open { closes: NaiveTime },
    /// Closed, but opening later the same day.
    OpensLaterToday { opens: NaiveTime },
    /// Closed for the rest of the day; next opening is on the given weekday.
    ClosedUntil { day: Weekday },
}

// Shop hours: 09:00-18:00, closed Sunday and Monday.
fn opens() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

fn closes() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap()
}

/// Returns the opening window for `day`, or `None` on closing days.
#[must_use]
pub fn schedule_for(day: Weekday) -> Option<DaySchedule> {
    match day {
        Weekday::Sun | Weekday::Mon => None,
        _ => Some(DaySchedule {
            opens: opens(),
            closes: closes(),
        }),
    }
}

/// Computes the banner status for an arbitrary local datetime.
#[must_use]
pub fn status_at(now: NaiveDateTime) -> HoursStatus {
    let day = now.weekday();
    if let Some(schedule) = schedule_for(day) {
        let time = now.time();
        if time < schedule.opens {
            return HoursStatus::OpensLaterToday {
                opens: schedule.opens,
            };
        }
        if time < schedule.closes {
            return HoursStatus::Open {
                closes: schedule.closes,
            };
        }
    }

    // Scan forward to the next open day. The schedule always has open days,
    // so the scan terminates within a week.
    let mut next = day.succ();
    while schedule_for(next).is_none() {
        next = next.succ();
    }
    HoursStatus::ClosedUntil { day: next }
}

/// i18n key for a weekday name.
#[must_use]
pub fn weekday_i18n_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "weekday-mon",
        Weekday::Tue => "weekday-tue",
        Weekday::Wed => "weekday-wed",
        Weekday::Thu => "weekday-thu",
        Weekday::Fri => "weekday-fri",
        Weekday::Sat => "weekday-sat",
        Weekday::Sun => "weekday-sun",
    }
}

/// Renders the banner for the current local time.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    view_at(i18n, Local::now().naive_local())
}

/// Renders the banner for a specific moment (separated for tests and
/// previews).
pub fn view_at<'a, Message: 'a>(i18n: &I18n, now: NaiveDateTime) -> Element<'a, Message> {
    let status = status_at(now);

    let (accent, label) = match status {
        HoursStatus::Open { closes } => (
            palette::SUCCESS_500,
            i18n.tr_with_args(
                "hours-open-until",
                &[("time", &closes.format("%H:%M").to_string())],
            ),
        ),
        HoursStatus::OpensLaterToday { opens } => (
            palette::WARNING_500,
            i18n.tr_with_args(
                "hours-closed-opens-at",
                &[("time", &opens.format("%H:%M").to_string())],
            ),
        ),
        HoursStatus::ClosedUntil { day } => (
            palette::WARNING_500,
            i18n.tr_with_args(
                "hours-closed-today",
                &[("day", &i18n.tr(weekday_i18n_key(day)))],
            ),
        ),
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::clock(), sizing::ICON_MD))
        .push(Text::new(label).size(typography::BODY));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::accent_banner(theme, accent))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_hms_opt(hour, minute, 0)
            .expect("valid time")
    }

    #[test]
    fn open_midweek_during_business_hours() {
        // 2026-08-26 is a Wednesday.
        let status = status_at(at(2026, 8, 26, 10, 30));
        assert_eq!(status, HoursStatus::Open { closes: closes() });
    }

    #[test]
    fn closed_before_opening_time() {
        let status = status_at(at(2026, 8, 26, 8, 0));
        assert_eq!(status, HoursStatus::OpensLaterToday { opens: opens() });
    }

    #[test]
    fn closed_at_closing_time_exactly() {
        let status = status_at(at(2026, 8, 26, 18, 0));
        assert_eq!(status, HoursStatus::ClosedUntil { day: Weekday::Thu });
    }

    #[test]
    fn closed_on_sunday_until_tuesday() {
        // 2026-08-30 is a Sunday; Monday is also closed.
        let status = status_at(at(2026, 8, 30, 12, 0));
        assert_eq!(status, HoursStatus::ClosedUntil { day: Weekday::Tue });
    }

    #[test]
    fn saturday_evening_points_to_tuesday() {
        // 2026-08-29 is a Saturday.
        let status = status_at(at(2026, 8, 29, 19, 0));
        assert_eq!(status, HoursStatus::ClosedUntil { day: Weekday::Tue });
    }

    #[test]
    fn monday_has_no_schedule() {
        assert!(schedule_for(Weekday::Mon).is_none());
        assert!(schedule_for(Weekday::Tue).is_some());
    }
}
