use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::utils::date::{end_of_day, serializer};

// FixedDueDateSchedule maps one date range to the due date every checkout
// or renewal falling inside it receives. Containment is inclusive at both
// endpoints.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FixedDueDateSchedule {
    #[serde(with = "serializer")]
    pub start: NaiveDateTime,
    #[serde(with = "serializer")]
    pub end: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due: NaiveDateTime,
}

impl FixedDueDateSchedule {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, due: NaiveDateTime) -> Self {
        Self { start, end, due }
    }

    pub fn whole_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
        let end = end_of_day(NaiveDate::from_ymd_opt(year, 12, 31)?);
        Some(Self::new(start, end, end))
    }

    pub fn whole_month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
        let last_day = last_day_of_month(year, month)?;
        let end = end_of_day(last_day);
        Some(Self::new(start, end, end))
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    first_of_next.pred_opt()
}

// An ordered collection of schedules; searched in the order given and the
// first schedule containing the reference date wins, even when a later
// schedule would also match.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct FixedDueDateSchedules {
    schedules: Vec<FixedDueDateSchedule>,
}

impl FixedDueDateSchedules {
    pub fn new(schedules: Vec<FixedDueDateSchedule>) -> Self {
        Self { schedules }
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn due_date_for(&self, date: NaiveDateTime) -> Option<NaiveDateTime> {
        self.schedules
            .iter()
            .find(|schedule| schedule.contains(date))
            .map(|schedule| schedule.due)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::policy::schedule::{FixedDueDateSchedule, FixedDueDateSchedules};

    fn at(year: i32, month: u32, day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_should_contain_boundaries_inclusively() {
        let schedule = FixedDueDateSchedule::whole_month(2018, 2).unwrap();
        assert!(schedule.contains(at(2018, 2, 1, 0)));
        assert!(schedule.contains(schedule.end));
        assert!(!schedule.contains(at(2018, 3, 1, 0)));
        assert!(!schedule.contains(at(2018, 1, 31, 23)));
    }

    #[tokio::test]
    async fn test_should_find_due_date_of_first_matching_schedule() {
        let schedules = FixedDueDateSchedules::new(vec![
            FixedDueDateSchedule::whole_month(2018, 1).unwrap(),
            FixedDueDateSchedule::whole_month(2018, 2).unwrap(),
            FixedDueDateSchedule::whole_month(2018, 3).unwrap(),
        ]);
        let due = schedules.due_date_for(at(2018, 2, 27, 16)).unwrap();
        assert_eq!(FixedDueDateSchedule::whole_month(2018, 2).unwrap().due, due);
    }

    #[tokio::test]
    async fn test_should_prefer_first_of_overlapping_schedules() {
        let whole_year = FixedDueDateSchedule::whole_year(2018).unwrap();
        let february = FixedDueDateSchedule::whole_month(2018, 2).unwrap();
        let schedules = FixedDueDateSchedules::new(vec![whole_year.clone(), february]);
        let due = schedules.due_date_for(at(2018, 2, 14, 12)).unwrap();
        assert_eq!(whole_year.due, due);
    }

    #[tokio::test]
    async fn test_should_find_nothing_between_schedules() {
        let schedules = FixedDueDateSchedules::new(vec![
            FixedDueDateSchedule::whole_month(2018, 1).unwrap(),
            FixedDueDateSchedule::whole_month(2018, 3).unwrap(),
        ]);
        assert!(schedules.due_date_for(at(2018, 2, 18, 6)).is_none());
    }

    #[tokio::test]
    async fn test_should_find_nothing_in_empty_collection() {
        let schedules = FixedDueDateSchedules::default();
        assert!(schedules.is_empty());
        assert!(schedules.due_date_for(at(2018, 3, 14, 11)).is_none());
    }

    #[tokio::test]
    async fn test_should_build_whole_year_schedule() {
        let schedule = FixedDueDateSchedule::whole_year(2018).unwrap();
        assert_eq!("2018-12-31 23:59:59", schedule.due.to_string());
        assert_eq!("2018-01-01 00:00:00", schedule.start.to_string());
    }

    #[tokio::test]
    async fn test_should_clamp_whole_month_to_leap_february() {
        let schedule = FixedDueDateSchedule::whole_month(2020, 2).unwrap();
        assert_eq!("2020-02-29 23:59:59", schedule.end.to_string());
    }
}
