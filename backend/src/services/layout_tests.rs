use crate::error::ScheduleError;
use crate::models::{Course, DailyMeetingSet, Time, Weekday};
use crate::services::layout::{
    meeting_bounds, LayoutConfig, LayoutEngine, TimeAxis, MAX_MINUTES_PER_ROW,
};
use proptest::prelude::*;
use std::num::NonZeroU32;

fn t(s: &str) -> Time {
    Time::parse(s).unwrap()
}

fn step(minutes: u32) -> NonZeroU32 {
    NonZeroU32::new(minutes).unwrap()
}

fn course(code: &str, meetings: &[(Weekday, &str, &str)]) -> Course {
    let mut set = DailyMeetingSet::new();
    for (day, start, end) in meetings {
        set.insert(code, *day, t(start), t(end)).unwrap();
    }
    Course::new(code, format!("{} name", code), format!("{} room", code), set)
}

fn config(minutes_per_row: u32) -> LayoutConfig {
    LayoutConfig::new(minutes_per_row, Weekday::ALL.to_vec(), vec!["red".to_string()]).unwrap()
}

#[test]
fn test_single_meeting_axis_and_placement() {
    let courses = vec![course("CS 164", &[(Weekday::Monday, "9:00", "10:30")])];
    let engine = LayoutEngine::new(config(30));

    let axis = engine.time_axis(&courses);
    assert_eq!(axis.start_of_day(), t("8:30"));
    assert_eq!(
        axis.labels(),
        vec!["08:30", "09:00", "09:30", "10:00", "10:30", "11:00"]
    );
    assert!(*axis.marks().last().unwrap() >= t("10:30"));

    let blocks = engine.meeting_blocks(&courses);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].grid_column(), 3);
    assert_eq!(blocks[0].grid_row(axis.start_of_day(), step(30)), 3);
    assert_eq!(blocks[0].row_span(step(30)), 3);
}

#[test]
fn test_fence_post_count_pinned() {
    // [08:00, 10:00] every 30 minutes: 5 in-range marks plus one trailing mark.
    let axis = TimeAxis::fence_posts(t("8:00"), t("10:00"), step(30));
    assert_eq!(axis.len(), 6);
    assert_eq!(*axis.marks().last().unwrap(), t("10:30"));
}

#[test]
fn test_fence_post_last_not_on_step() {
    let axis = TimeAxis::fence_posts(t("8:00"), t("9:10"), step(30));
    assert_eq!(axis.labels(), vec!["08:00", "08:30", "09:00", "09:30"]);
}

#[test]
fn test_empty_course_list() {
    let engine = LayoutEngine::new(config(30));
    let layout = engine.compute(&[]);

    assert!(layout.time_axis.len() <= 2);
    assert_eq!(layout.time_axis, vec!["23:29"]);
    assert!(layout.blocks.is_empty());
    assert_eq!(layout.num_rows, 3);
}

#[test]
fn test_course_without_meetings_is_degenerate_too() {
    let courses = vec![course("IND 499", &[])];
    let layout = LayoutEngine::new(config(30)).compute(&courses);
    assert!(layout.blocks.is_empty());
    assert_eq!(layout.time_axis.len(), 1);
}

#[test]
fn test_meeting_bounds() {
    let courses = vec![
        course("A", &[(Weekday::Monday, "10:00", "11:00")]),
        course("B", &[(Weekday::Friday, "8:15", "9:00"), (Weekday::Tuesday, "15:00", "17:45")]),
    ];
    assert_eq!(meeting_bounds(&courses), (t("8:15"), t("17:45")));
    assert_eq!(meeting_bounds(&[]), (Time::latest(), Time::earliest()));
}

#[test]
fn test_disjoint_weekdays_never_share_column() {
    let courses = vec![
        course("A", &[(Weekday::Monday, "9:00", "10:00"), (Weekday::Wednesday, "9:00", "10:00")]),
        course("B", &[(Weekday::Tuesday, "9:00", "10:00"), (Weekday::Thursday, "9:00", "10:00")]),
    ];
    let layout = LayoutEngine::new(config(30)).compute(&courses);
    let columns = |code: &str| -> Vec<usize> {
        layout
            .blocks
            .iter()
            .filter(|b| b.course_code == code)
            .map(|b| b.grid_column)
            .collect()
    };
    assert_eq!(columns("A"), vec![3, 5]);
    assert_eq!(columns("B"), vec![4, 6]);
}

#[test]
fn test_overlapping_meetings_share_rows() {
    let courses = vec![
        course("A", &[(Weekday::Wednesday, "9:00", "10:30")]),
        course("B", &[(Weekday::Wednesday, "10:00", "11:00")]),
    ];
    let layout = LayoutEngine::new(config(30)).compute(&courses);
    let a = layout.blocks[0].rows();
    let b = layout.blocks[1].rows();
    assert_eq!(layout.blocks[0].grid_column, layout.blocks[1].grid_column);
    assert!(a.start < b.end && b.start < a.end);
}

#[test]
fn test_rows_round_up_to_granularity() {
    let courses = vec![
        course("A", &[(Weekday::Monday, "9:00", "9:50")]),
        course("B", &[(Weekday::Monday, "9:10", "9:20")]),
    ];
    let engine = LayoutEngine::new(config(30));
    let layout = engine.compute(&courses);

    // axis starts at 08:30
    assert_eq!(layout.blocks[0].grid_row, 3);
    assert_eq!(layout.blocks[0].row_span, 2);
    // 40 minutes in rounds up to the next row
    assert_eq!(layout.blocks[1].grid_row, 4);
    assert_eq!(layout.blocks[1].row_span, 1);
}

#[test]
fn test_event_ids_follow_course_then_weekday_order() {
    let courses = vec![
        course("A", &[(Weekday::Friday, "9:00", "10:00"), (Weekday::Monday, "9:00", "10:00")]),
        course("B", &[(Weekday::Tuesday, "9:00", "10:00")]),
    ];
    let layout = LayoutEngine::new(config(30)).compute(&courses);
    let order: Vec<(String, usize, Weekday)> = layout
        .blocks
        .iter()
        .map(|b| (b.course_code.clone(), b.event_id.value(), b.weekday))
        .collect();
    assert_eq!(
        order,
        vec![
            ("A".to_string(), 1, Weekday::Monday),
            ("A".to_string(), 2, Weekday::Friday),
            ("B".to_string(), 3, Weekday::Tuesday),
        ]
    );
}

#[test]
fn test_colors_shared_within_course() {
    let courses = vec![
        course("A", &[(Weekday::Monday, "9:00", "10:00"), (Weekday::Wednesday, "9:00", "10:00")]),
        course("B", &[(Weekday::Tuesday, "9:00", "10:00")]),
    ];
    let layout = LayoutEngine::new(config(30)).compute(&courses);
    assert_eq!(layout.blocks[0].color, "red");
    assert_eq!(layout.blocks[1].color, "red");
    assert!(layout.blocks[2].color.starts_with("rgb("));
}

#[test]
fn test_custom_weekday_order_and_hidden_days() {
    let cfg = LayoutConfig::new(60, vec![Weekday::Tuesday, Weekday::Thursday], vec![]).unwrap();
    let courses = vec![course(
        "A",
        &[(Weekday::Monday, "9:00", "10:00"), (Weekday::Thursday, "9:00", "10:00")],
    )];
    let layout = LayoutEngine::new(cfg).compute(&courses);

    assert_eq!(layout.weekdays, vec!["Tuesday", "Thursday"]);
    assert_eq!(layout.num_columns, 4);
    assert_eq!(layout.blocks.len(), 1);
    assert_eq!(layout.blocks[0].grid_column, 4);
    assert_eq!(layout.blocks[0].event_id.value(), 1);
}

#[test]
fn test_hourly_granularity() {
    let courses = vec![course("A", &[(Weekday::Monday, "9:00", "10:30")])];
    let layout = LayoutEngine::new(config(60)).compute(&courses);
    assert_eq!(layout.time_axis, vec!["08:00", "09:00", "10:00", "11:00"]);
    assert_eq!(layout.blocks[0].grid_row, 3);
    assert_eq!(layout.blocks[0].row_span, 2);
    assert_eq!(layout.num_rows, 6);
}

#[test]
fn test_midnight_start_wraps_label() {
    let courses = vec![course("NIGHT", &[(Weekday::Monday, "0:00", "1:00")])];
    let layout = LayoutEngine::new(config(30)).compute(&courses);
    assert_eq!(layout.time_axis[0], "23:30");
    assert_eq!(layout.time_axis[1], "00:00");
    assert_eq!(layout.blocks[0].grid_row, 3);
}

#[test]
fn test_config_rejects_zero_granularity() {
    let err = LayoutConfig::new(0, Weekday::ALL.to_vec(), vec![]).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_granularity_over_half_a_day() {
    assert!(LayoutConfig::new(MAX_MINUTES_PER_ROW, Weekday::ALL.to_vec(), vec![]).is_ok());
    let err = LayoutConfig::new(MAX_MINUTES_PER_ROW + 1, Weekday::ALL.to_vec(), vec![])
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    assert!(LayoutConfig::new(24 * 60, Weekday::ALL.to_vec(), vec![]).is_err());
}

#[test]
fn test_zero_step_never_reaches_the_axis() {
    assert!(NonZeroU32::new(0).is_none());
    // the smallest step still terminates, one mark per minute plus the trailing one
    let axis = TimeAxis::fence_posts(t("8:00"), t("9:00"), step(1));
    assert_eq!(axis.len(), 62);
    assert_eq!(*axis.marks().last().unwrap(), t("9:01"));
}

#[test]
fn test_full_day_axis_marks_increase_but_labels_wrap() {
    let courses = vec![course("LAB", &[(Weekday::Monday, "0:00", "23:59")])];
    let axis = LayoutEngine::new(config(60)).time_axis(&courses);

    for pair in axis.marks().windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(axis.len(), 26);
    let labels = axis.labels();
    assert_eq!(labels.first().unwrap(), "23:00");
    assert_eq!(labels[1], "00:00");
    assert_eq!(labels[24], "23:00");
    assert_eq!(labels.last().unwrap(), "00:00");
}

#[test]
fn test_config_rejects_duplicate_weekday() {
    let err = LayoutConfig::new(30, vec![Weekday::Monday, Weekday::Monday], vec![]).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_no_weekdays() {
    assert!(LayoutConfig::new(30, vec![], vec![]).is_err());
}

#[test]
fn test_default_config() {
    let cfg = LayoutConfig::default();
    assert_eq!(cfg.minutes_per_row(), 30);
    assert_eq!(cfg.weekdays().len(), 5);
    assert_eq!(cfg.num_columns(), 7);
    assert_eq!(cfg.grid_column(Weekday::Friday), Some(7));
}

proptest! {
    #[test]
    fn prop_axis_strictly_increasing(
        start in 0i32..(23 * 60),
        length in 0i32..600,
        minutes in 1u32..120,
    ) {
        let first = Time::from_total_minutes(start);
        let last = Time::from_total_minutes(start + length);
        let axis = TimeAxis::fence_posts(first, last, step(minutes));
        for pair in axis.marks().windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(*axis.marks().last().unwrap() > last);
    }

    #[test]
    fn prop_blocks_fit_inside_grid(
        start in (6i32 * 60)..(20 * 60),
        length in 0i32..240,
        minutes in prop::sample::select(vec![5u32, 10, 15, 20, 30, 45, 60]),
    ) {
        let start_time = Time::from_total_minutes(start);
        let end_time = Time::from_total_minutes(start + length);
        let start_str = start_time.to_string();
        let end_str = end_time.to_string();
        let courses = vec![course(
            "A",
            &[(Weekday::Thursday, start_str.as_str(), end_str.as_str())],
        )];
        let layout = LayoutEngine::new(config(minutes)).compute(&courses);
        let block = &layout.blocks[0];
        prop_assert!(block.grid_row >= 3);
        prop_assert!(block.rows().end <= layout.num_rows + 1);
    }
}
