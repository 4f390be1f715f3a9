#![allow(clippy::unwrap_used)]

use super::util::*;

// ── format_minutes ────────────────────────────────────────────

#[test]
fn test_format_minutes_small() {
    assert_eq!(format_minutes(0), "0");
    assert_eq!(format_minutes(350), "350");
}

#[test]
fn test_format_minutes_thousands() {
    assert_eq!(format_minutes(5650), "5,650");
    assert_eq!(format_minutes(41760), "41,760");
    assert_eq!(format_minutes(1234567), "1,234,567");
}

#[test]
fn test_format_minutes_negative() {
    assert_eq!(format_minutes(-150), "-150");
    assert_eq!(format_minutes(-8240), "-8,240");
}

// ── format_duration ───────────────────────────────────────────

#[test]
fn test_format_duration_minutes_only() {
    assert_eq!(format_duration(0), "0m");
    assert_eq!(format_duration(45), "45m");
    assert_eq!(format_duration(59), "59m");
}

#[test]
fn test_format_duration_hours_and_minutes() {
    assert_eq!(format_duration(60), "1h 00m");
    assert_eq!(format_duration(90), "1h 30m");
    assert_eq!(format_duration(5650), "94h 10m");
}

#[test]
fn test_format_duration_pads_minutes() {
    assert_eq!(format_duration(65), "1h 05m");
}

#[test]
fn test_format_duration_negative() {
    assert_eq!(format_duration(-150), "-2h 30m");
    assert_eq!(format_duration(-30), "-30m");
}

#[test]
fn test_format_duration_full_month() {
    // 29 leap-February days
    assert_eq!(format_duration(41760), "696h 00m");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    // Japanese characters are multi-byte UTF-8
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_advances_and_follows() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 7);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_follows_cursor() {
    let (mut index, mut scroll) = (5, 5);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 4);
    assert_eq!(scroll, 4);
}

#[test]
fn test_scroll_up_saturates_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (5, 4);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (3, 2);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    // Untouched for an empty list
    assert_eq!((index, scroll), (3, 2));
}
