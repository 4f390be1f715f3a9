#![allow(clippy::unwrap_used)]

use super::*;

// ── MonthKey ──────────────────────────────────────────────────

#[test]
fn test_month_key_new_valid() {
    assert!(MonthKey::new(2024, 1).is_some());
    assert!(MonthKey::new(2024, 12).is_some());
}

#[test]
fn test_month_key_new_invalid() {
    assert!(MonthKey::new(2024, 0).is_none());
    assert!(MonthKey::new(2024, 13).is_none());
}

#[test]
fn test_month_key_display_zero_padded() {
    let key = MonthKey::new(2024, 3).unwrap();
    assert_eq!(key.to_string(), "2024-03");
    let key = MonthKey::new(2024, 11).unwrap();
    assert_eq!(key.to_string(), "2024-11");
}

#[test]
fn test_month_key_parse() {
    let key = MonthKey::parse("2024-03").unwrap();
    assert_eq!(key, MonthKey::new(2024, 3).unwrap());
    assert_eq!(key.year(), 2024);
}

#[test]
fn test_month_key_parse_unpadded() {
    let key = MonthKey::parse("2024-3").unwrap();
    assert_eq!(key.to_string(), "2024-03");
}

#[test]
fn test_month_key_parse_rejects_garbage() {
    assert!(MonthKey::parse("garbage").is_none());
    assert!(MonthKey::parse("2024").is_none());
    assert!(MonthKey::parse("2024-13").is_none());
    assert!(MonthKey::parse("2024-00").is_none());
    assert!(MonthKey::parse("").is_none());
}

#[test]
fn test_month_key_parse_display_roundtrip() {
    for s in ["2024-01", "1999-12", "2030-06"] {
        let key = MonthKey::parse(s).unwrap();
        assert_eq!(key.to_string(), s);
    }
}

#[test]
fn test_next_wraps_year() {
    let dec = MonthKey::new(2023, 12).unwrap();
    assert_eq!(dec.next(), MonthKey::new(2024, 1).unwrap());
    let jun = MonthKey::new(2024, 6).unwrap();
    assert_eq!(jun.next(), MonthKey::new(2024, 7).unwrap());
}

#[test]
fn test_prev_wraps_year() {
    let jan = MonthKey::new(2024, 1).unwrap();
    assert_eq!(jan.prev(), MonthKey::new(2023, 12).unwrap());
    let jul = MonthKey::new(2024, 7).unwrap();
    assert_eq!(jul.prev(), MonthKey::new(2024, 6).unwrap());
}

#[test]
fn test_navigation_is_unbounded() {
    let mut key = MonthKey::new(2024, 1).unwrap();
    for _ in 0..36 {
        key = key.prev();
    }
    assert_eq!(key, MonthKey::new(2021, 1).unwrap());
    for _ in 0..72 {
        key = key.next();
    }
    assert_eq!(key, MonthKey::new(2027, 1).unwrap());
}

#[test]
fn test_days_in_month() {
    assert_eq!(MonthKey::new(2024, 1).unwrap().days(), 31);
    assert_eq!(MonthKey::new(2024, 4).unwrap().days(), 30);
    assert_eq!(MonthKey::new(2024, 12).unwrap().days(), 31);
}

#[test]
fn test_days_in_february_leap_years() {
    assert_eq!(MonthKey::new(2024, 2).unwrap().days(), 29);
    assert_eq!(MonthKey::new(2023, 2).unwrap().days(), 28);
    // Century rule: 2000 was a leap year, 1900 was not
    assert_eq!(MonthKey::new(2000, 2).unwrap().days(), 29);
    assert_eq!(MonthKey::new(1900, 2).unwrap().days(), 28);
}

#[test]
fn test_contains_date() {
    let key = MonthKey::new(2024, 3).unwrap();
    assert!(key.contains_date("2024-03-05"));
    assert!(key.contains_date("2024-03-31"));
    assert!(!key.contains_date("2024-04-01"));
    assert!(!key.contains_date("2023-03-05"));
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_new_has_no_id() {
    let txn = Transaction::new("Standup".into(), 1, 30, "2024-03-05".into());
    assert!(txn.id.is_none());
    assert_eq!(txn.description, "Standup");
    assert_eq!(txn.category_id, 1);
    assert_eq!(txn.duration_minutes, 30);
    assert_eq!(txn.date, "2024-03-05");
}

#[test]
fn test_canonical_date_pads_fields() {
    assert_eq!(
        Transaction::canonical_date("2024-3-5").as_deref(),
        Some("2024-03-05")
    );
    assert_eq!(
        Transaction::canonical_date("2024-03-05").as_deref(),
        Some("2024-03-05")
    );
    assert_eq!(
        Transaction::canonical_date(" 2024-12-01 ").as_deref(),
        Some("2024-12-01")
    );
}

#[test]
fn test_canonical_date_rejects_garbage() {
    assert!(Transaction::canonical_date("not-a-date").is_none());
    assert!(Transaction::canonical_date("2024-13-01").is_none());
    assert!(Transaction::canonical_date("2023-02-29").is_none());
    assert!(Transaction::canonical_date("2024-03-05x").is_none());
    assert!(Transaction::canonical_date("").is_none());
}

#[test]
fn test_canonical_date_lands_in_its_month() {
    // A raw "2024-3-5" would never prefix-match "2024-03"; the canonical
    // form must, so accepted entries always count toward their month.
    let date = Transaction::canonical_date("2024-3-5").unwrap();
    let march = MonthKey::new(2024, 3).unwrap();
    assert!(march.contains_date(&date));
    let txn = Transaction::new("Standup".into(), 1, 30, date);
    assert!(txn.in_month(march));
}

#[test]
fn test_transaction_in_month() {
    let txn = Transaction::new("Standup".into(), 1, 30, "2024-03-05".into());
    assert!(txn.in_month(MonthKey::new(2024, 3).unwrap()));
    assert!(!txn.in_month(MonthKey::new(2024, 4).unwrap()));
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_new_has_empty_budget() {
    let cat = Category::new("Work".into());
    assert!(cat.id.is_none());
    assert_eq!(cat.name, "Work");
    assert!(cat.budgeted.is_empty());
}

#[test]
fn test_assigned_for_missing_month_is_zero() {
    let cat = Category::new("Work".into());
    assert_eq!(cat.assigned_for(MonthKey::new(2024, 3).unwrap()), 0);
}

#[test]
fn test_assigned_for_set_month() {
    let mut cat = Category::new("Work".into());
    let march = MonthKey::new(2024, 3).unwrap();
    cat.budgeted.insert(march, 6000);
    assert_eq!(cat.assigned_for(march), 6000);
    assert_eq!(cat.assigned_for(march.next()), 0);
}

#[test]
fn test_find_by_name_case_insensitive() {
    let cats = vec![Category::new("Work".into()), Category::new("Sleep".into())];
    assert_eq!(
        Category::find_by_name(&cats, "work").map(|c| c.name.as_str()),
        Some("Work")
    );
    assert_eq!(
        Category::find_by_name(&cats, "SLEEP").map(|c| c.name.as_str()),
        Some("Sleep")
    );
    assert!(Category::find_by_name(&cats, "Gym").is_none());
}

#[test]
fn test_find_by_id() {
    let mut cat = Category::new("Work".into());
    cat.id = Some(7);
    let cats = vec![cat];
    assert!(Category::find_by_id(&cats, 7).is_some());
    assert!(Category::find_by_id(&cats, 8).is_none());
}

#[test]
fn test_category_display() {
    let cat = Category::new("Deep Work".into());
    assert_eq!(format!("{cat}"), "Deep Work");
}
