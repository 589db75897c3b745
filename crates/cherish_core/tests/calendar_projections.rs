use cherish_core::{
    filter_by_date, filter_by_kind_and_text, group_by_date, most_recent_by_category, Memory,
    MemoryCategory, RecordMeta, VaultItem, VaultKind,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn memory(category: MemoryCategory, day: NaiveDate, notes: &str) -> Memory {
    Memory {
        meta: RecordMeta {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        },
        category,
        memory_date: day,
        location: None,
        notes: Some(notes.to_string()),
        photo_url: None,
    }
}

fn fact(kind: VaultKind, content: &str) -> VaultItem {
    VaultItem {
        meta: RecordMeta {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        },
        kind,
        content: content.to_string(),
    }
}

#[test]
fn group_by_date_keeps_input_order_within_groups() {
    let memories = vec![
        memory(MemoryCategory::Dining, date(2024, 5, 2), "lunch"),
        memory(MemoryCategory::Gift, date(2024, 5, 1), "flowers"),
        memory(MemoryCategory::Date, date(2024, 5, 2), "cinema"),
    ];

    let grouped = group_by_date(&memories);
    assert_eq!(grouped.len(), 2);

    let may_first = &grouped[&date(2024, 5, 1)];
    assert_eq!(may_first.len(), 1);
    assert_eq!(may_first[0].notes.as_deref(), Some("flowers"));

    let may_second = &grouped[&date(2024, 5, 2)];
    let notes: Vec<_> = may_second
        .iter()
        .map(|memory| memory.notes.clone().unwrap())
        .collect();
    assert_eq!(notes, ["lunch", "cinema"]);
}

#[test]
fn group_by_date_over_empty_input_is_empty() {
    assert!(group_by_date(&[]).is_empty());
}

#[test]
fn most_recent_by_category_takes_first_match_per_category() {
    // Most-recent-first list, as the store returns it.
    let memories = vec![
        memory(MemoryCategory::Gift, date(2024, 6, 1), "new"),
        memory(MemoryCategory::Date, date(2024, 5, 20), "picnic"),
        memory(MemoryCategory::Gift, date(2024, 4, 1), "old"),
    ];

    let latest = most_recent_by_category(
        &memories,
        &[
            MemoryCategory::Gift,
            MemoryCategory::Date,
            MemoryCategory::Emotion,
        ],
    );

    assert_eq!(latest.get(&MemoryCategory::Gift), Some(&date(2024, 6, 1)));
    assert_eq!(latest.get(&MemoryCategory::Date), Some(&date(2024, 5, 20)));
    // No emotion memory exists, so the key is omitted entirely.
    assert!(!latest.contains_key(&MemoryCategory::Emotion));
}

#[test]
fn filter_by_date_matches_exact_day_only() {
    let memories = vec![
        memory(MemoryCategory::Dining, date(2024, 5, 2), "a"),
        memory(MemoryCategory::Gift, date(2024, 5, 3), "b"),
        memory(MemoryCategory::Date, date(2024, 5, 2), "c"),
    ];

    let day = filter_by_date(&memories, date(2024, 5, 2));
    let notes: Vec<_> = day
        .iter()
        .map(|memory| memory.notes.clone().unwrap())
        .collect();
    assert_eq!(notes, ["a", "c"]);

    assert!(filter_by_date(&memories, date(2024, 5, 4)).is_empty());
}

#[test]
fn vault_search_is_kind_scoped_and_case_insensitive() {
    let items = vec![
        fact(VaultKind::Love, "Sunflowers in spring"),
        fact(VaultKind::Dislike, "sunflower seeds"),
        fact(VaultKind::Love, "rainy evenings"),
    ];

    let hits = filter_by_kind_and_text(&items, &VaultKind::Love, "SUNFLOWER");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "Sunflowers in spring");
}

#[test]
fn vault_search_with_empty_needle_matches_whole_kind() {
    let items = vec![
        fact(VaultKind::Comfort, "tea"),
        fact(VaultKind::Promise, "call every sunday"),
        fact(VaultKind::Comfort, "blanket"),
    ];

    let hits = filter_by_kind_and_text(&items, &VaultKind::Comfort, "");
    let contents: Vec<_> = hits.iter().map(|item| item.content.clone()).collect();
    assert_eq!(contents, ["tea", "blanket"]);
}
