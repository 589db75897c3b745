use cherish_core::db::open_db_in_memory;
use cherish_core::{MemoryCategory, MemoryService, NewMemory};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn draft(category: MemoryCategory, day: NaiveDate, notes: &str) -> NewMemory {
    NewMemory {
        category,
        memory_date: day,
        location: None,
        notes: Some(notes.to_string()),
        photo_url: None,
    }
}

#[test]
fn log_then_list_returns_newest_logged_first() {
    let conn = open_db_in_memory().unwrap();
    let service = MemoryService::try_new(&conn).unwrap();

    service
        .log_memory(draft(MemoryCategory::Dining, date(2024, 1, 5), "first"))
        .unwrap();
    service
        .log_memory(draft(MemoryCategory::Gift, date(2024, 1, 2), "second"))
        .unwrap();

    let listed = service.list().unwrap();
    let notes: Vec<_> = listed
        .iter()
        .map(|memory| memory.notes.clone().unwrap())
        .collect();
    assert_eq!(notes, ["second", "first"]);
}

#[test]
fn by_date_desc_orders_on_occurrence_date() {
    let conn = open_db_in_memory().unwrap();
    let service = MemoryService::try_new(&conn).unwrap();

    service
        .log_memory(draft(MemoryCategory::Dining, date(2024, 1, 5), "middle"))
        .unwrap();
    service
        .log_memory(draft(MemoryCategory::Gift, date(2024, 1, 2), "oldest"))
        .unwrap();
    service
        .log_memory(draft(MemoryCategory::Date, date(2024, 1, 9), "newest"))
        .unwrap();

    let ordered = service.by_date_desc().unwrap();
    let notes: Vec<_> = ordered
        .iter()
        .map(|memory| memory.notes.clone().unwrap())
        .collect();
    assert_eq!(notes, ["newest", "middle", "oldest"]);
}

#[test]
fn recent_truncates_to_the_requested_count() {
    let conn = open_db_in_memory().unwrap();
    let service = MemoryService::try_new(&conn).unwrap();

    service
        .log_memory(draft(MemoryCategory::Dining, date(2024, 1, 5), "middle"))
        .unwrap();
    service
        .log_memory(draft(MemoryCategory::Gift, date(2024, 1, 2), "oldest"))
        .unwrap();
    service
        .log_memory(draft(MemoryCategory::Date, date(2024, 1, 9), "newest"))
        .unwrap();

    let recent = service.recent(2).unwrap();
    let notes: Vec<_> = recent
        .iter()
        .map(|memory| memory.notes.clone().unwrap())
        .collect();
    assert_eq!(notes, ["newest", "middle"]);

    assert!(service.recent(0).unwrap().is_empty());
}

#[test]
fn delete_removes_only_the_addressed_memory() {
    let conn = open_db_in_memory().unwrap();
    let service = MemoryService::try_new(&conn).unwrap();

    let kept = service
        .log_memory(draft(MemoryCategory::Dining, date(2024, 1, 5), "keep"))
        .unwrap();
    let dropped = service
        .log_memory(draft(MemoryCategory::Conflict, date(2024, 1, 2), "drop"))
        .unwrap();

    assert!(service.delete(dropped.meta.id).unwrap());
    assert!(!service.delete(dropped.meta.id).unwrap());

    let listed = service.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].meta.id, kept.meta.id);
}
