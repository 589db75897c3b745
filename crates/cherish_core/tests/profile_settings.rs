use cherish_core::db::open_db_in_memory;
use cherish_core::{
    CollectionStore, NewPartner, Partner, PartnerPatch, ProfileError, ProfileService,
    DEFAULT_THEME_COLOR,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn onboarding_applies_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = ProfileService::try_new(&conn).unwrap();

    assert!(service.current().unwrap().is_none());

    let partner = service
        .onboard(NewPartner::new("Ana", date(2022, 3, 10)))
        .unwrap();
    assert_eq!(partner.partner_name, "Ana");
    assert_eq!(partner.photo_url, None);
    assert_eq!(partner.theme_color, DEFAULT_THEME_COLOR);

    let current = service.current().unwrap().unwrap();
    assert_eq!(current, partner);
}

#[test]
fn second_onboarding_is_refused() {
    let conn = open_db_in_memory().unwrap();
    let service = ProfileService::try_new(&conn).unwrap();

    service
        .onboard(NewPartner::new("Ana", date(2022, 3, 10)))
        .unwrap();
    let err = service
        .onboard(NewPartner::new("Sam", date(2023, 1, 1)))
        .unwrap_err();
    assert!(matches!(err, ProfileError::AlreadyOnboarded));

    let current = service.current().unwrap().unwrap();
    assert_eq!(current.partner_name, "Ana");
}

#[test]
fn current_uses_first_record_when_surplus_exists() {
    let conn = open_db_in_memory().unwrap();

    // Seed two profiles through the raw store; the service never creates a
    // second one itself.
    let store: CollectionStore<Partner> = CollectionStore::try_new(&conn).unwrap();
    store
        .create(NewPartner::new("Older", date(2020, 1, 1)))
        .unwrap();
    store
        .create(NewPartner::new("Newer", date(2021, 1, 1)))
        .unwrap();

    let service = ProfileService::try_new(&conn).unwrap();
    let current = service.current().unwrap().unwrap();
    assert_eq!(current.partner_name, "Newer");
}

#[test]
fn settings_update_merges_and_clears_photo() {
    let conn = open_db_in_memory().unwrap();
    let service = ProfileService::try_new(&conn).unwrap();

    let partner = service
        .onboard(NewPartner {
            partner_name: "Ana".to_string(),
            start_date: date(2022, 3, 10),
            photo_url: Some("file://ana.png".to_string()),
            theme_color: "warm".to_string(),
        })
        .unwrap();

    let updated = service
        .update_settings(
            partner.meta.id,
            PartnerPatch {
                theme_color: Some("rose".to_string()),
                photo_url: Some(None),
                ..PartnerPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.theme_color, "rose");
    assert_eq!(updated.photo_url, None);
    assert_eq!(updated.partner_name, "Ana");
    assert_eq!(updated.start_date, date(2022, 3, 10));
}

#[test]
fn days_together_counts_whole_days() {
    let partner = sample_partner(date(2024, 6, 10));
    assert_eq!(
        ProfileService::days_together(&partner, date(2024, 6, 15)),
        5
    );
    assert_eq!(
        ProfileService::days_together(&partner, date(2024, 6, 10)),
        0
    );
}

#[test]
fn time_together_phrases_years_and_months() {
    let partner = sample_partner(date(2022, 3, 10));
    assert_eq!(
        ProfileService::time_together(&partner, date(2024, 6, 15)),
        "2 years, 3 months"
    );
}

#[test]
fn time_together_uses_day_counts_under_a_month() {
    let partner = sample_partner(date(2024, 6, 3));
    assert_eq!(
        ProfileService::time_together(&partner, date(2024, 6, 15)),
        "12 days"
    );
}

#[test]
fn time_together_singular_month() {
    let partner = sample_partner(date(2024, 5, 10));
    assert_eq!(
        ProfileService::time_together(&partner, date(2024, 6, 15)),
        "1 month"
    );
}

#[test]
fn time_together_on_the_start_date() {
    let partner = sample_partner(date(2024, 6, 15));
    assert_eq!(
        ProfileService::time_together(&partner, date(2024, 6, 15)),
        "It starts today"
    );
}

fn sample_partner(start_date: NaiveDate) -> Partner {
    let conn = open_db_in_memory().unwrap();
    let service = ProfileService::try_new(&conn).unwrap();
    service.onboard(NewPartner::new("Ana", start_date)).unwrap()
}
