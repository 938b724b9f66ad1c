mod common;

use std::str::FromStr;

use chrono::NaiveDate;
use erp_backend::{
    common::{
        db_utils,
        error::{AppError, UniqueField},
    },
    models::{
        company::NewCompany,
        inventory::MovementKind,
        money::Money,
        person::{NewPerson, PersonKind},
        user::{AccessLevel, NewUser},
    },
};
use rust_decimal::Decimal;

use common::{item, movement, setup_state};

fn company(legal_name: &str, tax_id: Option<&str>) -> NewCompany {
    NewCompany {
        legal_name: legal_name.to_string(),
        tax_id: tax_id.map(str::to_string),
        ..NewCompany::default()
    }
}

#[tokio::test]
async fn migrations_can_run_twice() {
    let state = setup_state().await;

    db_utils::run_migrations(&state.db_pool)
        .await
        .expect("second migration run should be a no-op");

    let counts = state.dashboard_repo.counts().await.unwrap();
    assert_eq!(counts.companies, 0);
}

#[tokio::test]
async fn duplicate_company_tax_id_is_rejected_and_count_unchanged() {
    let state = setup_state().await;
    let repo = &state.company_repo;

    repo.create_company(&company("ACME Ltda", Some("12.345.678/0001-99")))
        .await
        .unwrap();
    let before = state.dashboard_repo.counts().await.unwrap();

    let err = repo
        .create_company(&company("Outra Ltda", Some("12.345.678/0001-99")))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateKey(UniqueField::CompanyTaxId)));
    let after = state.dashboard_repo.counts().await.unwrap();
    assert_eq!(after.companies, before.companies);
}

#[tokio::test]
async fn companies_without_tax_id_do_not_collide() {
    let state = setup_state().await;

    state.company_repo.create_company(&company("Beta", None)).await.unwrap();
    state.company_repo.create_company(&company("Alfa", None)).await.unwrap();

    let companies = state.company_repo.list_companies().await.unwrap();
    let names: Vec<_> = companies.iter().map(|c| c.legal_name.as_str()).collect();
    assert_eq!(names, vec!["Alfa", "Beta"]);
}

#[tokio::test]
async fn person_fields_are_stored_and_tax_id_is_unique() {
    let state = setup_state().await;
    let new = NewPerson {
        name: "Maria".to_string(),
        tax_id: Some("123.456.789-00".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
        kind: PersonKind::Supplier,
        ..NewPerson::default()
    };

    let created = state.person_repo.create_person(&new).await.unwrap();
    assert_eq!(created.kind, PersonKind::Supplier);
    assert_eq!(created.birth_date, NaiveDate::from_ymd_opt(1990, 5, 17));

    let err = state.person_repo.create_person(&new).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(UniqueField::PersonTaxId)));

    let people = state.person_repo.list_people().await.unwrap();
    assert_eq!(people.len(), 1);
}

#[tokio::test]
async fn users_get_defaults_and_duplicate_email_fails() {
    let state = setup_state().await;
    let new = NewUser {
        name: "Admin".to_string(),
        email: "admin@erp.local".to_string(),
        password: "segredo".to_string(),
        ..NewUser::default()
    };

    let user = state.user_repo.create_user(&new).await.unwrap();
    assert_eq!(user.access_level, AccessLevel::User);
    assert!(user.active);

    let err = state.user_repo.create_user(&new).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(UniqueField::UserEmail)));
    assert_eq!(state.dashboard_repo.counts().await.unwrap().users, 1);
}

#[tokio::test]
async fn duplicate_item_code_keeps_a_single_active_entry() {
    let state = setup_state().await;
    let repo = &state.inventory_repo;

    repo.create_item(&item("A1", "Widget")).await.unwrap();
    let err = repo.create_item(&item("A1", "Other")).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(UniqueField::ItemCode)));

    let active = repo.list_items(true).await.unwrap();
    let a1: Vec<_> = active.iter().filter(|i| i.code.as_deref() == Some("A1")).collect();
    assert_eq!(a1.len(), 1);
    assert_eq!(a1[0].description, "Widget");
}

#[tokio::test]
async fn active_listing_never_returns_inactive_items() {
    let state = setup_state().await;
    let repo = &state.inventory_repo;

    repo.create_item(&item("B2", "Bolt")).await.unwrap();
    let mut retired = item("C3", "Cable");
    retired.active = false;
    repo.create_item(&retired).await.unwrap();

    let active = repo.list_items(true).await.unwrap();
    assert!(active.iter().all(|i| i.active));
    assert_eq!(active.len(), 1);

    let all = repo.list_items(false).await.unwrap();
    let descriptions: Vec<_> = all.iter().map(|i| i.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Bolt", "Cable"]);
}

#[tokio::test]
async fn prices_keep_two_decimal_places() {
    let state = setup_state().await;
    let mut new = item("P1", "Parafuso");
    new.cost_price = Some(Money::new(Decimal::from_str("1.5").unwrap()));
    new.sale_price = Some(Money::new(Decimal::from_str("2.999").unwrap()));

    state.inventory_repo.create_item(&new).await.unwrap();
    let stored = &state.inventory_repo.list_items(true).await.unwrap()[0];

    assert_eq!(stored.cost_price.unwrap().to_string(), "1.50");
    assert_eq!(stored.sale_price.unwrap().to_string(), "3.00");
}

#[tokio::test]
async fn movement_for_missing_item_is_a_foreign_key_violation() {
    let state = setup_state().await;

    let err = state
        .inventory_repo
        .create_movement(&movement(999, 10, MovementKind::In))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ForeignKeyViolation(999)));
    assert!(state.inventory_repo.list_movements().await.unwrap().is_empty());
}

#[tokio::test]
async fn movements_are_listed_newest_first() {
    let state = setup_state().await;
    let widget = state.inventory_repo.create_item(&item("A1", "Widget")).await.unwrap();

    let first = state
        .inventory_repo
        .create_movement(&movement(widget.id, 10, MovementKind::In))
        .await
        .unwrap();
    let listed = state.inventory_repo.list_movements().await.unwrap();
    assert_eq!(listed[0].movement.id, first.id);

    let second = state
        .inventory_repo
        .create_movement(&movement(widget.id, 4, MovementKind::Out))
        .await
        .unwrap();
    let listed = state.inventory_repo.list_movements().await.unwrap();

    let ids: Vec<_> = listed.iter().map(|m| m.movement.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(listed[0].movement.moved_at >= listed[1].movement.moved_at);
    assert!(listed.iter().all(|m| m.item_description == "Widget"));
}

#[tokio::test]
async fn ledger_accepts_negative_implied_stock() {
    let state = setup_state().await;
    let widget = state.inventory_repo.create_item(&item("A1", "Widget")).await.unwrap();

    let out = state
        .inventory_repo
        .create_movement(&movement(widget.id, 50, MovementKind::Out))
        .await
        .unwrap();
    let adjust = state
        .inventory_repo
        .create_movement(&movement(widget.id, -7, MovementKind::Adjustment))
        .await
        .unwrap();

    assert_eq!(out.quantity, 50);
    assert_eq!(adjust.quantity, -7);
    assert_eq!(state.inventory_repo.list_movements().await.unwrap().len(), 2);
}

#[tokio::test]
async fn dashboard_counts_track_new_company() {
    let state = setup_state().await;
    let before = state.dashboard_repo.counts().await.unwrap();

    state.company_repo.create_company(&company("Gama", Some("1"))).await.unwrap();

    let after = state.dashboard_repo.counts().await.unwrap();
    assert_eq!(after.companies, before.companies + 1);
    assert_eq!(after.people, before.people);
    assert_eq!(after.items, before.items);
}
