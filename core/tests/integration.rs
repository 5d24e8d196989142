//! Service scenarios against the live mock backend.
//!
//! # Design
//! Each test starts the mock server on a random port with its own store, then
//! drives `KennelClient` over real HTTP through `ReqwestTransport`. This checks
//! request shapes, status mapping and JSON schemas end-to-end.

use chrono::{Days, NaiveDate, Utc};
use kennel_core::{
    ApiError, ClientConfig, DogPayload, DogStatus, ExpensePayload, KennelClient, LitterPayload,
    Offspring, PageRequest, ParentRole, SalePayload, Sex,
};
use mock_server::model::Store;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

async fn start(store: Store) -> KennelClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, store));
    KennelClient::from_config(&ClientConfig::new(&format!("http://{addr}"))).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dog(name: &str, sex: Sex) -> DogPayload {
    DogPayload {
        name: name.to_string(),
        breed: "Labrador".to_string(),
        birth_date: date(2021, 3, 1),
        sex,
    }
}

fn litter(mother_id: Option<i64>, father_id: Option<i64>, offspring: Vec<Offspring>) -> LitterPayload {
    LitterPayload {
        birth_date: date(2024, 1, 10),
        mother_id,
        father_id,
        offspring,
    }
}

fn expense(amount: Decimal) -> ExpensePayload {
    ExpensePayload {
        description: "Consulta veterinária".to_string(),
        amount,
        date: Some(date(2024, 1, 20)),
    }
}

#[tokio::test]
async fn create_dog_gets_id_and_default_status() {
    let client = start(Store::default()).await;

    let rex = client
        .dogs()
        .create(&DogPayload {
            name: "Rex".to_string(),
            breed: "Labrador".to_string(),
            birth_date: date(2023, 5, 1),
            sex: Sex::Male,
        })
        .await
        .unwrap();

    assert!(rex.id > 0);
    assert_eq!(rex.status, DogStatus::Available);
    assert!(rex.guardian.is_none());

    let fetched = client.dogs().fetch_details(rex.id).await.unwrap();
    assert_eq!(fetched, rex);
}

#[tokio::test]
async fn create_dog_with_blank_name_is_validation() {
    let client = start(Store::default()).await;

    let err = client.dogs().create(&dog("", Sex::Male)).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation { status: 400, ref message } if message == "O nome é obrigatório."));
}

#[tokio::test]
async fn update_replaces_fields_and_unknown_id_is_not_found() {
    let client = start(Store::default()).await;
    let created = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();

    let mut payload = dog("Rex II", Sex::Male);
    payload.breed = "Golden".to_string();
    let updated = client.dogs().update(created.id, &payload).await.unwrap();
    assert_eq!(updated.name, "Rex II");
    assert_eq!(updated.breed, "Golden");
    assert_eq!(updated.status, DogStatus::Available);

    let err = client.dogs().update(999, &payload).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn status_update_moves_dog_to_breeding_stock() {
    let client = start(Store::default()).await;
    let luna = client.dogs().create(&dog("Luna", Sex::Female)).await.unwrap();

    let updated = client
        .dogs()
        .update_status(luna.id, DogStatus::BreedingStock)
        .await
        .unwrap();

    assert_eq!(updated.status, DogStatus::BreedingStock);
}

#[tokio::test]
async fn sale_is_observed_only_after_refetch() {
    let client = start(Store::default().with_guardian(7, "Ana")).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    assert_eq!(rex.status, DogStatus::Available);

    let sale = client
        .sales()
        .sell(
            rex.id,
            &SalePayload {
                new_guardian_id: 7,
                amount: dec!(500),
                date: date(2024, 1, 1),
            },
        )
        .await
        .unwrap();
    assert_eq!(sale.amount, dec!(500));
    assert_eq!(sale.guardian.id, 7);

    let refreshed = client.dogs().fetch_details(rex.id).await.unwrap();
    assert_eq!(refreshed.status, DogStatus::Sold);
    assert_eq!(refreshed.guardian.map(|g| g.id), Some(7));
}

#[tokio::test]
async fn sale_failures_map_to_error_kinds() {
    let client = start(Store::default().with_guardian(7, "Ana")).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    let sales = client.sales();

    let unknown_dog = sales
        .sell(
            404,
            &SalePayload {
                new_guardian_id: 7,
                amount: dec!(500),
                date: date(2024, 1, 1),
            },
        )
        .await
        .unwrap_err();
    assert!(unknown_dog.is_not_found());

    let unknown_guardian = sales
        .sell(
            rex.id,
            &SalePayload {
                new_guardian_id: 99,
                amount: dec!(500),
                date: date(2024, 1, 1),
            },
        )
        .await
        .unwrap_err();
    assert!(unknown_guardian.is_validation());

    let negative = sales
        .sell(
            rex.id,
            &SalePayload {
                new_guardian_id: 7,
                amount: dec!(-1),
                date: date(2024, 1, 1),
            },
        )
        .await
        .unwrap_err();
    assert!(negative.is_validation());

    let still_available = client.dogs().fetch_details(rex.id).await.unwrap();
    assert_eq!(still_available.status, DogStatus::Available);
}

#[tokio::test]
async fn financial_report_without_sale() {
    let client = start(Store::default()).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    client.dogs().add_expense(rex.id, &expense(dec!(100))).await.unwrap();
    client.dogs().add_expense(rex.id, &expense(dec!(50))).await.unwrap();

    let report = client.dogs().fetch_financial_report(rex.id).await.unwrap();

    assert_eq!(report.total_cost, dec!(150));
    assert_eq!(report.profit, dec!(-150));
    assert!(report.sale.is_none());
    assert_eq!(report.expenses.len(), 2);
    assert!(report.verify().is_ok());
}

#[tokio::test]
async fn financial_report_with_sale() {
    let client = start(Store::default().with_guardian(7, "Ana")).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    client.dogs().add_expense(rex.id, &expense(dec!(100))).await.unwrap();
    client
        .sales()
        .sell(
            rex.id,
            &SalePayload {
                new_guardian_id: 7,
                amount: dec!(500),
                date: date(2024, 2, 1),
            },
        )
        .await
        .unwrap();

    let report = client.dogs().fetch_financial_report(rex.id).await.unwrap();

    assert_eq!(report.total_cost, dec!(100));
    assert_eq!(report.sale.as_ref().map(|s| s.amount), Some(dec!(500)));
    assert_eq!(report.profit, dec!(400));
}

#[tokio::test]
async fn financial_report_for_unknown_dog_is_not_found() {
    let client = start(Store::default()).await;

    let err = client.dogs().fetch_financial_report(31).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn litter_with_male_mother_is_rejected() {
    let client = start(Store::default()).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    let thor = client.dogs().create(&dog("Thor", Sex::Male)).await.unwrap();

    let err = client
        .litters()
        .create(&litter(Some(rex.id), Some(thor.id), Vec::new()))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    let page = client.litters().list_paginated(PageRequest::default()).await.unwrap();
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn candidate_parents_come_back_filtered_by_sex() {
    let client = start(Store::default()).await;
    for (name, sex) in [
        ("Rex", Sex::Male),
        ("Luna", Sex::Female),
        ("Thor", Sex::Male),
        ("Mel", Sex::Female),
        ("Nina", Sex::Female),
    ] {
        client.dogs().create(&dog(name, sex)).await.unwrap();
    }

    let mothers = client
        .litters()
        .list_candidate_parents(Sex::Female, PageRequest::default())
        .await
        .unwrap();
    let fathers = client
        .litters()
        .list_candidate_parents(Sex::Male, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(mothers.content.len(), 3);
    assert!(mothers.content.iter().all(|d| d.sex == Sex::Female));
    assert_eq!(fathers.content.len(), 2);
    assert!(fathers.content.iter().all(|d| d.sex == Sex::Male));
}

#[tokio::test]
async fn litter_pages_are_disjoint_and_complete() {
    let client = start(Store::default()).await;
    let luna = client.dogs().create(&dog("Luna", Sex::Female)).await.unwrap();
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    for _ in 0..15 {
        client
            .litters()
            .create(&litter(Some(luna.id), Some(rex.id), Vec::new()))
            .await
            .unwrap();
    }

    let first = client.litters().list_paginated(PageRequest::new(0, 10)).await.unwrap();
    let second = client
        .litters()
        .list_paginated(PageRequest::new(0, 10).next())
        .await
        .unwrap();

    assert_eq!(first.content.len(), 10);
    assert_eq!(second.content.len(), 5);
    let mut ids: Vec<_> = first
        .content
        .iter()
        .chain(second.content.iter())
        .map(|l| l.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 15);
    assert_eq!(first.total_elements, Some(15));
}

#[tokio::test]
async fn litter_with_offspring_creates_puppies() {
    let client = start(Store::default()).await;
    let luna = client.dogs().create(&dog("Luna", Sex::Female)).await.unwrap();
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();

    let created = client
        .litters()
        .create(&litter(
            Some(luna.id),
            Some(rex.id),
            vec![
                Offspring { name: "Bolt".to_string(), sex: Sex::Male },
                Offspring { name: "Pipoca".to_string(), sex: Sex::Female },
            ],
        ))
        .await
        .unwrap();

    let details = client.litters().fetch_details(created.id).await.unwrap();
    assert_eq!(details.mother.as_ref().map(|m| m.id), Some(luna.id));
    assert_eq!(details.father.as_ref().map(|f| f.id), Some(rex.id));
    let names: Vec<_> = details.offspring.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bolt", "Pipoca"]);

    let puppy = client.dogs().fetch_details(details.offspring[0].id).await.unwrap();
    assert_eq!(puppy.birth_date, date(2024, 1, 10));
    assert_eq!(puppy.status, DogStatus::Available);
}

#[tokio::test]
async fn litter_without_offspring_is_accepted() {
    let client = start(Store::default()).await;
    let luna = client.dogs().create(&dog("Luna", Sex::Female)).await.unwrap();

    let created = client
        .litters()
        .create(&litter(Some(luna.id), None, Vec::new()))
        .await
        .unwrap();

    let page = client.litters().list_paginated(PageRequest::default()).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].id, created.id);
    assert_eq!(page.content[0].offspring_count, 0);
    assert!(page.content[0].father.is_none());

    let details = client.litters().fetch_details(created.id).await.unwrap();
    assert!(details.offspring.is_empty());
}

#[tokio::test]
async fn unknown_litter_is_not_found() {
    let client = start(Store::default()).await;

    let err = client.litters().fetch_details(77).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn dog_litters_are_labelled_by_litter_role() {
    let client = start(Store::default()).await;
    let luna = client.dogs().create(&dog("Luna", Sex::Female)).await.unwrap();
    let mel = client.dogs().create(&dog("Mel", Sex::Female)).await.unwrap();
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    let thor = client.dogs().create(&dog("Thor", Sex::Male)).await.unwrap();

    let first = client.litters().create(&litter(Some(luna.id), Some(rex.id), Vec::new())).await.unwrap();
    let second = client.litters().create(&litter(Some(mel.id), Some(rex.id), Vec::new())).await.unwrap();
    client.litters().create(&litter(Some(luna.id), Some(thor.id), Vec::new())).await.unwrap();

    let litters = client.dogs().list_litters(rex.id).await.unwrap();

    let ids: Vec<_> = litters.iter().map(|l| l.litter.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(litters.iter().all(|l| l.role == Some(ParentRole::Father)));
    assert!(litters.iter().all(|l| l.is_consistent_with(Sex::Male)));

    let as_mother = client.dogs().list_litters(luna.id).await.unwrap();
    assert_eq!(as_mother.len(), 2);
    assert!(as_mother.iter().all(|l| l.role == Some(ParentRole::Mother)));
}

#[tokio::test]
async fn guardians_are_listed_in_full() {
    let client = start(Store::default().with_guardian(1, "Ana").with_guardian(7, "Bruno")).await;

    let guardians = client.guardians().list_all().await.unwrap();

    let ids: Vec<_> = guardians.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![1, 7]);
}

#[tokio::test]
async fn expense_is_created_without_response_body() {
    let client = start(Store::default()).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();

    client.dogs().add_expense(rex.id, &expense(dec!(80))).await.unwrap();

    let missing = client.dogs().add_expense(rex.id + 1, &expense(dec!(80))).await.unwrap_err();
    assert!(missing.is_not_found());
    let report = client.dogs().fetch_financial_report(rex.id).await.unwrap();
    assert_eq!(report.expenses.len(), 1);
    assert_eq!(report.expenses[0].amount, dec!(80));
}

#[tokio::test]
async fn dashboard_summarizes_the_last_thirty_days() {
    let today = Utc::now().date_naive();
    let long_ago = today.checked_sub_days(Days::new(60)).unwrap();
    let client = start(Store::default().with_guardian(7, "Ana")).await;
    let rex = client.dogs().create(&dog("Rex", Sex::Male)).await.unwrap();
    let luna = client.dogs().create(&dog("Luna", Sex::Female)).await.unwrap();

    let recent = |amount| ExpensePayload {
        date: Some(today),
        ..expense(amount)
    };
    client.dogs().add_expense(rex.id, &recent(dec!(120.50))).await.unwrap();
    client.dogs().add_expense(luna.id, &recent(dec!(30))).await.unwrap();
    client
        .dogs()
        .add_expense(
            luna.id,
            &ExpensePayload {
                date: Some(long_ago),
                ..expense(dec!(999))
            },
        )
        .await
        .unwrap();
    client
        .sales()
        .sell(
            rex.id,
            &SalePayload {
                new_guardian_id: 7,
                amount: dec!(800),
                date: today,
            },
        )
        .await
        .unwrap();

    let summary = client.dashboard().fetch_finance_summary().await.unwrap();
    assert_eq!(summary.revenue, dec!(800));
    assert_eq!(summary.expenses, dec!(150.50));
    assert_eq!(summary.profit, dec!(649.50));
    assert!(summary.verify().is_ok());

    let stats = client.dashboard().fetch_stats().await.unwrap();
    assert_eq!(stats.available_dogs, 1);
    assert_eq!(stats.guardians, 1);
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = KennelClient::from_config(&ClientConfig::new(&format!("http://{addr}"))).unwrap();

    let err = client.guardians().list_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
