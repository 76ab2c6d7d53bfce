use api_types::Patch;
use api_types::debt_account::{DebtAccountNew, DebtAccountUpdate};
use api_types::savings_account::{SavingsAccountNew, SavingsAccountUpdate};
use chrono::NaiveDate;
use ledger::Ledger;
use migration::MigratorTrait;
use sea_orm::Database;
use uuid::Uuid;

async fn ledger() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Ledger::builder().database(db).build().await.unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn car_loan() -> DebtAccountNew {
    DebtAccountNew {
        name: "Car loan".to_string(),
        amount_owed: 333000.0,
        country_currency_code: "ZAR".to_string(),
        target_payoff_date: date(2020, 6, 30),
    }
}

fn holiday() -> SavingsAccountNew {
    SavingsAccountNew {
        name: "Holiday".to_string(),
        savings_value: 1000.0,
        savings_target: Some(20000.0),
        country_currency_code: "ZAR".to_string(),
    }
}

#[tokio::test]
async fn create_debt_account_starts_at_amount_owed() {
    let ledger = ledger().await;
    let user_id = Uuid::new_v4();

    ledger
        .debt_accounts()
        .create_debt_account_for_user(user_id, car_loan())
        .await
        .unwrap();

    let list = ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap();
    assert_eq!(list.user_id, user_id);
    assert_eq!(list.debt_accounts.len(), 1);
    let account = &list.debt_accounts[0];
    assert_eq!(account.name, "Car loan");
    assert_eq!(account.user_id, user_id);
    assert_eq!(account.country_currency_code, "ZAR");
    assert_eq!(account.initial_amount_owed, 333000.0);
    assert_eq!(account.current_amount_owed, 333000.0);
    assert_eq!(account.target_payoff_date, date(2020, 6, 30));
    assert_eq!(account.actual_payoff_date, None);
}

#[tokio::test]
async fn add_and_subtract_move_current_amount_owed() {
    let ledger = ledger().await;
    let user_id = Uuid::new_v4();
    ledger
        .debt_accounts()
        .create_debt_account_for_user(user_id, car_loan())
        .await
        .unwrap();
    let id = ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0]
        .debt_account_id;

    ledger
        .debt_accounts()
        .add_amount_to_debt_account_for_user(user_id, id, 2500.0)
        .await
        .unwrap();
    ledger
        .debt_accounts()
        .subtract_amount_from_debt_account_for_user(user_id, id, 500.0)
        .await
        .unwrap();

    let account = &ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0];
    assert_eq!(account.current_amount_owed, 335000.0);
    assert_eq!(account.initial_amount_owed, 333000.0);
}

#[tokio::test]
async fn subtract_is_not_clamped() {
    let ledger = ledger().await;
    let user_id = Uuid::new_v4();
    ledger
        .savings_accounts()
        .create_savings_account_for_user(user_id, holiday())
        .await
        .unwrap();
    let id = ledger
        .savings_accounts()
        .get_savings_accounts_for_user(user_id)
        .await
        .unwrap()
        .savings_accounts[0]
        .savings_account_id;

    ledger
        .savings_accounts()
        .subtract_amount_from_savings_account_for_user(user_id, id, 1500.0)
        .await
        .unwrap();

    let account = &ledger
        .savings_accounts()
        .get_savings_accounts_for_user(user_id)
        .await
        .unwrap()
        .savings_accounts[0];
    assert_eq!(account.current_savings_value, -500.0);
}

#[tokio::test]
async fn add_amount_on_another_users_account_changes_nothing() {
    let ledger = ledger().await;
    let owner = Uuid::new_v4();
    ledger
        .debt_accounts()
        .create_debt_account_for_user(owner, car_loan())
        .await
        .unwrap();
    let id = ledger
        .debt_accounts()
        .get_debt_accounts_for_user(owner)
        .await
        .unwrap()
        .debt_accounts[0]
        .debt_account_id;

    ledger
        .debt_accounts()
        .add_amount_to_debt_account_for_user(Uuid::new_v4(), id, 2500.0)
        .await
        .unwrap();

    let account = &ledger
        .debt_accounts()
        .get_debt_accounts_for_user(owner)
        .await
        .unwrap()
        .debt_accounts[0];
    assert_eq!(account.current_amount_owed, 333000.0);
}

#[tokio::test]
async fn name_only_update_keeps_currency() {
    let ledger = ledger().await;
    let user_id = Uuid::new_v4();
    ledger
        .debt_accounts()
        .create_debt_account_for_user(user_id, car_loan())
        .await
        .unwrap();
    let id = ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0]
        .debt_account_id;

    ledger
        .debt_accounts()
        .update_debt_account_for_user(
            user_id,
            id,
            DebtAccountUpdate {
                name: Some("Old car".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let account = &ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0];
    assert_eq!(account.name, "Old car");
    assert_eq!(account.country_currency_code, "ZAR");
    assert_eq!(account.current_amount_owed, 333000.0);
    assert_eq!(account.target_payoff_date, date(2020, 6, 30));
}

#[tokio::test]
async fn actual_payoff_date_can_be_set_and_cleared() {
    let ledger = ledger().await;
    let user_id = Uuid::new_v4();
    ledger
        .debt_accounts()
        .create_debt_account_for_user(user_id, car_loan())
        .await
        .unwrap();
    let id = ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0]
        .debt_account_id;

    ledger
        .debt_accounts()
        .update_debt_account_for_user(
            user_id,
            id,
            DebtAccountUpdate {
                actual_payoff_date: Patch::Value(date(2020, 5, 1)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let account = &ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0];
    assert_eq!(account.actual_payoff_date, Some(date(2020, 5, 1)));

    ledger
        .debt_accounts()
        .update_debt_account_for_user(
            user_id,
            id,
            DebtAccountUpdate {
                actual_payoff_date: Patch::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let account = &ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await
        .unwrap()
        .debt_accounts[0];
    assert_eq!(account.actual_payoff_date, None);
}

#[tokio::test]
async fn savings_account_lifecycle() {
    let ledger = ledger().await;
    let user_id = Uuid::new_v4();
    ledger
        .savings_accounts()
        .create_savings_account_for_user(user_id, holiday())
        .await
        .unwrap();

    let list = ledger
        .savings_accounts()
        .get_savings_accounts_for_user(user_id)
        .await
        .unwrap();
    assert_eq!(list.user_id, user_id);
    let account = &list.savings_accounts[0];
    assert_eq!(account.initial_savings_value, 1000.0);
    assert_eq!(account.current_savings_value, 1000.0);
    assert_eq!(account.savings_target, Some(20000.0));
    let id = account.savings_account_id;

    ledger
        .savings_accounts()
        .add_amount_to_savings_account_for_user(user_id, id, 2500.0)
        .await
        .unwrap();
    ledger
        .savings_accounts()
        .update_savings_account_for_user(
            user_id,
            id,
            SavingsAccountUpdate {
                target_savings_amount: Patch::Null,
                name: Some("Travel".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let account = &ledger
        .savings_accounts()
        .get_savings_accounts_for_user(user_id)
        .await
        .unwrap()
        .savings_accounts[0];
    assert_eq!(account.current_savings_value, 3500.0);
    assert_eq!(account.savings_target, None);
    assert_eq!(account.name, "Travel");
    assert_eq!(account.country_currency_code, "ZAR");

    ledger
        .savings_accounts()
        .delete_savings_account_for_user(user_id, id)
        .await
        .unwrap();
    assert!(
        ledger
            .savings_accounts()
            .get_savings_accounts_for_user(user_id)
            .await
            .unwrap()
            .savings_accounts
            .is_empty()
    );
}

#[tokio::test]
async fn deleting_missing_accounts_is_not_an_error() {
    let ledger = ledger().await;
    assert!(
        ledger
            .debt_accounts()
            .delete_debt_account_for_user(Uuid::new_v4(), Uuid::new_v4())
            .await
            .is_ok()
    );
    assert!(
        ledger
            .savings_accounts()
            .delete_savings_account_for_user(Uuid::new_v4(), Uuid::new_v4())
            .await
            .is_ok()
    );
}
