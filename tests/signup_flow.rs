mod common;

use serde_json::json;

use mergington::database::activities_repo::{self, NewActivity};
use mergington::database::seed;
use mergington::error::AppError;
use mergington::services::{activities_service, signup_service};

#[tokio::test]
async fn seeding_fills_empty_store_and_is_idempotent() {
    let pool = common::test_pool().await;

    // A second run against a non-empty store must not duplicate rows.
    seed::seed_if_empty(&pool).await.expect("second seed run");

    let overview = activities_service::activities_overview(&pool)
        .await
        .expect("overview");
    assert_eq!(overview.len(), 9);
    assert!(overview.contains_key("Chess Club"));
    assert!(overview.contains_key("Debate Team"));

    for (name, details) in &overview {
        assert_eq!(
            details["participants"],
            json!([]),
            "{} should start without participants",
            name
        );
    }
    assert_eq!(overview["Chess Club"]["max_participants"], json!(12));
    assert_eq!(
        overview["Chess Club"]["schedule"],
        json!("Fridays, 3:30 PM - 5:00 PM")
    );
}

#[tokio::test]
async fn signup_unknown_activity_is_not_found() {
    let pool = common::test_pool().await;

    let err = signup_service::signup(&pool, "Knitting Circle", "amy@mergington.edu")
        .await
        .expect_err("unknown activity must fail");
    assert!(matches!(err, AppError::ActivityNotFound));
}

#[tokio::test]
async fn unregister_unknown_activity_is_not_found() {
    let pool = common::test_pool().await;

    let err = signup_service::unregister(&pool, "Knitting Circle", "amy@mergington.edu")
        .await
        .expect_err("unknown activity must fail");
    assert!(matches!(err, AppError::ActivityNotFound));
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let pool = common::test_pool().await;

    signup_service::signup(&pool, "Chess Club", "amy@mergington.edu")
        .await
        .expect("first signup");

    let err = signup_service::signup(&pool, "Chess Club", "amy@mergington.edu")
        .await
        .expect_err("second signup must fail");
    assert!(matches!(err, AppError::AlreadySignedUp));
}

#[tokio::test]
async fn signup_fails_once_activity_is_full() {
    let pool = common::test_pool().await;

    // Math Club caps at 10. The tenth signup (count = 9 before it) still fits.
    for i in 0..10 {
        signup_service::signup(&pool, "Math Club", &format!("student{}@mergington.edu", i))
            .await
            .unwrap_or_else(|e| panic!("signup {} should fit: {}", i, e));
    }

    let err = signup_service::signup(&pool, "Math Club", "late@mergington.edu")
        .await
        .expect_err("eleventh signup must fail");
    assert!(matches!(err, AppError::ActivityFull));

    // The full check never created a participation for the rejected student.
    let overview = activities_service::activities_overview(&pool)
        .await
        .expect("overview");
    let participants = overview["Math Club"]["participants"]
        .as_array()
        .expect("participants array");
    assert_eq!(participants.len(), 10);
}

#[tokio::test]
async fn zero_capacity_means_no_cap() {
    let pool = common::test_pool().await;

    activities_repo::insert(
        &pool,
        &NewActivity {
            name: "Open Mic",
            description: "Perform in front of the school",
            schedule: "Saturdays, 6:00 PM - 8:00 PM",
            max_participants: 0,
        },
    )
    .await
    .expect("insert uncapped activity");

    for i in 0..5 {
        signup_service::signup(&pool, "Open Mic", &format!("singer{}@mergington.edu", i))
            .await
            .unwrap_or_else(|e| panic!("uncapped signup {} should pass: {}", i, e));
    }
}

#[tokio::test]
async fn unregister_requires_an_existing_signup() {
    let pool = common::test_pool().await;

    // Email never seen before.
    let err = signup_service::unregister(&pool, "Chess Club", "ghost@mergington.edu")
        .await
        .expect_err("unknown student must fail");
    assert!(matches!(err, AppError::NotSignedUp));

    // Known student, but signed up elsewhere.
    signup_service::signup(&pool, "Art Club", "amy@mergington.edu")
        .await
        .expect("signup");
    let err = signup_service::unregister(&pool, "Chess Club", "amy@mergington.edu")
        .await
        .expect_err("wrong activity must fail");
    assert!(matches!(err, AppError::NotSignedUp));
}

#[tokio::test]
async fn signup_unregister_round_trip_leaves_no_residue() {
    let pool = common::test_pool().await;

    signup_service::signup(&pool, "Drama Club", "amy@mergington.edu")
        .await
        .expect("first signup");
    signup_service::unregister(&pool, "Drama Club", "amy@mergington.edu")
        .await
        .expect("unregister");

    let overview = activities_service::activities_overview(&pool)
        .await
        .expect("overview");
    assert_eq!(overview["Drama Club"]["participants"], json!([]));

    // A fresh signup must succeed again after the round trip.
    signup_service::signup(&pool, "Drama Club", "amy@mergington.edu")
        .await
        .expect("signup after unregister");

    let overview = activities_service::activities_overview(&pool)
        .await
        .expect("overview");
    assert_eq!(
        overview["Drama Club"]["participants"],
        json!(["amy@mergington.edu"])
    );
}

#[tokio::test]
async fn participants_are_listed_in_signup_order() {
    let pool = common::test_pool().await;

    signup_service::signup(&pool, "Soccer Team", "first@mergington.edu")
        .await
        .expect("first signup");
    signup_service::signup(&pool, "Soccer Team", "second@mergington.edu")
        .await
        .expect("second signup");
    signup_service::signup(&pool, "Soccer Team", "third@mergington.edu")
        .await
        .expect("third signup");

    let overview = activities_service::activities_overview(&pool)
        .await
        .expect("overview");
    assert_eq!(
        overview["Soccer Team"]["participants"],
        json!([
            "first@mergington.edu",
            "second@mergington.edu",
            "third@mergington.edu"
        ])
    );
}
