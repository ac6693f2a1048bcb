//! Integration tests for the report store and lifecycle.
//!
//! Exercises the repository layer against a real database:
//! - Report creation defaults (folio, counters, status)
//! - Partial updates and the listing order
//! - Public visibility cutoff in SQL
//! - Submission-guard timestamp feed
//! - Tanker assignment and the SET NULL referential policy

use chrono::{Duration, Utc};
use sqlx::PgPool;
use waterline_core::report::{STATUS_PENDING, STATUS_RESOLVED};
use waterline_core::visibility::PUBLIC_RESOLVED_AGE_OUT_DAYS;
use waterline_db::models::report::UpdateReport;
use waterline_db::models::tanker::{CreateTanker, TANKER_DISPATCHED};
use waterline_db::models::user::CreateUser;
use waterline_db::repositories::report_repo::NewReport;
use waterline_db::repositories::{ReportRepo, TankerRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.test"),
        password_hash: "$argon2id$test".to_string(),
        role: "citizen".to_string(),
    }
}

fn new_report(created_by: Option<i64>) -> NewReport<'static> {
    NewReport {
        problem_type: "leak",
        description: "water running down the street",
        longitude: -98.88,
        latitude: 19.31,
        address: None,
        photo_url: None,
        created_by,
    }
}

// ---------------------------------------------------------------------------
// Test: creation defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_sets_folio_and_engine_defaults(pool: PgPool) {
    let report = ReportRepo::create(&pool, &new_report(None)).await.unwrap();

    assert!(report.folio.starts_with("WL-"));
    assert_eq!(report.status, STATUS_PENDING);
    assert_eq!(report.validation_count, 0);
    assert_eq!(report.priority, 0);
    assert!(report.created_by.is_none());

    // Folio lookup returns the identical row.
    let again = ReportRepo::find_by_folio(&pool, &report.folio)
        .await
        .unwrap()
        .expect("folio lookup");
    assert_eq!(again.id, report.id);
    assert_eq!(again.folio, report.folio);
    assert_eq!(again.created_at, report.created_at);
}

// ---------------------------------------------------------------------------
// Test: listing order is priority desc, then recency, stable tie-break
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn listing_orders_by_priority_then_recency(pool: PgPool) {
    let low = ReportRepo::create(&pool, &new_report(None)).await.unwrap();
    let high = ReportRepo::create(&pool, &new_report(None)).await.unwrap();

    let patch = UpdateReport {
        priority: Some(40),
        ..Default::default()
    };
    ReportRepo::update(&pool, high.id, &patch).await.unwrap();

    let listed = ReportRepo::list_filtered(&pool, None, None, None, 50, 0)
        .await
        .unwrap();
    let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![high.id, low.id]);
}

// ---------------------------------------------------------------------------
// Test: public visibility cutoff excludes old resolved reports only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn public_listing_ages_out_old_resolved_reports(pool: PgPool) {
    let old_resolved = ReportRepo::create(&pool, &new_report(None)).await.unwrap();
    let old_pending = ReportRepo::create(&pool, &new_report(None)).await.unwrap();

    // Backdate both well past the age-out window; resolve one.
    sqlx::query(
        "UPDATE reports SET created_at = now() - interval '31 days', status = $2 WHERE id = $1",
    )
    .bind(old_resolved.id)
    .bind(STATUS_RESOLVED)
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("UPDATE reports SET created_at = now() - interval '400 days' WHERE id = $1")
        .bind(old_pending.id)
        .execute(&pool)
        .await
        .unwrap();

    let cutoff = Utc::now() - Duration::days(PUBLIC_RESOLVED_AGE_OUT_DAYS);

    let public = ReportRepo::list_filtered(&pool, None, None, Some(cutoff), 50, 0)
        .await
        .unwrap();
    let public_ids: Vec<i64> = public.iter().map(|r| r.id).collect();
    assert!(!public_ids.contains(&old_resolved.id));
    assert!(public_ids.contains(&old_pending.id));

    // Staff listing (no cutoff) still sees everything.
    let staff = ReportRepo::list_filtered(&pool, None, None, None, 50, 0)
        .await
        .unwrap();
    assert_eq!(staff.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: latest creation timestamp feeds the submission guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn latest_created_at_tracks_most_recent_report(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("reporter")).await.unwrap();

    let none = ReportRepo::latest_created_at_for_user(&pool, user.id)
        .await
        .unwrap();
    assert!(none.is_none());

    let report = ReportRepo::create(&pool, &new_report(Some(user.id)))
        .await
        .unwrap();

    let latest = ReportRepo::latest_created_at_for_user(&pool, user.id)
        .await
        .unwrap()
        .expect("a report exists");
    assert_eq!(latest, report.created_at);
}

// ---------------------------------------------------------------------------
// Test: tanker assignment and deletion policy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn assign_tanker_dispatches_available_unit(pool: PgPool) {
    let report = ReportRepo::create(&pool, &new_report(None)).await.unwrap();
    let tanker = TankerRepo::create(
        &pool,
        &CreateTanker {
            economic_number: "P-07".to_string(),
        },
    )
    .await
    .unwrap();

    let (report, tanker) = ReportRepo::assign_tanker(&pool, report.id, tanker.id)
        .await
        .unwrap()
        .expect("tanker was available");
    assert_eq!(report.assigned_tanker_id, Some(tanker.id));
    assert_eq!(tanker.status, TANKER_DISPATCHED);
    assert_eq!(tanker.current_report_id, Some(report.id));

    // A dispatched tanker cannot be assigned again.
    let other = ReportRepo::create(&pool, &new_report(None)).await.unwrap();
    let refused = ReportRepo::assign_tanker(&pool, other.id, tanker.id)
        .await
        .unwrap();
    assert!(refused.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_tanker_nulls_the_report_reference(pool: PgPool) {
    let report = ReportRepo::create(&pool, &new_report(None)).await.unwrap();
    let tanker = TankerRepo::create(
        &pool,
        &CreateTanker {
            economic_number: "P-12".to_string(),
        },
    )
    .await
    .unwrap();
    ReportRepo::assign_tanker(&pool, report.id, tanker.id)
        .await
        .unwrap()
        .expect("tanker was available");

    assert!(TankerRepo::delete(&pool, tanker.id).await.unwrap());

    let report = ReportRepo::find_by_id(&pool, report.id)
        .await
        .unwrap()
        .expect("report still exists");
    assert_eq!(report.assigned_tanker_id, None);
}
