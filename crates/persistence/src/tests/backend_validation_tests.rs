// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests validate that the persistence layer works correctly
//! across different database backends (`SQLite`, MariaDB/MySQL).
//!
//! ## Purpose
//!
//! The purpose of these tests is to ensure:
//! 1. Migrations apply cleanly on all supported backends
//! 2. Foreign key constraints are enforced correctly
//! 3. Unique constraints work as expected
//! 4. Transactions and rollback behavior is consistent
//! 5. Backend-specific behavior is documented and tested
//!
//! ## Test Execution
//!
//! - `SQLite` tests run normally via `cargo test`
//! - MariaDB/MySQL tests are marked `#[ignore]` and run only via `cargo xtask test-mariadb`
//!
//! ## Infrastructure Requirements
//!
//! `MariaDB` tests require:
//! - `DATABASE_URL` environment variable (set by xtask)
//! - `PROMOTRACK_TEST_BACKEND=mariadb` environment variable
//! - Running `MariaDB` instance (provisioned by xtask)
//!
//! Tests fail fast if required infrastructure is missing.
//!
//! ## What These Tests Validate
//!
//! These tests focus on **infrastructure and schema compatibility**, not business logic:
//! - Schema creation and migration application
//! - Database constraint enforcement (FK, UNIQUE)
//! - Transaction semantics
//! - Backend-specific SQL compatibility (row locking, `LAST_INSERT_ID`)
//!
//! Business logic and timeline invariants are validated by the standard
//! test suite running against `SQLite`. These backend validation tests
//! ensure the persistence layer works correctly on additional databases.

use diesel::MysqlConnection;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use std::env;

use crate::backend::mysql;

/// Result type for COUNT queries.
#[derive(QueryableByName)]
struct CountResult {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Helper to get the `MariaDB` connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

/// Helper to verify we're running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `PROMOTRACK_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("PROMOTRACK_TEST_BACKEND").expect(
        "PROMOTRACK_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(
        backend, "mariadb",
        "PROMOTRACK_TEST_BACKEND must be 'mariadb'"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_connection() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = MysqlConnection::establish(&url);
    assert!(
        result.is_ok(),
        "Failed to connect to MariaDB: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = mysql::initialize_database(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB and run migrations: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_foreign_key_enforcement() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    let result = mysql::verify_foreign_key_enforcement(&mut conn);
    assert!(
        result.is_ok(),
        "Foreign key enforcement verification failed: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_assignment_foreign_keys() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    // Try to insert an assignment without master rows - should fail due
    // to both foreign keys.
    let result = diesel::sql_query(
        "INSERT INTO assignments
         (promoter_id, store_id, start_date, is_active, reason_created, created_by,
          created_at, updated_at)
         VALUES (99999, 99999, '2024-01-01', 1, 'orphan', 1,
                 CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
    )
    .execute(&mut conn);

    assert!(
        result.is_err(),
        "Assignment with non-existent promoter/store should fail due to foreign key constraints"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_store_code_unique_constraint() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    diesel::sql_query(
        "INSERT INTO stores (store_id, store_code, is_active) VALUES (91001, 'UNIQ-TEST', 1)",
    )
    .execute(&mut conn)
    .expect("Failed to insert test store");

    let duplicate_result = diesel::sql_query(
        "INSERT INTO stores (store_id, store_code, is_active) VALUES (91002, 'UNIQ-TEST', 1)",
    )
    .execute(&mut conn);

    assert!(
        duplicate_result.is_err(),
        "Duplicate store_code should fail due to UNIQUE constraint"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_transaction_rollback() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    // Begin transaction
    conn.begin_test_transaction()
        .expect("Failed to begin transaction");

    // Insert promoter
    diesel::sql_query(
        "INSERT INTO promoters (promoter_id, full_name, status, on_vacation)
         VALUES (92001, 'Rollback Test', 'ACTIVE', 0)",
    )
    .execute(&mut conn)
    .expect("Failed to insert promoter");

    // Verify promoter exists within transaction
    let count: i64 = diesel::sql_query(
        "SELECT COUNT(*) as count FROM promoters WHERE promoter_id = 92001",
    )
    .get_result::<CountResult>(&mut conn)
    .map(|r| r.count)
    .expect("Failed to count promoters");

    assert_eq!(count, 1, "Promoter should exist within transaction");

    // Transaction will rollback when conn is dropped (test transaction mode)
    drop(conn);

    // Reconnect and verify rollback
    let mut new_conn = mysql::initialize_database(&url).expect("Failed to reconnect to MariaDB");

    let count_after: i64 = diesel::sql_query(
        "SELECT COUNT(*) as count FROM promoters WHERE promoter_id = 92001",
    )
    .get_result::<CountResult>(&mut new_conn)
    .map(|r| r.count)
    .expect("Failed to count promoters after rollback");

    assert_eq!(
        count_after, 0,
        "Promoter should not exist after transaction rollback"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_lifecycle_smoke() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut persistence =
        crate::Persistence::new_with_mysql(&url).expect("Failed to initialize MariaDB persistence");

    // Use high IDs to avoid colliding with other backend tests sharing
    // the database.
    let promoter = promo_track_domain::Promoter::new(
        93001,
        String::from("Backend Smoke"),
        promo_track_domain::PromoterStatus::Active,
        false,
    );
    persistence.upsert_promoter(&promoter).unwrap();
    persistence
        .upsert_store(&promo_track_domain::Store::new(93001, "SMOKE-1", None, true))
        .unwrap();
    persistence
        .upsert_store(&promo_track_domain::Store::new(93002, "SMOKE-2", None, true))
        .unwrap();

    let start = time::Date::from_calendar_date(2024, time::Month::January, 1).unwrap();
    let effective = time::Date::from_calendar_date(2024, time::Month::February, 1).unwrap();

    let created = persistence
        .create_assignment(93001, 93001, start, "backend smoke", 1)
        .unwrap();
    let transferred = persistence
        .transfer_assignment(
            created.created.assignment_id.unwrap(),
            93001,
            93002,
            effective,
            "smoke transfer",
            1,
        )
        .unwrap();
    let finalized = persistence
        .finalize_assignment(transferred.opened.assignment_id.unwrap(), 1)
        .unwrap();

    // The FOR UPDATE path and the full lifecycle both work on MariaDB.
    assert!(finalized.reactivated.is_some());
    assert_eq!(persistence.count_open_assignments(93001).unwrap(), 1);
}
