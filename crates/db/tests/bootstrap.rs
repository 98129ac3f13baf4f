use epictrack_core::project_state::ProjectState;
use epictrack_db::repositories::ProjectStateRepo;
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    epictrack_db::health_check(&pool).await.unwrap();

    let tables = [
        "project_states",
        "types",
        "sub_types",
        "proponents",
        "regions",
        "projects",
        "projects_history",
        "works",
    ];

    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }
}

/// Seeded project states must line up with the in-code enum.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_state_seed_matches_enum(pool: PgPool) {
    let rows = ProjectStateRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), ProjectState::ALL.len());

    for row in &rows {
        let state = row
            .state()
            .unwrap_or_else(|| panic!("unknown seeded id {}", row.id));
        assert_eq!(row.code, state.code(), "code mismatch for id {}", row.id);
        assert_eq!(row.name, state.label(), "label mismatch for id {}", row.id);
    }
}
