//! Integration tests using TestContainers
//!
//! Runs assembled statements against a real PostgreSQL container with a
//! minimal slice of the GeneWeaver schema. Requires Docker, so every test is
//! ignored by default: `cargo test -- --ignored`.

use testcontainers_modules::{postgres::Postgres, testcontainers::runners::AsyncRunner};

use geneweaver_db::aio;
use geneweaver_db::infrastructure::persistence::{connect, PgCursor};
use geneweaver_db::infrastructure::query::species::SpeciesQuery;
use geneweaver_db::infrastructure::query::statement::Params;
use geneweaver_db::value_objects::{GenesetScoreType, GenesetTier, ScoreType, Species};
use geneweaver_db::{AsyncCursor, Config, CursorError, SqlValue, Statement};

const SCHEMA: &str = r#"
CREATE TABLE species (
    sp_id INTEGER PRIMARY KEY,
    sp_name VARCHAR NOT NULL,
    sp_taxid INTEGER,
    sp_ref_gdb_id INTEGER
);
INSERT INTO species VALUES (1, 'Mus musculus', 10090, 10), (2, 'Homo sapiens', 9606, 11);

CREATE TABLE geneset (
    gs_id BIGINT PRIMARY KEY,
    cur_id INTEGER,
    gs_threshold_type INTEGER,
    gs_threshold VARCHAR
);
INSERT INTO geneset VALUES (5, 3, 1, '0.5');

CREATE TABLE geneset_value (
    gs_id BIGINT NOT NULL,
    ode_gene_id BIGINT NOT NULL,
    gsv_value DOUBLE PRECISION,
    gsv_in_threshold BOOLEAN
);
INSERT INTO geneset_value VALUES (5, 1, 0.01, FALSE), (5, 2, 0.2, FALSE), (5, 3, 0.9, TRUE);
"#;

/// Test environment using TestContainers
struct TestEnvironment {
    cursor: PgCursor,
    _container: testcontainers::ContainerAsync<Postgres>,
}

impl TestEnvironment {
    async fn new() -> Self {
        let container = Postgres::default()
            .with_init_sql(SCHEMA.as_bytes().to_vec())
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let config =
            Config::with_uri(format!("postgres://postgres:postgres@{host}:{port}/postgres"));
        let pool = connect(&config).await.expect("Failed to connect to test database");

        Self {
            cursor: PgCursor::new(pool),
            _container: container,
        }
    }

    async fn geneset_row(&self) -> (i32, String) {
        sqlx::query_as("SELECT gs_threshold_type, gs_threshold FROM geneset WHERE gs_id = 5")
            .fetch_one(self.cursor.pool())
            .await
            .expect("geneset row")
    }

    async fn in_threshold(&self) -> Vec<bool> {
        sqlx::query_scalar(
            "SELECT gsv_in_threshold FROM geneset_value WHERE gs_id = 5 ORDER BY ode_gene_id",
        )
        .fetch_all(self.cursor.pool())
        .await
        .expect("geneset values")
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_species_lookup_decodes_rows() {
    let mut env = TestEnvironment::new().await;

    let rows = aio::species::get(
        &mut env.cursor,
        &SpeciesQuery {
            species: Some(Species::MusMusculus),
            ..SpeciesQuery::default()
        },
    )
    .await
    .expect("species query");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Mus musculus");
    assert_eq!(rows[0]["taxonomic_id"], 10090);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_arrays_and_null_bind() {
    let mut env = TestEnvironment::new().await;

    let params = Params::new()
        .with("ids", vec![1i64, 2])
        .and_then(|p| p.with("names", vec!["a".to_string(), "b".to_string()]))
        .and_then(|p| p.with("missing", SqlValue::Null))
        .expect("params");
    let statement = Statement::new(
        "SELECT %(ids)s AS ids, %(names)s AS names, %(missing)s AS missing",
        params,
    )
    .expect("statement");

    let row = env
        .cursor
        .fetch_one(&statement)
        .await
        .expect("select")
        .expect("one row");
    assert_eq!(row["ids"], serde_json::json!([1, 2]));
    assert_eq!(row["names"], serde_json::json!(["a", "b"]));
    assert!(row["missing"].is_null());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_threshold_update_commits_both_tables() {
    let mut env = TestEnvironment::new().await;

    let score = GenesetScoreType::new(ScoreType::PValue, 0.05);
    let affected = aio::threshold::set_geneset_threshold(&mut env.cursor, 5, &score)
        .await
        .expect("threshold update");

    assert_eq!(affected, 4);
    assert_eq!(env.geneset_row().await, (1, "0.05".to_string()));
    assert_eq!(env.in_threshold().await, vec![true, false, false]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_failed_transaction_keeps_nothing() {
    let mut env = TestEnvironment::new().await;

    let update = Statement::new(
        "UPDATE geneset SET gs_threshold = %(threshold)s WHERE gs_id = 5",
        Params::new().with("threshold", "9.9").expect("params"),
    )
    .expect("update");
    let broken = Statement::new("UPDATE no_such_table SET x = 1", Params::new()).expect("broken");

    let result = env.cursor.execute_atomic(&[update, broken]).await;
    assert!(matches!(result, Err(CursorError::Database(_))));
    assert_eq!(env.geneset_row().await, (1, "0.5".to_string()));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_tier_roundtrip_from_database() {
    let mut env = TestEnvironment::new().await;

    let tier = aio::geneset::tier(&mut env.cursor, 5).await.expect("tier");
    assert_eq!(tier, Some(GenesetTier::Tier3));

    let missing = aio::geneset::tier(&mut env.cursor, 404).await.expect("tier");
    assert_eq!(missing, None);
}
