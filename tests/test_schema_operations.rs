//! Integration tests for spatial schema operations against a mock backend.

use postgis_adapter_rs::{
    ColumnDefinition, ColumnOptions, CreateTableOptions, Error, GeometryDescriptor, GeometryKind,
    IndexOptions, Result, SchemaBackend, SpatialConnection, TableDefinition,
};

/// In-memory backend recording executed statements and serving canned
/// catalog rows.
#[derive(Default)]
struct MockBackend {
    executed: Vec<String>,
    constraint_rows: Vec<Vec<String>>,
    index_rows: Vec<Vec<String>>,
    columns: Vec<ColumnDefinition>,
    fail_execute_containing: Option<String>,
}

impl SchemaBackend for MockBackend {
    async fn query_rows(&mut self, sql: &str) -> Result<Vec<Vec<String>>> {
        if sql.contains("pg_constraint") {
            Ok(self.constraint_rows.clone())
        } else if sql.contains("pg_index") {
            Ok(self.index_rows.clone())
        } else {
            Ok(vec![])
        }
    }

    async fn execute(&mut self, sql: &str) -> Result<()> {
        if let Some(pattern) = &self.fail_execute_containing {
            if sql.contains(pattern.as_str()) {
                return Err(Error::backend(std::io::Error::other(format!(
                    "simulated failure for: {sql}"
                ))));
            }
        }
        self.executed.push(sql.to_string());
        Ok(())
    }

    async fn column_definitions(&mut self, _table: &str) -> Result<Vec<ColumnDefinition>> {
        Ok(self.columns.clone())
    }
}

fn places_backend() -> MockBackend {
    MockBackend {
        constraint_rows: vec![
            vec!["CHECK ((geometrytype(geom) = 'POINT'::text))".to_string()],
            vec!["CHECK ((ndims(geom) = 2))".to_string()],
            vec!["CHECK ((srid(geom) = 4326))".to_string()],
        ],
        columns: vec![
            ColumnDefinition {
                name: "id".to_string(),
                sql_type: "integer".to_string(),
                default: None,
                not_null: true,
            },
            ColumnDefinition {
                name: "name".to_string(),
                sql_type: "character varying(80)".to_string(),
                default: None,
                not_null: false,
            },
            ColumnDefinition {
                name: "geom".to_string(),
                sql_type: "geometry".to_string(),
                default: None,
                not_null: true,
            },
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_columns_embeds_descriptor_for_spatial_columns() {
    let mut conn = SpatialConnection::new(places_backend());
    let columns = conn.columns("places").await.unwrap();

    assert_eq!(columns.len(), 3);
    assert!(!columns[0].is_spatial());
    assert!(!columns[1].is_spatial());

    let geom = &columns[2];
    assert!(geom.is_spatial());
    let descriptor = geom.geometry.as_ref().unwrap();
    assert_eq!(descriptor.kind, GeometryKind::Point);
    assert_eq!(descriptor.srid, 4326);
    assert!(!descriptor.has_z);
    assert!(!descriptor.has_m);
}

#[tokio::test]
async fn test_remove_column_routes_spatial_to_drop_geometry_column() {
    let mut conn = SpatialConnection::new(places_backend());
    conn.remove_column("places", "geom").await.unwrap();

    let executed = &conn.backend().executed;
    assert_eq!(executed, &vec![
        "SELECT DropGeometryColumn('places','geom')".to_string()
    ]);
}

#[tokio::test]
async fn test_remove_column_routes_plain_to_generic_path_once() {
    let mut conn = SpatialConnection::new(places_backend());
    conn.remove_column("places", "name").await.unwrap();

    let executed = &conn.backend().executed;
    assert_eq!(executed, &vec![
        "ALTER TABLE places DROP COLUMN name".to_string()
    ]);
}

#[tokio::test]
async fn test_remove_unknown_column_is_an_error() {
    let mut conn = SpatialConnection::new(places_backend());
    let result = conn.remove_column("places", "nope").await;
    assert!(matches!(result, Err(Error::ColumnNotFound { .. })));
}

#[tokio::test]
async fn test_add_column_routes_by_type_registry() {
    let mut conn = SpatialConnection::new(MockBackend::default());

    conn.add_column(
        "places",
        "geom",
        "point",
        ColumnOptions {
            srid: 4326,
            not_null: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    conn.add_column("places", "name", "varchar(80)", ColumnOptions::default())
        .await
        .unwrap();

    let executed = &conn.backend().executed;
    assert_eq!(
        executed,
        &vec![
            "SELECT AddGeometryColumn('places','geom',4326,'POINT',2)".to_string(),
            "ALTER TABLE places ALTER geom SET NOT NULL".to_string(),
            "ALTER TABLE places ADD COLUMN name varchar(80)".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_table_defers_spatial_columns_in_declaration_order() {
    let mut conn = SpatialConnection::new(MockBackend::default());

    let mut table = TableDefinition::new();
    table
        .column("id", "serial PRIMARY KEY")
        .column_with_options(
            "geom",
            "point",
            ColumnOptions {
                srid: 4326,
                ..Default::default()
            },
        )
        .column("name", "varchar(80)")
        .column("area", "polygon");

    conn.create_table("places", &table, CreateTableOptions::default())
        .await
        .unwrap();

    let executed = &conn.backend().executed;
    assert_eq!(
        executed,
        &vec![
            "CREATE TABLE places (id serial PRIMARY KEY, name varchar(80))".to_string(),
            "SELECT AddGeometryColumn('places','geom',4326,'POINT',2)".to_string(),
            "SELECT AddGeometryColumn('places','area',-1,'POLYGON',2)".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_table_force_swallows_drop_failure() {
    let backend = MockBackend {
        fail_execute_containing: Some("DROP TABLE".to_string()),
        ..Default::default()
    };
    let mut conn = SpatialConnection::new(backend);

    let mut table = TableDefinition::new();
    table.column("id", "serial PRIMARY KEY");

    conn.create_table("places", &table, CreateTableOptions { force: true })
        .await
        .unwrap();

    assert_eq!(
        conn.backend().executed,
        vec!["CREATE TABLE places (id serial PRIMARY KEY)".to_string()]
    );
}

#[tokio::test]
async fn test_create_table_surfaces_deferred_add_failure() {
    let backend = MockBackend {
        fail_execute_containing: Some("AddGeometryColumn".to_string()),
        ..Default::default()
    };
    let mut conn = SpatialConnection::new(backend);

    let mut table = TableDefinition::new();
    table.column("id", "serial PRIMARY KEY").column("geom", "point");

    let result = conn
        .create_table("places", &table, CreateTableOptions::default())
        .await;
    assert!(matches!(result, Err(Error::Backend(_))));
    // The table itself was created before the failing deferred add.
    assert_eq!(
        conn.backend().executed,
        vec!["CREATE TABLE places (id serial PRIMARY KEY)".to_string()]
    );
}

#[tokio::test]
async fn test_spatial_index_ignores_uniqueness_request() {
    let mut conn = SpatialConnection::new(MockBackend::default());

    conn.add_index(
        "places",
        &["geom".to_string()],
        IndexOptions {
            unique: true,
            spatial: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let executed = &conn.backend().executed;
    assert_eq!(executed.len(), 1);
    assert_eq!(
        executed[0],
        "CREATE INDEX places_geom_spatial_index ON places USING GIST (geom GIST_GEOMETRY_OPS)"
    );
    assert!(!executed[0].contains("UNIQUE"));
}

#[tokio::test]
async fn test_plain_index_honors_uniqueness() {
    let mut conn = SpatialConnection::new(MockBackend::default());

    conn.add_index(
        "users",
        &["email".to_string()],
        IndexOptions {
            name: Some("users_email_idx".to_string()),
            unique: true,
            spatial: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        conn.backend().executed,
        vec!["CREATE UNIQUE INDEX users_email_idx ON users (email)".to_string()]
    );
}

#[tokio::test]
async fn test_indexes_groups_rows_and_classifies_by_access_method() {
    let backend = MockBackend {
        index_rows: vec![
            vec!["idx1".into(), "f".into(), "colA".into(), "gist".into()],
            vec!["idx1".into(), "f".into(), "colB".into(), "gist".into()],
            vec!["idx2".into(), "t".into(), "colC".into(), "btree".into()],
        ],
        ..Default::default()
    };
    let mut conn = SpatialConnection::new(backend);
    let indexes = conn.indexes("places").await.unwrap();

    assert_eq!(indexes.len(), 2);
    assert_eq!(indexes[0].name, "idx1");
    assert_eq!(indexes[0].columns, vec!["colA", "colB"]);
    assert!(indexes[0].spatial);
    assert!(!indexes[0].unique);
    assert_eq!(indexes[1].name, "idx2");
    assert_eq!(indexes[1].columns, vec!["colC"]);
    assert!(!indexes[1].spatial);
    assert!(indexes[1].unique);
}

/// Round trip: descriptor -> DDL -> simulated catalog constraints ->
/// parsed raw info -> normalized descriptor.
#[tokio::test]
async fn test_descriptor_round_trips_through_constraint_text() {
    for (has_z, has_m) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut descriptor = GeometryDescriptor::new(GeometryKind::LineString).with_srid(4326);
        if has_z {
            descriptor = descriptor.with_z();
        }
        if has_m {
            descriptor = descriptor.with_m();
        }

        // What PostGIS would record after AddGeometryColumn ran.
        let subtype = if has_m {
            format!("{}M", GeometryKind::LineString.constraint_name())
        } else {
            GeometryKind::LineString.constraint_name().to_string()
        };
        let backend = MockBackend {
            constraint_rows: vec![
                vec![format!("CHECK ((geometrytype(geom) = '{subtype}'::text))")],
                vec![format!("CHECK ((ndims(geom) = {}))", descriptor.dimension())],
                vec!["CHECK ((srid(geom) = 4326))".to_string()],
            ],
            columns: vec![ColumnDefinition {
                name: "geom".to_string(),
                sql_type: "geometry".to_string(),
                default: None,
                not_null: false,
            }],
            ..Default::default()
        };

        let mut conn = SpatialConnection::new(backend);
        let columns = conn.columns("tracks").await.unwrap();
        let recovered = columns[0].geometry.as_ref().unwrap();

        assert_eq!(recovered.kind, GeometryKind::LineString, "z={has_z} m={has_m}");
        assert_eq!(recovered.has_z, has_z, "z={has_z} m={has_m}");
        assert_eq!(recovered.has_m, has_m, "z={has_z} m={has_m}");
        assert_eq!(recovered.srid, 4326);
    }
}
