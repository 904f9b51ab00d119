use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use clinical_gateway::application::ports::MeasurementRepository;
use clinical_gateway::domain::MeasurementFilters;

use crate::helpers::TestPostgres;

async fn seed_measurements(pool: &PgPool) {
    sqlx::query("INSERT INTO dim_measurement_type (name) VALUES ('glucose'), ('blood_pressure')")
        .execute(pool)
        .await
        .expect("seed types");
    sqlx::query("INSERT INTO dim_unit (name) VALUES ('mg/dL'), ('mmHg')")
        .execute(pool)
        .await
        .expect("seed units");

    sqlx::query(
        r#"
        INSERT INTO fact_measurement
            (study_id, participant_id, measurement_type_id, unit_id, value_numeric,
             systolic, diastolic, quality_score, is_valid, quality_flags, ts)
        VALUES
            ('STUDY001', 'P001',
             (SELECT id FROM dim_measurement_type WHERE name = 'glucose'),
             (SELECT id FROM dim_unit WHERE name = 'mg/dL'),
             95.0, NULL, NULL, 0.98, TRUE, '{}', '2024-03-01T10:00:00Z'),
            ('STUDY001', 'P002',
             (SELECT id FROM dim_measurement_type WHERE name = 'blood_pressure'),
             (SELECT id FROM dim_unit WHERE name = 'mmHg'),
             NULL, 120, 80, 0.9, TRUE, '{}', '2024-03-02T10:00:00Z'),
            ('STUDY002', 'P003',
             (SELECT id FROM dim_measurement_type WHERE name = 'glucose'),
             (SELECT id FROM dim_unit WHERE name = 'mg/dL'),
             300.0, NULL, NULL, 0.2, FALSE, '{"non_numeric_value"}', '2024-03-03T10:00:00Z')
        "#,
    )
    .execute(pool)
    .await
    .expect("seed facts");
}

#[tokio::test]
async fn given_study_filter_when_querying_then_only_that_study_is_returned() {
    let pg = TestPostgres::new().await;
    seed_measurements(&pg.pool).await;

    let filters = MeasurementFilters {
        study_id: Some("STUDY001".to_string()),
        ..Default::default()
    };

    let rows = pg
        .measurement_repository
        .query(&filters)
        .await
        .expect("query ok");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|m| m.study_id == "STUDY001"));
    // Newest first.
    assert_eq!(rows[0].measurement_type, "blood_pressure");
    assert_eq!(rows[0].systolic, Some(120));
    assert_eq!(rows[0].diastolic, Some(80));
}

#[tokio::test]
async fn given_type_and_validity_filters_when_querying_then_rows_match() {
    let pg = TestPostgres::new().await;
    seed_measurements(&pg.pool).await;

    let filters = MeasurementFilters {
        measurement_type: Some("glucose".to_string()),
        is_valid: Some(false),
        ..Default::default()
    };

    let rows = pg
        .measurement_repository
        .query(&filters)
        .await
        .expect("query ok");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].study_id, "STUDY002");
    assert_eq!(rows[0].quality_flags, vec!["non_numeric_value".to_string()]);
}

#[tokio::test]
async fn given_time_range_when_querying_then_bounds_are_half_open() {
    let pg = TestPostgres::new().await;
    seed_measurements(&pg.pool).await;

    let filters = MeasurementFilters {
        start_ts: Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()),
        end_ts: Some(Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap()),
        ..Default::default()
    };

    let rows = pg
        .measurement_repository
        .query(&filters)
        .await
        .expect("query ok");

    // end_ts is exclusive, so the 03-03T10:00 row is excluded.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].participant_id, "P002");
}

#[tokio::test]
async fn given_limit_and_offset_when_querying_then_page_is_applied() {
    let pg = TestPostgres::new().await;
    seed_measurements(&pg.pool).await;

    let filters = MeasurementFilters {
        limit: Some(1),
        offset: Some(1),
        ..Default::default()
    };

    let rows = pg
        .measurement_repository
        .query(&filters)
        .await
        .expect("query ok");

    assert_eq!(rows.len(), 1);
    // Second-newest row overall.
    assert_eq!(rows[0].participant_id, "P002");
}
