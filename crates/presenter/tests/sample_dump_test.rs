//! End-to-end runs over the bundled phpMyAdmin-style sample dump.

use polls_db::{PollingUnitTotal, StateId};
use polls_presenter::{render_results, run_pipeline, run_pipeline_from_file};

const SAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/bincom_sample.sql");
const SAMPLE: &str = include_str!("../../../data/bincom_sample.sql");

#[tokio::test]
async fn test_sample_dump_totals_for_delta() {
    let rows = run_pipeline(SAMPLE, StateId::DELTA).await.unwrap();
    assert_eq!(
        rows,
        vec![
            PollingUnitTotal::new("Ishere Primary School  Aghara", 495),
            PollingUnitTotal::new("Primary School in Aghara", 1937),
            PollingUnitTotal::new("St. Mary's Hall", 200),
        ]
    );
}

#[tokio::test]
async fn test_sample_dump_excludes_other_states() {
    let rows = run_pipeline_from_file(SAMPLE_PATH, StateId::DELTA).await.unwrap();
    assert!(rows.iter().all(|row| row.polling_unit_name != "Ikeja Town Hall"));

    let lagos = run_pipeline(SAMPLE, StateId(24)).await.unwrap();
    assert_eq!(lagos, vec![PollingUnitTotal::new("Ikeja Town Hall", 99999)]);
}

#[tokio::test]
async fn test_sample_dump_renders_escaped_page() {
    let rows = run_pipeline(SAMPLE, StateId::DELTA).await.unwrap();
    let page = render_results(&rows, "Delta State");

    assert_eq!(page.matches("<tr>").count(), rows.len() + 1);
    assert!(page.contains("<td>St. Mary&#x27;s Hall</td>"));
    assert!(page.contains("<td>1937</td>"));
}

#[tokio::test]
async fn test_missing_score_column_produces_no_rows() {
    let drifted = SAMPLE.replace("party_score", "party_points");
    let err = run_pipeline(&drifted, StateId::DELTA).await.unwrap_err();
    assert!(err.is_query_error());
}
