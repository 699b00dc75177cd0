use chrono::{TimeZone, Utc};
use serde_json::json;
use toggl::{Error, TimeEntry, TogglClient, WorkspaceClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn creates_and_then_deletes_a_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/clients"))
        .and(body_json(json!({"client": {"name": "ACME", "wid": 7}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": 42, "name": "ACME", "wid": 7}})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/clients/42"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let toggl = TogglClient::with_base_url(&server.uri(), "token").unwrap();

    let created = toggl
        .clients()
        .create(&WorkspaceClient {
            name: Some("ACME".to_string()),
            workspace_id: Some(7),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(42));
    assert_eq!(created.name.as_deref(), Some("ACME"));
    assert_eq!(created.workspace_id, Some(7));

    toggl.clients().delete(created.id.unwrap()).await.unwrap();
}

#[tokio::test]
async fn lists_time_entries_for_a_date_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/time_entries"))
        .and(query_param("start_date", "2013-07-13T00:00:00Z"))
        .and(query_param("end_date", "2013-07-15T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":1}]"#))
        .mount(&server)
        .await;

    let toggl = TogglClient::with_base_url(&server.uri(), "token").unwrap();

    let entries = toggl
        .time_entries()
        .list(
            Some(Utc.with_ymd_and_hms(2013, 7, 13, 0, 0, 0).unwrap()),
            Some(Utc.with_ymd_and_hms(2013, 7, 15, 0, 0, 0).unwrap()),
        )
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, Some(1));
}

#[tokio::test]
async fn not_found_surfaces_the_remote_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let toggl = TogglClient::with_base_url(&server.uri(), "token").unwrap();
    let err = toggl.clients().get(99).await.unwrap_err();

    assert!(matches!(err, Error::Remote { status: 404, .. }));
    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("not found"));
}

#[test]
fn request_envelope_round_trips_through_a_server_echo() {
    let entry = TimeEntry {
        id: Some(1),
        workspace_id: Some(7),
        project_id: Some(3),
        billable: Some(true),
        start: Some(Utc.with_ymd_and_hms(2013, 7, 13, 9, 30, 0).unwrap()),
        stop: Some(Utc.with_ymd_and_hms(2013, 7, 13, 11, 0, 0).unwrap()),
        duration: Some(5400),
        created_with: Some("toggl-rs".to_string()),
        tags: Some(vec!["billed".to_string(), "review".to_string()]),
        ..Default::default()
    };

    // Request envelope out, server echo back through the data envelope.
    let request = json!({ "time_entry": &entry });
    let echo = json!({ "data": request["time_entry"].clone() });
    let decoded: TimeEntry = serde_json::from_value(echo["data"].clone()).unwrap();

    assert_eq!(decoded, entry);
}
