use super::*;

#[test]
fn attributes_map_to_fields() {
    let record = Record {
        id: "26954449".to_string(),
        name: "www".to_string(),
        type_: "A".to_string(),
        line: "默认".to_string(),
        value: "1.1.1.1".to_string(),
        ttl: "600".to_string(),
        weight: Some(0),
        ..Default::default()
    };
    let payload = record.add_to(Payload::new());

    assert_eq!(
        payload.fields(),
        [
            ("sub_domain".to_string(), "www".to_string()),
            ("record_type".to_string(), "A".to_string()),
            ("record_line".to_string(), "默认".to_string()),
            ("value".to_string(), "1.1.1.1".to_string()),
            ("ttl".to_string(), "600".to_string()),
            ("weight".to_string(), "0".to_string()),
        ]
    );
}

#[test]
fn empty_record_adds_nothing() {
    let payload = Record::default().add_to(Payload::new());

    assert!(payload.fields().is_empty());
}

#[test]
fn ambiguous_fields() {
    let from_numbers: Record = serde_json::from_str(
        r#"{"id": 44146112, "ttl": 600, "mx": 0, "line_id": 0, "enabled": 1, "weight": 10}"#,
    )
    .unwrap();
    let from_strings: Record = serde_json::from_str(
        r#"{"id": "44146112", "ttl": "600", "mx": "0", "line_id": "0", "enabled": "1", "weight": "10"}"#,
    )
    .unwrap();

    assert_eq!(from_numbers, from_strings);
    assert_eq!(from_numbers.weight, Some(10));
    assert_eq!(from_numbers.ttl, "600");
}

#[test]
fn record_round_trip() {
    let record: Record = serde_json::from_str(
        r#"{"id": 1, "name": "@", "type": "MX", "mx": 10, "value": "mail.example.com.", "weight": null}"#,
    )
    .unwrap();
    assert_eq!(record.type_, "MX");
    assert_eq!(record.weight, None);

    let encoded = serde_json::to_string(&record).unwrap();
    assert!(!encoded.contains("weight"));
    let decoded: Record = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn list_page_totals() {
    let page: RecordListPage = serde_json::from_str(
        r#"{
            "domain": {"id": 11223344, "name": "example.com"},
            "info": {"sub_domains": "2", "record_total": 2, "records_num": "2"},
            "records": [{"id": "1"}, {"id": "2"}]
        }"#,
    )
    .unwrap();

    assert_eq!(page.domain.id, "11223344");
    assert_eq!(page.total(), "2");
    assert_eq!(page.into_items().len(), 2);
}

#[test]
fn null_fields_decode_as_empty() {
    let record: Record = serde_json::from_str(
        r#"{"id": 1, "name": null, "type": null, "remark": null, "ttl": null, "weight": null, "updated_on": null}"#,
    )
    .unwrap();

    assert_eq!(
        record,
        Record {
            id: "1".to_string(),
            ..Default::default()
        }
    );

    let modified: RecordModify =
        serde_json::from_str(r#"{"id": "1", "name": null, "value": null, "status": null}"#)
            .unwrap();
    assert_eq!(modified.id, "1");
    assert_eq!(modified.status, "");
}
