use jokelist_core::{JokePayload, JokeRecord, JokeValidationError};

#[test]
fn record_serializes_text_as_joke_field() {
    let mut record = JokeRecord::new("R7UfaahVfFd", "a pun").unwrap();
    record.votes = -3;

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], "R7UfaahVfFd");
    assert_eq!(json["joke"], "a pun");
    assert_eq!(json["votes"], -3);
    assert!(json.get("text").is_none());

    let decoded: JokeRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn record_votes_default_to_zero_when_absent() {
    let decoded: JokeRecord =
        serde_json::from_value(serde_json::json!({ "id": "x", "joke": "y" })).unwrap();
    assert_eq!(decoded.votes, 0);
}

#[test]
fn payload_ignores_unknown_service_fields() {
    let payload: JokePayload = serde_json::from_str(
        r#"{"id":"0189hNRf2g","joke":"I'm tired of following my dreams.","status":200,"extra":true}"#,
    )
    .unwrap();
    assert_eq!(payload.id, "0189hNRf2g");
    assert_eq!(payload.status, Some(200));
}

#[test]
fn payload_without_joke_field_is_rejected() {
    let result = serde_json::from_str::<JokePayload>(r#"{"id":"abc"}"#);
    assert!(result.is_err());
}

#[test]
fn payload_with_blank_id_does_not_convert() {
    let err = JokeRecord::try_from(JokePayload::new(" ", "text")).unwrap_err();
    assert_eq!(err, JokeValidationError::EmptyId);
}
