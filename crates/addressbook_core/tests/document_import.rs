use addressbook_core::{
    AddressBookDocument, DocumentError, EntityKind, EventTagRecord, ImportOptions, PersonRecord,
    ReadOnlyAddressBook, TagRecord, MESSAGE_DUPLICATE_EVENT_TAG, MESSAGE_DUPLICATE_PERSON,
    MESSAGE_DUPLICATE_TAG,
};
use serde_json::json;

fn person_json(name: &str, phone: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "name": name,
        "phone": phone,
        "email": "someone@example.com",
        "address": "Blk 30 Geylang Street 29, #06-40",
        "tags": tags.iter().map(|tag| json!({ "tagName": tag })).collect::<Vec<_>>(),
        "eventTags": []
    })
}

fn document(value: serde_json::Value) -> AddressBookDocument {
    serde_json::from_value(value).expect("document fixture should deserialize")
}

#[test]
fn import_of_typical_document_populates_all_lists() {
    let doc = document(json!({
        "tagList": [{ "tagName": "friends" }, { "tagName": "colleagues" }],
        "eventTagList": [
            { "tagName": "orientation", "eventStart": 1_700_000_000_000_i64, "eventEnd": null }
        ],
        "persons": [
            person_json("Alex Yeoh", "87438807", &["friends"]),
            person_json("Bernice Yu", "99272758", &["colleagues", "friends"])
        ]
    }));

    let book = doc.to_model().unwrap();
    assert_eq!(book.tag_count(), 2);
    assert_eq!(book.event_tag_count(), 1);
    assert_eq!(book.person_count(), 2);
    assert_eq!(book.person_list()[1].name().as_str(), "Bernice Yu");
    assert_eq!(
        book.event_tag_list()[0].event_start(),
        Some(1_700_000_000_000)
    );
}

#[test]
fn empty_object_imports_as_empty_model() {
    let book = document(json!({})).to_model().unwrap();
    assert!(book.is_empty());
}

#[test]
fn duplicate_tags_are_rejected() {
    let doc = document(json!({
        "tagList": [{ "tagName": "friends" }, { "tagName": "friends" }]
    }));

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::DuplicateEntity {
            kind: EntityKind::Tag
        }
    ));
    assert_eq!(err.to_string(), MESSAGE_DUPLICATE_TAG);
}

#[test]
fn duplicate_event_tags_are_rejected_by_name() {
    let doc = document(json!({
        "eventTagList": [
            { "tagName": "fair", "eventStart": 1, "eventEnd": 2 },
            { "tagName": "fair", "eventStart": 5, "eventEnd": 9 }
        ]
    }));

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::DuplicateEntity {
            kind: EntityKind::EventTag
        }
    ));
    assert_eq!(err.to_string(), MESSAGE_DUPLICATE_EVENT_TAG);
}

#[test]
fn duplicate_persons_use_identity_not_full_equality() {
    let doc = document(json!({
        "persons": [
            person_json("Alex Yeoh", "87438807", &[]),
            person_json("Alex Yeoh", "11111111", &[])
        ]
    }));

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::DuplicateEntity {
            kind: EntityKind::Person
        }
    ));
    assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PERSON);
}

#[test]
fn malformed_person_field_propagates_adapter_error() {
    let doc = document(json!({
        "persons": [person_json("Alex Yeoh", "12a", &[])]
    }));

    let err = doc.to_model().unwrap_err();
    match err {
        DocumentError::MalformedRecord { kind, detail } => {
            assert_eq!(kind, EntityKind::Person);
            assert!(detail.starts_with("Phone numbers should only contain numbers"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_person_field_is_reported_before_duplicate_check() {
    let doc = document(json!({
        "persons": [
            person_json("Alex Yeoh", "87438807", &[]),
            { "name": "Alex Yeoh", "phone": "87438807", "email": "someone@example.com" }
        ]
    }));

    let err = doc.to_model().unwrap_err();
    assert_eq!(err.to_string(), "Person's Address field is missing!");
    assert_eq!(err.reason(), "malformed_record");
}

#[test]
fn person_may_reference_tag_defined_in_same_document() {
    let doc = AddressBookDocument::new(
        vec![TagRecord::new("friends")],
        vec![],
        vec![serde_json::from_value::<PersonRecord>(person_json(
            "Alex Yeoh",
            "87438807",
            &["friends"],
        ))
        .unwrap()],
    );

    let book = doc.to_model().unwrap();
    assert_eq!(book.person_list()[0].tags().len(), 1);
}

#[test]
fn strict_import_rejects_reference_to_undefined_tag() {
    let doc = document(json!({
        "persons": [person_json("Alex Yeoh", "87438807", &["friends"])]
    }));

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::UnresolvedReference {
            kind: EntityKind::Tag,
            ..
        }
    ));
}

#[test]
fn strict_import_rejects_reference_to_undefined_event_tag() {
    let mut person = person_json("Alex Yeoh", "87438807", &[]);
    person["eventTags"] = json!([{ "tagName": "orientation" }]);
    let doc = document(json!({
        "eventTagList": [{ "tagName": "career" }],
        "persons": [person]
    }));

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::UnresolvedReference {
            kind: EntityKind::EventTag,
            ref name,
        } if name == "orientation"
    ));
    assert_eq!(
        err.to_string(),
        "Person references unknown event tag: orientation"
    );
}

#[test]
fn lenient_import_registers_undefined_references() {
    let mut person = person_json("Alex Yeoh", "87438807", &["friends"]);
    person["eventTags"] = json!([{ "tagName": "orientation" }]);
    let doc = document(json!({
        "tagList": [{ "tagName": "colleagues" }],
        "persons": [person]
    }));

    let book = doc.to_model_with(&ImportOptions::lenient()).unwrap();
    assert_eq!(book.person_count(), 1);
    let tag_names: Vec<&str> = book.tag_list().iter().map(|tag| tag.name()).collect();
    assert_eq!(tag_names, vec!["colleagues", "friends"]);
    assert_eq!(book.event_tag_list()[0].name(), "orientation");

    let reimported = AddressBookDocument::from_model(&book).to_model().unwrap();
    assert_eq!(reimported, book);
}

#[test]
fn first_failure_wins_in_fixed_processing_order() {
    // Duplicate persons come first in the wire text, but tags are processed first.
    let doc = document(json!({
        "persons": [
            person_json("Alex Yeoh", "87438807", &[]),
            person_json("Alex Yeoh", "87438807", &[])
        ],
        "tagList": [{ "tagName": "bad tag" }]
    }));

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::MalformedRecord {
            kind: EntityKind::Tag,
            ..
        }
    ));
}

#[test]
fn event_tag_record_with_reversed_window_is_malformed() {
    let doc = AddressBookDocument::new(
        vec![],
        vec![EventTagRecord {
            tag_name: Some("fair".to_string()),
            event_start: Some(200),
            event_end: Some(100),
        }],
        vec![],
    );

    let err = doc.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::MalformedRecord {
            kind: EntityKind::EventTag,
            ..
        }
    ));
}
