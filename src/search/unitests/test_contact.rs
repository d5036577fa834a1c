use crate::{Contact, ContactBuilder};

#[test]
fn test_builder_defaults() {
    let contact = ContactBuilder::new("42").build();

    assert_eq!(contact.id(), "42");
    assert_eq!(contact.name(), "");
    assert_eq!(contact.phone_number(), "");
    assert_eq!(contact.photo_uri(), None);
    assert!(!contact.is_favorite());
}

#[test]
fn test_builder_fields() {
    let contact = ContactBuilder::new("7")
        .with_name("김현도")
        .with_phone_number("010-1234-5678")
        .with_photo_uri("content://photo/7")
        .build();

    assert_eq!(contact.name(), "김현도");
    assert_eq!(contact.phone_number(), "010-1234-5678");
    assert_eq!(contact.photo_uri(), Some("content://photo/7"));
}

#[test]
fn test_deserialize_wire_names() {
    let data = r#"{
        "id": "7",
        "name": "김현도",
        "phoneNumber": "010-1234-5678",
        "photoUri": "content://photo/7"
    }"#;

    let contact = serde_json::from_str::<Contact>(data).unwrap();
    assert_eq!(contact.id(), "7");
    assert_eq!(contact.name(), "김현도");
    assert_eq!(contact.phone_number(), "010-1234-5678");
    assert_eq!(contact.photo_uri(), Some("content://photo/7"));
    assert!(!contact.is_favorite());
}

#[test]
fn test_deserialize_absent_fields_default_empty() {
    let contact = serde_json::from_str::<Contact>(r#"{ "id": "9" }"#).unwrap();
    assert_eq!(contact.name(), "");
    assert_eq!(contact.phone_number(), "");
    assert_eq!(contact.photo_uri(), None);
}

#[test]
fn test_favorite_never_serialized() {
    let mut contact = ContactBuilder::new("7").with_name("김현도").build();
    contact.set_favorite(true);

    let data = serde_json::to_string(&contact).unwrap();
    assert!(!data.contains("favorite"));
}
