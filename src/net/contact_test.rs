use super::*;

#[test]
fn request_serializes_with_field_names_the_endpoint_expects() {
    let request = ContactRequest {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "This is a message.".to_owned(),
    };
    let json = serde_json::to_value(&request).expect("serializable");
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert_eq!(json["subject"], "Hello");
    assert_eq!(json["message"], "This is a message.");
}

#[test]
fn default_request_is_empty() {
    let request = ContactRequest::default();
    assert!(request.name.is_empty());
    assert!(request.message.is_empty());
}
