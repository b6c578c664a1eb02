use super::*;

fn filled_form() -> InquiryForm {
    InquiryForm {
        company_name: "ABC Corp".to_owned(),
        contact_name: "Kim".to_owned(),
        phone: "010-0000-0000".to_owned(),
        email: "a@b.com".to_owned(),
        category: Category::Safety,
        message: "Need consulting".to_owned(),
    }
}

// =============================================================================
// Category
// =============================================================================

#[test]
fn category_defaults_to_labor() {
    assert_eq!(Category::default(), Category::Labor);
    assert_eq!(InquiryForm::default().category, Category::Labor);
}

#[test]
fn category_from_value_accepts_every_value_label() {
    for category in Category::ALL {
        assert_eq!(Category::from_value(category.value()), Ok(category));
    }
}

#[test]
fn category_from_value_rejects_option_label() {
    let err = Category::from_value("산업안전 컨설팅").unwrap_err();
    assert_eq!(err, InquiryError::UnknownCategory("산업안전 컨설팅".to_owned()));
}

#[test]
fn category_serializes_as_value_label() {
    let json = serde_json::to_string(&Category::IndustrialAccident).unwrap();
    assert_eq!(json, "\"산재\"");
}

// =============================================================================
// Field editing
// =============================================================================

#[test]
fn set_replaces_only_the_named_field() {
    let mut form = InquiryForm::default();
    form.set(Field::Phone, "010-1234-5678").unwrap();
    assert_eq!(form.phone, "010-1234-5678");
    assert_eq!(
        InquiryForm { phone: String::new(), ..form.clone() },
        InquiryForm::default()
    );
}

#[test]
fn set_keeps_last_value_written() {
    let mut form = InquiryForm::default();
    form.set(Field::CompanyName, "First").unwrap();
    form.set(Field::Message, "hello").unwrap();
    form.set(Field::CompanyName, "Second").unwrap();
    assert_eq!(form.company_name, "Second");
    assert_eq!(form.message, "hello");
    assert_eq!(form.contact_name, "");
}

#[test]
fn set_category_with_unknown_value_leaves_form_unchanged() {
    let mut form = filled_form();
    let before = form.clone();
    assert!(form.set(Field::Category, "bogus").is_err());
    assert_eq!(form, before);
}

#[test]
fn get_returns_category_value_label() {
    assert_eq!(filled_form().get(Field::Category), "안전");
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn default_form_is_missing_every_required_field() {
    assert_eq!(InquiryForm::default().missing_fields(), Field::REQUIRED.to_vec());
}

#[test]
fn whitespace_only_counts_as_present() {
    let mut form = filled_form();
    form.company_name = " ".to_owned();
    form.message = "\n".to_owned();
    assert!(form.missing_fields().is_empty());
    assert!(form.validate().is_ok());
}

#[test]
fn filled_form_validates() {
    assert!(filled_form().validate().is_ok());
}

#[test]
fn incomplete_error_lists_wire_names() {
    let err = InquiryError::Incomplete(vec![Field::CompanyName, Field::Message]);
    assert_eq!(err.to_string(), "missing required fields: companyName, message");
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn form_deserializes_from_contact_form_json() {
    let json = r#"{
        "companyName": "ABC Corp",
        "contactName": "Kim",
        "phone": "010-0000-0000",
        "email": "a@b.com",
        "type": "안전",
        "message": "Need consulting"
    }"#;
    let form: InquiryForm = serde_json::from_str(json).unwrap();
    assert_eq!(form, filled_form());
}

#[test]
fn form_without_type_defaults_to_labor() {
    let json = r#"{"companyName":"a","contactName":"b","phone":"c","email":"d","message":"e"}"#;
    let form: InquiryForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.category, Category::Labor);
}

#[test]
fn form_with_missing_keys_parses_as_empty_fields() {
    let json = r#"{"companyName":"a","type":"안전"}"#;
    let form: InquiryForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.company_name, "a");
    assert_eq!(form.category, Category::Safety);
    assert_eq!(
        form.missing_fields(),
        vec![Field::ContactName, Field::Phone, Field::Email, Field::Message]
    );
}

#[test]
fn form_with_unknown_type_fails_to_parse() {
    let json = r#"{"companyName":"a","contactName":"b","phone":"c","email":"d","type":"x","message":"e"}"#;
    assert!(serde_json::from_str::<InquiryForm>(json).is_err());
}

#[test]
fn submit_response_omits_empty_missing_list() {
    let json = serde_json::to_value(SubmitResponse::accepted()).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true }));

    let json = serde_json::to_value(SubmitResponse::incomplete(vec![Field::Phone])).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": false, "missing": ["phone"] }));
}

// =============================================================================
// Message composition
// =============================================================================

#[test]
fn compose_message_contains_every_field_and_recipient() {
    let text = compose_message(&filled_form(), DEFAULT_RECIPIENT);
    for needle in ["ABC Corp", "Kim", "010-0000-0000", "a@b.com", "안전", "Need consulting", DEFAULT_RECIPIENT] {
        assert!(text.contains(needle), "missing {needle} in {text}");
    }
}

#[test]
fn compose_message_layout() {
    let text = compose_message(&filled_form(), "ops@example.com");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "🔔 *[새로운 상담 신청]*");
    assert_eq!(lines[1], "➡ *수신자*: ops@example.com");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "🏢 *회사명*: ABC Corp");
    assert_eq!(lines[7], "📑 *분야*: 안전");
    assert_eq!(lines[9], "📝 *상세 내용*:");
    assert_eq!(lines[10], "Need consulting");
}

#[test]
fn compose_message_keeps_multiline_message_verbatim() {
    let mut form = filled_form();
    form.message = "line one\nline two".to_owned();
    let text = compose_message(&form, DEFAULT_RECIPIENT);
    assert!(text.ends_with("📝 *상세 내용*:\nline one\nline two\n"));
}
