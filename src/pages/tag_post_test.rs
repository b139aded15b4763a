use super::*;

#[test]
fn post_request_copies_template_fields() {
    let tag = TemplateTag { id: Some("3".into()), tag: "Practice".into(), color_code: "#ff0000".into() };
    assert_eq!(
        post_request(&tag, "7", "2025-03-01"),
        PostTagRequest {
            tag_name: "Practice".into(),
            tag_color: "#ff0000".into(),
            submitter_id: "7".into(),
            date: "2025-03-01".into(),
        }
    );
}

#[test]
fn tags_view_path_targets_date() {
    assert_eq!(tags_view_path("42", "2025-03-01"), "/community/42/calendar/2025-03-01/tags/view");
}
