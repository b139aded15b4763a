use super::*;

#[test]
fn validate_template_tag_trims_name_and_normalizes_colour() {
    assert_eq!(
        validate_template_tag("  Practice ", "#FF8800"),
        Ok(TemplateTagRequest { tag_name: "Practice".into(), color_code: "#ff8800".into() })
    );
}

#[test]
fn validate_template_tag_requires_name() {
    assert_eq!(validate_template_tag("   ", "#ff8800"), Err("Tag name is required."));
}

#[test]
fn validate_template_tag_rejects_bad_colour() {
    assert_eq!(validate_template_tag("Practice", "orange"), Err("Colour must be in #RRGGBB format."));
    assert_eq!(validate_template_tag("Practice", "#ff88"), Err("Colour must be in #RRGGBB format."));
}

#[test]
fn default_colour_is_valid() {
    assert!(validate_template_tag("x", DEFAULT_TEMPLATE_COLOR).is_ok());
}

#[test]
fn paths_match_route_table() {
    use crate::routes::{Page, RouteTable};

    let table = RouteTable::app().unwrap();
    assert_eq!(table.page_for(&list_path("4")), Page::TemplateTagList);
    assert_eq!(table.page_for(&create_path("4")), Page::TemplateTagCreate);
    assert_eq!(table.page_for(&edit_path("4", "9")), Page::TemplateTagEdit);
}

#[test]
fn paths_encode_ids() {
    assert_eq!(edit_path("a b", "x/y"), "/community/a%20b/template_tags/x%2Fy/edit");
}
