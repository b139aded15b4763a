use super::*;

fn config() -> ApiConfig {
    ApiConfig { base_url: "http://api.test".into(), ..ApiConfig::default() }
}

#[test]
fn member_row_uses_profile() {
    let profile = UserProfile { name: "Ada".into(), icon_name: Some("ada.png".into()), ..UserProfile::default() };
    assert_eq!(
        member_row(&config(), "7".into(), Ok(profile)),
        MemberRow { user_id: "7".into(), name: "Ada".into(), icon: Some("http://api.test/uploads/ada.png".into()) }
    );
}

#[test]
fn member_row_without_icon_falls_back_to_initials() {
    let profile = UserProfile { name: "Ada".into(), icon_name: Some(String::new()), ..UserProfile::default() };
    assert_eq!(member_row(&config(), "7".into(), Ok(profile)).icon, None);
}

#[test]
fn member_row_placeholder_names_the_id() {
    let row = member_row(&config(), "9".into(), Err(ApiError::Status { status: 404, message: None }));
    assert_eq!(row.name, "Unknown user (9)");
    assert_eq!(row.icon, None);
}
