use std::cell::RefCell;

use super::*;

fn community(id: &str) -> CommunitySummary {
    CommunitySummary { id: id.into(), name: format!("c{id}"), icon_url: None }
}

#[test]
fn redirect_to_login_replaces_history() {
    let calls = RefCell::new(Vec::new());
    let navigate = |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace));

    redirect_to_login(&navigate);

    assert_eq!(calls.into_inner(), [("/auth/login".to_owned(), true)]);
}

#[test]
fn post_login_path_prefers_first_community() {
    assert_eq!(post_login_path(&[community("5"), community("9")]), "/community/5/calendar/view");
}

#[test]
fn post_login_path_defaults_to_home() {
    assert_eq!(post_login_path(&[]), "/");
}
