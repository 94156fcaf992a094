use super::*;

#[test]
fn core_url_joins_base_and_path() {
    let cfg = AppConfig::get();
    assert_eq!(
        cfg.core_url(endpoints::USER_PROFILE),
        format!("{}/core/v2/user", cfg.core_api_url)
    );
}

#[test]
fn callback_url_includes_base_path() {
    let cfg = AppConfig::get();
    assert!(cfg.callback_url().ends_with("/callback"));
    assert!(cfg.callback_url().contains(cfg.base_path));
}

#[test]
fn shoplist_endpoint_paths() {
    assert_eq!(endpoints::shoplist_by_id(42), "/core/v2/shoplist/42");
    assert_eq!(endpoints::shoplist_items(42), "/core/v2/shoplist/42/item");
    assert_eq!(endpoints::shoplist_item(42, 7), "/core/v2/shoplist/42/item/7");
    assert_eq!(endpoints::shoplist_leave(42), "/core/v2/shoplist/42/leave");
    assert_eq!(endpoints::shoplist_members(42), "/core/v2/shoplist/42/members");
}

#[test]
fn share_code_endpoint_paths() {
    assert_eq!(endpoints::shoplist_share_code(9), "/core/v2/shoplist/9/share-code");
    assert_eq!(
        endpoints::shoplist_share_code_revoke(9),
        "/core/v2/shoplist/9/share-code/revoke"
    );
}

#[test]
fn member_route_paths() {
    assert_eq!(routes::shop_list(3), "/member/shoplist/3");
    assert_eq!(routes::search_item(3), "/member/searchshopitem/3");
}
