use super::*;
use crate::net::types::TokenPair;
use crate::session::MemoryStorage;
use std::rc::Rc;

fn session_with_token(token: &str) -> Session {
    let session = Session::new(Rc::new(MemoryStorage::default()));
    session
        .set_tokens(&TokenPair {
            access_token: token.to_owned(),
            refresh_token: None,
        })
        .unwrap();
    session
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok1"), "Bearer tok1");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn success_statuses_pass() {
    let session = session_with_token("tok1");
    assert_eq!(fail_for_status(&session, 200, None), Ok(()));
    assert_eq!(fail_for_status(&session, 204, None), Ok(()));
}

#[test]
fn unauthorized_purges_stored_token_on_any_operation() {
    let session = session_with_token("tok1");
    assert_eq!(
        fail_for_status(&session, 401, None),
        Err(ApiError::SessionExpired)
    );
    assert!(session.access_token().is_none());
}

#[test]
fn not_found_is_distinct_on_single_resource_fetches() {
    let session = session_with_token("tok1");
    let err = fail_for_status(&session, 404, Some("Shop list")).unwrap_err();
    assert_eq!(err, ApiError::NotFound("Shop list"));
    assert_eq!(err.to_string(), "Shop list not found");
}

#[test]
fn not_found_without_resource_context_is_generic() {
    let session = session_with_token("tok1");
    assert_eq!(fail_for_status(&session, 404, None), Err(ApiError::Http(404)));
}

#[test]
fn other_statuses_carry_through() {
    let session = session_with_token("tok1");
    assert_eq!(fail_for_status(&session, 500, None), Err(ApiError::Http(500)));
    // Non-401 failures leave the token alone.
    assert_eq!(session.access_token().as_deref(), Some("tok1"));
}

// =============================================================
// Missing-token precondition: zero network calls
// =============================================================

#[test]
fn operations_fail_synchronously_without_a_token() {
    let session = Session::new(Rc::new(MemoryStorage::default()));
    assert_eq!(
        futures::executor::block_on(fetch_shop_lists(&session)),
        Err(ApiError::NoToken)
    );
    assert_eq!(
        futures::executor::block_on(fetch_shop_list(&session, 42)),
        Err(ApiError::NoToken)
    );
    assert_eq!(
        futures::executor::block_on(create_shop_list(&session, "Groceries")),
        Err(ApiError::NoToken)
    );
    assert_eq!(
        futures::executor::block_on(search_flyers(&session, "milk")),
        Err(ApiError::NoToken)
    );
    assert_eq!(
        futures::executor::block_on(remove_item(&session, 42, 7)),
        Err(ApiError::NoToken)
    );
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_item_omits_absent_optional_fields() {
    let item = NewItem {
        item_name: "Milk".to_owned(),
        ..NewItem::default()
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json, serde_json::json!({ "item_name": "Milk" }));
}

#[test]
fn new_item_includes_present_optional_fields() {
    let item = NewItem {
        item_name: "Milk 2L".to_owned(),
        brand_name: Some("Dairyland".to_owned()),
        extra_info: Some("2% fat".to_owned()),
        thumbnail: Some("https://cdn/img.png".to_owned()),
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "item_name": "Milk 2L",
            "brand_name": "Dairyland",
            "extra_info": "2% fat",
            "thumbnail": "https://cdn/img.png"
        })
    );
}

#[test]
fn item_patch_serializes_only_changed_fields() {
    let patch = ItemPatch {
        is_bought: Some(true),
        ..ItemPatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, serde_json::json!({ "is_bought": true }));
}
