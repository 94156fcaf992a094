use super::*;

fn decode_list(raw: serde_json::Value) -> ShopList {
    let raw: RawShopList = serde_json::from_value(raw).unwrap();
    ShopList::from(raw)
}

// =============================================================
// Field-drift tolerance
// =============================================================

#[test]
fn item_accepts_legacy_name_field() {
    let list = decode_list(serde_json::json!({
        "id": 1,
        "name": "Groceries",
        "owner": {"id": "u1", "nickname": "alice"},
        "items": [{"id": 10, "name": "Milk"}]
    }));
    assert_eq!(list.items[0].item_name, "Milk");
}

#[test]
fn item_accepts_item_name_field() {
    let list = decode_list(serde_json::json!({
        "id": 1,
        "name": "Groceries",
        "owner": {"id": "u1", "nickname": "alice"},
        "items": [{"id": 10, "item_name": "Milk"}]
    }));
    assert_eq!(list.items[0].item_name, "Milk");
}

#[test]
fn missing_optional_item_fields_default_to_empty() {
    let list = decode_list(serde_json::json!({
        "id": 1,
        "name": "Groceries",
        "owner": {"id": "u1", "nickname": "alice"},
        "items": [{"id": 10, "name": "Milk"}]
    }));
    let item = &list.items[0];
    assert_eq!(item.brand_name, "");
    assert_eq!(item.extra_info, "");
    assert!(!item.is_bought);
    assert!(item.available_stores.is_empty());
    assert!(item.flyer_details.is_empty());
}

#[test]
fn numeric_ids_accept_strings_and_float_integers() {
    let list = decode_list(serde_json::json!({
        "id": "42",
        "name": "Groceries",
        "owner": {"id": "u1", "nickname": "alice"},
        "items": [{"id": 7.0, "name": "Milk"}]
    }));
    assert_eq!(list.id, 42);
    assert_eq!(list.items[0].id, 7);
}

#[test]
fn fractional_id_is_rejected() {
    let raw = serde_json::json!({
        "id": 1.5,
        "name": "Groceries",
        "owner": {"id": "u1", "nickname": "alice"}
    });
    assert!(serde_json::from_value::<RawShopList>(raw).is_err());
}

// =============================================================
// Store dedup
// =============================================================

#[test]
fn available_stores_deduplicate_preserving_order() {
    let list = decode_list(serde_json::json!({
        "id": 1,
        "name": "Groceries",
        "owner": {"id": "u1", "nickname": "alice"},
        "items": [{
            "id": 10,
            "name": "Milk",
            "flyer": [
                {"store": "FreshMart", "brand": "Dairyland", "product_name": "Milk 2L"},
                {"store": "SaveCo", "brand": "Dairyland", "product_name": "Milk 4L"},
                {"store": "FreshMart", "brand": "Lucerne", "product_name": "Milk 1L"}
            ]
        }]
    }));
    assert_eq!(list.items[0].available_stores, vec!["FreshMart", "SaveCo"]);
    assert_eq!(list.items[0].flyer_details.len(), 3);
}

// =============================================================
// Envelopes and token responses
// =============================================================

#[test]
fn shoplists_envelope_defaults_to_empty() {
    let resp: ShopListsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(resp.shoplists.is_empty());
}

#[test]
fn flyers_envelope_defaults_to_empty() {
    let resp: FlyersResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(resp.flyers.is_empty());
}

#[test]
fn flyer_price_accepts_string_numbers() {
    let flyer: FlyerItem = serde_json::from_value(serde_json::json!({
        "store": "FreshMart",
        "brand": "Dairyland",
        "product_name": "Milk 2L",
        "original_price": "3.99"
    }))
    .unwrap();
    assert!((flyer.original_price - 3.99).abs() < f64::EPSILON);
}

#[test]
fn token_response_without_access_token_yields_no_pair() {
    let resp: TokenResponse =
        serde_json::from_value(serde_json::json!({"refresh_token": "r1"})).unwrap();
    assert!(resp.into_pair().is_none());
}

#[test]
fn token_response_with_access_token_yields_pair() {
    let resp: TokenResponse = serde_json::from_value(serde_json::json!({
        "access_token": "tok1",
        "refresh_token": "r1"
    }))
    .unwrap();
    let pair = resp.into_pair().unwrap();
    assert_eq!(pair.access_token, "tok1");
    assert_eq!(pair.refresh_token.as_deref(), Some("r1"));
}
