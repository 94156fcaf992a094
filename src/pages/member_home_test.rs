use super::*;
use crate::net::types::{Member, ShopListItem};

fn item(id: i64, stores: &[&str]) -> ShopListItem {
    ShopListItem {
        id,
        item_name: format!("item-{id}"),
        brand_name: String::new(),
        extra_info: String::new(),
        is_bought: false,
        available_stores: stores.iter().map(|s| (*s).to_owned()).collect(),
        flyer_details: Vec::new(),
    }
}

fn list(items: Vec<ShopListItem>) -> ShopList {
    ShopList {
        id: 1,
        name: "Groceries".to_owned(),
        owner: Member {
            id: "u1".to_owned(),
            nickname: "alice".to_owned(),
        },
        members: Vec::new(),
        items,
    }
}

#[test]
fn hot_deal_stores_unions_across_items() {
    let list = list(vec![
        item(1, &["FreshMart", "SaveCo"]),
        item(2, &["SaveCo", "GreenGrocer"]),
    ]);
    assert_eq!(hot_deal_stores(&list), vec!["FreshMart", "SaveCo", "GreenGrocer"]);
}

#[test]
fn hot_deal_stores_empty_without_flyers() {
    let list = list(vec![item(1, &[]), item(2, &[])]);
    assert!(hot_deal_stores(&list).is_empty());
}
