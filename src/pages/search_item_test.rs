use super::*;

fn flyer(brand: &str, description: &str, image_url: &str) -> FlyerItem {
    FlyerItem {
        store: "FreshMart".to_owned(),
        brand: brand.to_owned(),
        product_name: "Milk 2L".to_owned(),
        description: description.to_owned(),
        disclaimer_text: String::new(),
        image_url: image_url.to_owned(),
        images: Vec::new(),
        original_price: 3.99,
        pre_price_text: String::new(),
        price_text: "$2.99".to_owned(),
        post_price_text: String::new(),
        start_date: 0,
        end_date: 0,
    }
}

#[test]
fn typed_item_trims_and_rejects_blank_input() {
    assert_eq!(typed_new_item("   "), None);
    let item = typed_new_item("  milk  ").unwrap();
    assert_eq!(item.item_name, "milk");
    assert!(item.brand_name.is_none());
    assert!(item.thumbnail.is_none());
}

#[test]
fn flyer_item_carries_brand_description_and_thumbnail() {
    let item = flyer_to_new_item(&flyer("Dairyland", "2% milk", "https://cdn/milk.png"));
    assert_eq!(item.item_name, "Milk 2L");
    assert_eq!(item.brand_name.as_deref(), Some("Dairyland"));
    assert_eq!(item.extra_info.as_deref(), Some("2% milk"));
    assert_eq!(item.thumbnail.as_deref(), Some("https://cdn/milk.png"));
}

#[test]
fn flyer_item_omits_empty_fields() {
    let item = flyer_to_new_item(&flyer("", "", ""));
    assert_eq!(item.item_name, "Milk 2L");
    assert!(item.brand_name.is_none());
    assert!(item.extra_info.is_none());
    assert!(item.thumbnail.is_none());
}
