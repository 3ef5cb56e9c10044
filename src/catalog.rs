//! The static food and beverage menu.
//!
//! The catalog is a read-only collaborator: the cart copies item fields at
//! insertion time and never reads back into it. There is no stock tracking.

use crate::model::Item;

/// Returns the full menu in display order.
pub fn menu() -> Vec<Item> {
    vec![
        Item::new(
            1,
            "Waffer",
            30.0,
            "https://png.pngtree.com/png-vector/20241119/ourlarge/pngtree-high-quality-waffle-cookies-clipart-for-tasty-dessert-illustrations-png-image_14491326.png",
            "Crispy and delicious waffer cookies",
        ),
        Item::new(
            2,
            "Biscuit",
            25.0,
            "https://s.alicdn.com/@sc04/kf/H9c951e1e671043b7ab0b3e771118765c7.jpg_720x720q50.jpg",
            "Crunchy biscuits perfect with tea or coffee",
        ),
        Item::new(
            3,
            "Sweet Lime Water",
            45.0,
            "https://images.squarespace-cdn.com/content/v1/592308c2d2b8577cbf90c0ee/c73d3cb0-80fb-4f38-896f-16643b27b0b0/Recipe+Fresh+Lime+Soda.jpg",
            "Refreshing sweet lime water with a hint of mint",
        ),
        Item::new(
            4,
            "Cold Coffee",
            60.0,
            "https://www.allrecipes.com/thmb/Hqro0FNdnDEwDjrEoxhMfKdWfOY=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/21667-easy-iced-coffee-ddmfs-4x3-0093-7becf3932bd64ed7b594d46c02d0889f.jpg",
            "Chilled coffee with creamy milk and ice",
        ),
        Item::new(
            5,
            "Masala Tea",
            35.0,
            "https://boulderlocavore.com/wp-content/uploads/2020/10/Chai-Masala-and-latte-title-image.jpg",
            "Aromatic masala chai with spices",
        ),
        Item::new(
            6,
            "Cappuccino",
            65.0,
            "https://images.ctfassets.net/v601h1fyjgba/6TroCkgvDucbXj1OSPeve5/7cfeb09a7498e59bd7a48c4e048d2cec/Lite_Iced_Cappuccino_Hi.jpg",
            "Rich and creamy cappuccino with frothy milk",
        ),
        Item::new(
            7,
            "Black Coffee",
            50.0,
            "https://www.cariboucoffee.com/wp-content/uploads/2020/07/2024_SignatureFoilRedesign_ProductProfile_Dark-4_2000x2000_Mahogany.png",
            "Strong and bold black coffee",
        ),
        Item::new(
            8,
            "Herbal Green Tea",
            40.0,
            "https://m.media-amazon.com/images/I/81ujLBzJ14L.jpg",
            "Soothing herbal green tea with antioxidants",
        ),
    ]
}

/// Looks up a menu item by id.
pub fn find(id: u32) -> Option<Item> {
    menu().into_iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_ids_are_unique() {
        let menu = menu();
        for item in &menu {
            assert_eq!(menu.iter().filter(|other| other.id == item.id).count(), 1);
        }
    }

    #[test]
    fn find_returns_matching_item() {
        let item = find(4).expect("Cold Coffee should be on the menu");
        assert_eq!(item.name, "Cold Coffee");
        assert_eq!(item.price, 60.0);
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert!(find(999).is_none());
    }
}
