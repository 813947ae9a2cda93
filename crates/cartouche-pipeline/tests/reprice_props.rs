use cartouche_model::{Cart, CartLineItem, Money, Personalization, ProductId, RequestOrigin};
use cartouche_pipeline::PriceRewriter;
use proptest::prelude::*;

fn arb_origin() -> impl Strategy<Value = RequestOrigin> {
    prop_oneof![
        Just(RequestOrigin::Storefront),
        Just(RequestOrigin::AdminPage),
        Just(RequestOrigin::AdminAsync),
    ]
}

fn arb_cart() -> impl Strategy<Value = Cart> {
    proptest::collection::vec(
        (
            1u32..5,
            0i64..100_000,
            proptest::option::of(("[a-zA-Z ]{1,20}", 0i64..100_000)),
        ),
        0..8,
    )
    .prop_map(|lines| {
        let mut cart = Cart::new();
        for (quantity, base, personalization) in lines {
            cart.add(CartLineItem::new(
                ProductId::new(),
                None,
                quantity,
                Money::from_minor(base),
                personalization
                    .map(|(title, total)| Personalization::new(title, Money::from_minor(total))),
            ));
        }
        cart
    })
}

proptest! {
    #[test]
    fn repricing_is_idempotent(mut cart in arb_cart(), origin in arb_origin()) {
        let rewriter = PriceRewriter::new();
        rewriter.apply(&mut cart, origin);
        let after_one = cart.clone();
        rewriter.apply(&mut cart, origin);
        prop_assert_eq!(&cart, &after_one);
    }

    #[test]
    fn every_personalized_line_ends_at_its_total(mut cart in arb_cart()) {
        PriceRewriter::new().apply(&mut cart, RequestOrigin::Storefront);
        for line in cart.iter() {
            if let Some(p) = line.personalization() {
                prop_assert_eq!(line.unit_price(), p.total_price());
            }
        }
    }

    #[test]
    fn admin_page_pass_changes_nothing(mut cart in arb_cart()) {
        let before = cart.clone();
        let rewritten = PriceRewriter::new().apply(&mut cart, RequestOrigin::AdminPage);
        prop_assert_eq!(rewritten, 0);
        prop_assert_eq!(&cart, &before);
    }
}
