//! Render-side formatting
//!
//! Markup fragments for the two shopper-facing surfaces: the product page
//! prompt and the cart line name. Values are escaped here, at the output
//! edge, and nowhere earlier.

use cartouche_model::{escape_html, CartLineItem, FieldDefinition, Product};

/// Render the product page prompt for a product's custom field
///
/// Returns `None` when the product stores no field title (or an empty
/// one); no empty control is ever shown. The stored title becomes the
/// escaped label of an empty text input: it prompts the shopper, whose
/// own text is the value the form posts back.
#[must_use]
pub fn field_prompt(product: &Product, field: &FieldDefinition) -> Option<String> {
    let title = product.meta(&field.meta_key)?;
    if title.trim().is_empty() {
        return None;
    }
    Some(format!(
        "<div class=\"{name}-wrapper\"><label for=\"{name}\">{label}</label>\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"\"></div>",
        name = field.form_name,
        label = escape_html(title),
    ))
}

/// Append a line's personalization title to its rendered name
///
/// Pure: returns `base` unchanged for plain lines, otherwise `base` with
/// the escaped title appended as a separate paragraph block.
#[must_use]
pub fn line_item_name(base: &str, item: &CartLineItem) -> String {
    match item.personalization() {
        Some(p) => format!("{base}<p>{}</p>", escape_html(p.title())),
        None => base.to_owned(),
    }
}
