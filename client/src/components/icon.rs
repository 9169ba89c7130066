//! Decorative glyph for an `IconKey`.

use leptos::prelude::*;

use crate::data::itinerary::IconKey;

#[component]
pub fn Icon(icon: IconKey, #[prop(optional, into)] class_name: String) -> impl IntoView {
    let class = if class_name.is_empty() {
        format!("icon icon--{}", icon.key())
    } else {
        format!("icon icon--{} {class_name}", icon.key())
    };
    view! {
        <span class=class aria-hidden="true">{icon.glyph()}</span>
    }
}
