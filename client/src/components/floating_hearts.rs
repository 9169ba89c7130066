//! Background layer of hearts drifting up the proposal page.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::data::itinerary::IconKey;
use crate::util::hearts::FloatingHeart;
#[cfg(feature = "hydrate")]
use crate::util::hearts::{FLOATING_HEART_COUNT, floating_hearts};

#[component]
pub fn FloatingHearts() -> impl IntoView {
    let hearts = RwSignal::new(Vec::<FloatingHeart>::new());

    // Effects only run in the browser, so SSR markup has no hearts.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        hearts.set(floating_hearts(FLOATING_HEART_COUNT, &mut js_sys::Math::random));
    });

    view! {
        <div class="floating-hearts" aria-hidden="true">
            <For
                each=move || hearts.get()
                key=|heart| heart.id
                children=move |heart| {
                    view! {
                        <div class="floating-heart" style=heart.style()>
                            <Icon icon=IconKey::Heart/>
                        </div>
                    }
                }
            />
        </div>
    }
}
