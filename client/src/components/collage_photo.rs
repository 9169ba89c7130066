//! Framed photo in the proposal-page collage.
//!
//! DESIGN
//! ======
//! The heart placeholder and file-name label are always rendered; the
//! `<img>` sits on top of them and stays transparent until it has actually
//! decoded. A missing photo, or a page that never hydrates, therefore shows
//! the placeholder rather than a broken-image icon.
//!
//! The `<img>` is rendered on the server, so its `load` event can fire
//! before hydration attaches the handler. After hydration the component
//! also inspects the element directly via `settled_load`.

#[cfg(test)]
#[path = "collage_photo_test.rs"]
mod collage_photo_test;

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::data::collage::CollagePhoto;
use crate::data::itinerary::IconKey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoLoad {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Load state implied by an `<img>` element's `complete` flag and natural
/// width, or `None` while it is still in flight.
#[must_use]
pub fn settled_load(complete: bool, natural_width: u32) -> Option<PhotoLoad> {
    match (complete, natural_width) {
        (false, _) => None,
        (true, 0) => Some(PhotoLoad::Failed),
        (true, _) => Some(PhotoLoad::Loaded),
    }
}

/// Class list for the `<img>`: transparent until it has loaded.
#[must_use]
pub fn image_class(load: PhotoLoad) -> &'static str {
    match load {
        PhotoLoad::Loaded => "collage-photo__image",
        PhotoLoad::Loading | PhotoLoad::Failed => "collage-photo__image collage-photo__image--loading",
    }
}

#[component]
pub fn CollagePhotoCard(photo: CollagePhoto, index: usize) -> impl IntoView {
    let load = RwSignal::new(PhotoLoad::Loading);
    let img_ref = NodeRef::<leptos::html::Img>::new();
    let label = photo.file_name();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        if load.get_untracked() != PhotoLoad::Loading {
            return;
        }
        if let Some(settled) = settled_load(img.complete(), img.natural_width()) {
            if settled == PhotoLoad::Failed {
                log::warn!("collage photo unavailable before hydration: {}", photo.src);
            }
            load.set(settled);
        }
    });

    view! {
        <div class="collage-photo" style=photo.frame_style(index)>
            <div class="collage-photo__frame">
                <div class="collage-photo__placeholder">
                    <Icon icon=IconKey::Heart class_name="collage-photo__placeholder-icon"/>
                    <span class="collage-photo__label">{label}</span>
                </div>
                <img
                    class=move || image_class(load.get())
                    node_ref=img_ref
                    src=photo.src
                    alt=photo.alt
                    on:load=move |_| load.set(PhotoLoad::Loaded)
                    on:error=move |_| {
                        #[cfg(feature = "hydrate")]
                        log::warn!("collage photo failed to load: {}", photo.src);
                        load.set(PhotoLoad::Failed);
                    }
                />
            </div>
        </div>
    }
}
