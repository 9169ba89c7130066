//! Proposal page (`/`): the question, a "Yes" that celebrates and redirects,
//! and a "No" that will not let itself be clicked.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use leptos::prelude::*;

use crate::components::collage_photo::CollagePhotoCard;
use crate::components::floating_hearts::FloatingHearts;
use crate::components::icon::Icon;
use crate::data::collage::PHOTO_COLLAGE;
use crate::data::itinerary::IconKey;
use crate::state::celebration::CelebrationState;
use crate::state::proposal::ProposalState;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{current_viewport, element_size};

/// Class list for the in-row "No" button. Once the button has fled, the
/// row keeps an invisible placeholder so "Yes" stays centered.
#[must_use]
pub fn docked_no_class(fleeing: bool) -> &'static str {
    if fleeing {
        "proposal__no proposal__no--placeholder"
    } else {
        "proposal__no"
    }
}

#[component]
pub fn ProposalPage() -> impl IntoView {
    let state = RwSignal::new(ProposalState::default());
    let celebration = expect_context::<RwSignal<CelebrationState>>();
    let docked_ref = NodeRef::<leptos::html::Button>::new();
    let fleeing_ref = NodeRef::<leptos::html::Button>::new();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let fleeing = move || state.with(|s| s.no_button.is_fleeing());

    // Measure whichever "No" button is live and send it somewhere else.
    let move_no_button = move || {
        #[cfg(feature = "hydrate")]
        {
            let button = if state.with_untracked(|s| s.no_button.is_fleeing()) {
                fleeing_ref.get_untracked()
            } else {
                docked_ref.get_untracked()
            };
            let Some(button) = button else {
                return;
            };
            let Some(viewport) = current_viewport() else {
                return;
            };
            let size = element_size(&button);
            state.update(|s| s.dodge(viewport, size, &mut js_sys::Math::random));
            log::debug!("no button dodged ({} so far)", state.with_untracked(|s| s.dodges));
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let Some(button) = fleeing_ref.get_untracked() else {
                return;
            };
            let Some(viewport) = current_viewport() else {
                return;
            };
            let size = element_size(&button);
            state.update(|s| {
                s.handle_resize(viewport, size, &mut js_sys::Math::random);
            });
        });
        on_cleanup(move || handle.remove());
    }

    let on_yes = move |_| {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let Some(navigation) = state.try_update(ProposalState::accept).flatten() else {
            return;
        };
        celebration.update(CelebrationState::start);

        #[cfg(feature = "hydrate")]
        {
            log::info!(
                "proposal accepted after {} dodges; redirecting to {} in {}ms",
                state.with_untracked(|s| s.dodges),
                navigation.route,
                navigation.delay_ms
            );
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(navigation.delay_ms).await;
                navigate(navigation.route, leptos_router::NavigateOptions::default());
            });
        }
    };

    view! {
        <main class="proposal">
            <div class="proposal__collage">
                {PHOTO_COLLAGE
                    .iter()
                    .enumerate()
                    .map(|(index, photo)| view! { <CollagePhotoCard photo=*photo index=index/> })
                    .collect_view()}
            </div>

            <FloatingHearts/>

            <div class="proposal__veil"></div>

            <div class="proposal__content">
                <div class="proposal__badge">
                    <span class="icon icon--sparkles" aria-hidden="true">"✨"</span>
                    <Icon icon=IconKey::Heart class_name="proposal__badge-heart"/>
                    <span class="icon icon--sparkles" aria-hidden="true">"✨"</span>
                </div>

                <h1 class="proposal__question">"Will you be my Valentine?"</h1>
                <p class="proposal__subtitle">"You make every day feel like Valentine's Day."</p>

                <div class="proposal__buttons">
                    <button class="proposal__yes" on:click=on_yes>
                        "Yes!"
                    </button>
                    <button
                        class=move || docked_no_class(fleeing())
                        node_ref=docked_ref
                        aria-hidden=move || fleeing().to_string()
                        tabindex=move || if fleeing() { "-1" } else { "0" }
                        on:pointerenter=move |_| {
                            if !fleeing() {
                                move_no_button();
                            }
                        }
                        on:touchstart=move |_| {
                            if !fleeing() {
                                move_no_button();
                            }
                        }
                    >
                        "No"
                    </button>
                </div>

                <p class="proposal__hint">"(There's really only one right answer here...)"</p>
            </div>

            <Show when=fleeing>
                <button
                    class="proposal__no proposal__no--fleeing"
                    node_ref=fleeing_ref
                    style=move || state.with(ProposalState::fleeing_style)
                    on:pointerenter=move |_| move_no_button()
                    on:touchstart=move |_| move_no_button()
                >
                    "No"
                </button>
            </Show>
        </main>
    }
}
