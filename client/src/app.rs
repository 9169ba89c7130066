//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::confetti_canvas::ConfettiCanvas;
use crate::pages::{itinerary::ItineraryPage, proposal::ProposalPage};
use crate::state::celebration::CelebrationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Two static routes: the proposal at `/` and the itinerary it redirects to.
/// The confetti overlay sits outside the router so a celebration survives
/// the redirect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let celebration = RwSignal::new(CelebrationState::default());
    provide_context(celebration);

    view! {
        <Stylesheet id="leptos" href="/pkg/valentine.css"/>
        <Title text="Will you be my Valentine?"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProposalPage/>
                <Route path=StaticSegment("itinerary") view=ItineraryPage/>
            </Routes>
        </Router>

        <ConfettiCanvas/>
    }
}
