//! Itinerary page (`/itinerary`): the day's plan as an alternating timeline.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icon::Icon;
use crate::components::timeline_item::TimelineItem;
use crate::data::itinerary::{ITINERARY, IconKey};
use crate::util::timeline::timeline_rows;

#[component]
pub fn ItineraryPage() -> impl IntoView {
    let rows = timeline_rows(ITINERARY);

    view! {
        <Title text="Our Valentine's Day"/>
        <main class="itinerary">
            <section class="itinerary__header">
                <div class="itinerary__badge">
                    <Icon icon=IconKey::Heart class_name="itinerary__badge-heart"/>
                </div>
                <h1 class="itinerary__title">"YAYY!"</h1>
                <p class="itinerary__subtitle">"here's what I have planned for our special day"</p>
            </section>

            <section class="itinerary__timeline">
                <div class="timeline">
                    <div class="timeline__line" aria-hidden="true"></div>
                    <ol class="timeline__items">
                        {rows.into_iter().map(|row| view! { <TimelineItem row=row/> }).collect_view()}
                    </ol>
                    <div class="timeline__end" aria-hidden="true">
                        <div class="timeline__end-heart">
                            <Icon icon=IconKey::Heart/>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="itinerary__footer">
                <p class="itinerary__footer-text">"can't wait to spend this day with you!"</p>
                <a href="/" class="itinerary__back">"← back to home"</a>
            </footer>
        </main>
    }
}
