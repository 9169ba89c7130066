//! One card on the itinerary timeline.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::util::timeline::TimelineRow;

#[component]
pub fn TimelineItem(row: TimelineRow) -> impl IntoView {
    let class = format!("timeline-item {}", row.side.class());
    let entry = row.entry;

    view! {
        <li class=class style=row.style() data-index=row.index.to_string()>
            <div class="timeline-item__content">
                <div class="timeline-card">
                    <div class="timeline-card__time">
                        <span class="icon icon--clock" aria-hidden="true">"🕒"</span>
                        <span>{entry.time}</span>
                    </div>
                    <h3 class="timeline-card__title">{entry.title}</h3>
                    <p class="timeline-card__description">{entry.description}</p>
                </div>
            </div>
            <div class="timeline-item__node">
                <Icon icon=row.icon/>
            </div>
            <div class="timeline-item__spacer"></div>
        </li>
    }
}
