use leptos::prelude::*;

use crate::features::calendar::panel::{EventsPanel, NO_EVENTS};

#[component]
pub fn EventsPanelView(panel: Memo<EventsPanel>) -> impl IntoView {
    view! {
        <div class="events-panel">
            <h3>{move || panel.with(|p| p.heading.clone())}</h3>
            {move || {
                let items = panel.with(|p| p.items.clone());
                if items.is_empty() {
                    view! { <p>{NO_EVENTS}</p> }.into_any()
                } else {
                    view! {
                        <ul class="events">
                            {items.into_iter().map(|item| view! {
                                <li>
                                    <span class=format!("ant-badge-status ant-badge-status-{}", item.kind.as_class())>
                                        {item.name}
                                    </span>
                                    <span class="event-info">{item.description}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }
            }}
            <div class="add-event">
                <button type="button" class="add-event-btn">"Add event"</button>
            </div>
        </div>
    }
}
