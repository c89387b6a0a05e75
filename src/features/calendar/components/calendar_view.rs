use leptos::prelude::*;

use super::events_panel::EventsPanelView;
use crate::core::config::BoardConfig;
use crate::features::calendar::grid::{build_month_grid, year_options, DayCell, Membership};
use crate::features::calendar::index::build_event_index;
use crate::features::calendar::panel::{build_events_panel, month_name};
use crate::features::calendar::state::{today, CalendarState};
use crate::models::Task;

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
pub fn CalendarView(tasks: Vec<Task>) -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let today = today();
    let Some(initial) = CalendarState::starting_at(today) else {
        web_sys::console::error_1(&format!("Cannot display month of {:?}", today).into());
        return view! { <p class="calendar-error">"Calendar unavailable"</p> }.into_any();
    };

    let state = RwSignal::new(initial);
    let index = StoredValue::new(build_event_index(&tasks));
    let grid = Memo::new(move |_| {
        let s = state.get();
        index.with_value(|i| build_month_grid(s.shown, i, s.selected))
    });
    let panel = Memo::new(move |_| {
        let selected = state.with(|s| s.selected);
        index.with_value(|i| build_events_panel(selected, i))
    });

    let on_month_change = move |ev| {
        if let Ok(month) = event_target_value(&ev).parse::<u32>() {
            state.update(|s| s.show(month, s.shown.year()));
        }
    };
    let on_year_change = move |ev| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            state.update(|s| s.show(s.shown.month(), year));
        }
    };

    let render_cell = move |cell: &DayCell| {
        let day = cell.day;
        let membership = cell.membership;
        let dots = (!cell.dots.is_empty()).then(|| {
            view! {
                <div class="cell-events">
                    {cell.dots.iter().map(|dot| view! {
                        <div class=format!("event-dot {}", dot.kind.as_class()) title=dot.title.clone()></div>
                    }).collect::<Vec<_>>()}
                </div>
            }
        });
        view! {
            <td
                class=cell.css_class()
                on:click=move |_| {
                    if membership == Membership::Current {
                        state.update(|s| {
                            s.select(day, membership);
                        });
                    }
                }
            >
                <div class="ant-picker-cell-inner">{day}</div>
                {dots}
            </td>
        }
    };

    view! {
        <div class="calendar-page">
            <div class="calendar-header">
                <button type="button" class="prev-month" on:click=move |_| state.update(|s| s.prev_month())>"‹"</button>
                <select class="month-select" on:change=on_month_change>
                    {move || {
                        let shown = state.with(|s| s.shown.month());
                        (0..12u32).map(|m| view! {
                            <option value=m.to_string() selected=m == shown>{month_name(m)}</option>
                        }).collect::<Vec<_>>()
                    }}
                </select>
                <select class="year-select" on:change=on_year_change>
                    {move || {
                        let shown = state.with(|s| s.shown.year());
                        year_options(today.year, config.year_span, shown).into_iter().map(|y| view! {
                            <option value=y.to_string() selected=y == shown>{y}</option>
                        }).collect::<Vec<_>>()
                    }}
                </select>
                <button type="button" class="next-month" on:click=move |_| state.update(|s| s.next_month())>"›"</button>
                <button type="button" class="btn-secondary today-btn" on:click=move |_| state.update(|s| s.jump_to(today))>"Today"</button>
            </div>
            <div class="calendar-body">
                <table class="ant-picker-content">
                    <thead>
                        <tr>{WEEKDAY_NAMES.iter().map(|d| view! { <th>{*d}</th> }).collect::<Vec<_>>()}</tr>
                    </thead>
                    <tbody>
                        {move || grid.with(|g| {
                            g.weeks().map(|week| view! {
                                <tr>{week.iter().map(render_cell).collect::<Vec<_>>()}</tr>
                            }).collect::<Vec<_>>()
                        })}
                    </tbody>
                </table>
                <EventsPanelView panel=panel />
            </div>
        </div>
    }
    .into_any()
}
