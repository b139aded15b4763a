//! Monthly calendar of a community.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::components::status::{InlineError, render_loadable};
use crate::net::types::CalendarEvent;
use crate::state::loadable::Loadable;
use crate::util::calendar::{YearMonth, events_by_day, iso_date, month_grid};
use crate::routes::href;
use crate::util::color::css_color;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Tags-by-date page for `date`.
pub fn day_path(community_id: &str, date: NaiveDate) -> String {
    href(
        "/community/:community_id/calendar/:date/tags/view",
        &[("community_id", community_id), ("date", &iso_date(date))],
    )
}

#[component]
pub fn CalendarPage(community_id: String) -> impl IntoView {
    let context = expect_context::<AppContext>();
    let Some(user_id) = context.session.user_id() else {
        return view! { <InlineError message="Log in again to see the calendar."/> }.into_any();
    };
    let month = RwSignal::new(YearMonth::current());
    let events = RwSignal::new(Loadable::<Vec<CalendarEvent>>::Idle);

    Effect::new(move || {
        let shown = month.get();
        let api = context.api.clone();
        let user_id = user_id.clone();
        events.set(Loadable::Loading);
        spawn_local(async move {
            let result = api.fetch_calendar_month(&user_id, shown.year(), shown.month()).await;
            // A later month may have been requested while this one loaded.
            if month.try_get_untracked() != Some(shown) {
                return;
            }
            if let Err(err) = &result {
                log::warn!("calendar fetch for {} failed: {err}", shown.label());
            }
            events.try_set(Loadable::from_result(result, "Could not load this month's events."));
        });
    });

    let grid = move |events: Vec<CalendarEvent>| {
        let shown = month.get_untracked();
        let by_day: BTreeMap<NaiveDate, Vec<CalendarEvent>> = events_by_day(&events, shown);
        let cells = month_grid(shown)
            .into_iter()
            .map(|cell| match cell {
                None => view! { <div class="calendar__cell calendar__cell--empty"></div> }.into_any(),
                Some(date) => {
                    let day_events = by_day.get(&date).cloned().unwrap_or_default();
                    view! {
                        <a class="calendar__cell" href=day_path(&community_id, date)>
                            <span class="calendar__day">{date.day()}</span>
                            {day_events
                                .into_iter()
                                .map(|event| {
                                    let style = format!("background-color: {}", css_color(event.color_code.as_deref()));
                                    view! { <span class="calendar__event" style=style>{event.tag}</span> }
                                })
                                .collect_view()}
                        </a>
                    }
                        .into_any()
                }
            })
            .collect_view();
        view! { <div class="calendar__grid">{cells}</div> }
    };

    view! {
        <section class="calendar">
            <header class="calendar__header">
                <button aria-label="Previous month" on:click=move |_| month.update(|shown| *shown = shown.prev())>
                    "◀"
                </button>
                <h1>{move || month.get().label()}</h1>
                <button aria-label="Next month" on:click=move |_| month.update(|shown| *shown = shown.next())>
                    "▶"
                </button>
            </header>
            <div class="calendar__weekdays">
                {WEEKDAYS.iter().map(|day| view! { <div class="calendar__weekday">{*day}</div> }).collect_view()}
            </div>
            {move || render_loadable(events.get(), grid.clone())}
        </section>
    }
    .into_any()
}
