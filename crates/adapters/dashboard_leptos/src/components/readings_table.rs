//! Recent readings, newest first.

use leptos::prelude::*;
use wattboard_domain::readings::{COLUMNS, ReadingRow, ReadingsTable as Table};

/// The readings table. Relay columns are coloured by state.
#[component]
pub fn ReadingsTable(#[prop(into)] table: Signal<Table>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Recent readings"</h2>
            <table>
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        table
                            .get()
                            .rows()
                            .map(|row| view! { <ReadingLine row=row.clone()/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn ReadingLine(row: ReadingRow) -> impl IntoView {
    view! {
        <tr>
            {row
                .cells()
                .into_iter()
                .map(|cell| {
                    let class = match cell.as_str() {
                        "ON" => "relay-on",
                        "OFF" => "relay-off",
                        _ => "",
                    };
                    view! { <td class=class>{cell}</td> }
                })
                .collect_view()}
        </tr>
    }
}
