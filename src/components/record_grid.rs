//! Record Grid Component
//!
//! Sortable, filterable, paginated table with per-row edit and delete
//! actions. Editing opens the dialog; delete is immediate.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriClient;
use crate::crud::{self, DialogState};
use crate::grid::{GridState, SortDirection, PAGE_SIZE_OPTIONS};
use crate::record::Record;

use super::{EditDialog, PageHandle};

#[component]
pub fn RecordGrid<T: Record>(page: PageHandle<T>) -> impl IntoView {
    let grid = RwSignal::new(GridState::default());
    let dialog = RwSignal::new(DialogState::<T>::default());
    let current = Memo::new(move |_| page.with_records(|records| grid.with(|g| g.view(records))));
    let column_count = T::columns().len() + 1;

    let headers = T::columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let indicator = move || match grid.with(|g| g.sort()) {
                Some((c, SortDirection::Ascending)) if c == index => " ▲",
                Some((c, SortDirection::Descending)) if c == index => " ▼",
                _ => "",
            };
            let class = if column.numeric { "sortable numeric" } else { "sortable" };
            view! {
                <th class=class on:click=move |_| grid.update(|g| g.toggle_sort(index))>
                    {column.header}
                    {indicator}
                </th>
            }
        })
        .collect_view();

    let body = move || {
        let rows = current.with(|p| p.rows.clone());
        if rows.is_empty() {
            return view! {
                <tr><td colspan=column_count>"No rows"</td></tr>
            }
            .into_any();
        }
        rows.into_iter()
            .map(|record| {
                let id = record.id();
                let cells = T::columns()
                    .iter()
                    .enumerate()
                    .map(|(index, column)| {
                        let class = if column.numeric { "numeric" } else { "" };
                        view! { <td class=class>{record.cell(index).to_string()}</td> }
                    })
                    .collect_view();
                view! {
                    <tr>
                        {cells}
                        <td>
                            <button
                                class="icon-btn"
                                title="Edit"
                                on:click=move |_| dialog.update(|d| d.open(record.clone()))
                            >
                                "✎"
                            </button>
                            <button
                                class="icon-btn danger"
                                title="Delete"
                                on:click=move |_| {
                                    spawn_local(async move {
                                        if let Err(e) = crud::remove::<T>(&TauriClient, id, &page).await {
                                            log::error!("Error deleting from {}: {}", T::COLLECTION, e);
                                        }
                                    });
                                }
                            >
                                "🗑"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let page_sizes = PAGE_SIZE_OPTIONS
        .iter()
        .map(|&size| {
            view! {
                <option value=size.to_string() selected=move || grid.with(|g| g.page_size()) == size>
                    {size}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="grid">
            <p>{T::GRID_TITLE}</p>
            <div class="grid-toolbar">
                <input
                    type="search"
                    placeholder="Search…"
                    prop:value=move || grid.with(|g| g.quick_filter().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        grid.update(|g| g.set_quick_filter(&text));
                    }
                />
            </div>
            <table>
                <thead>
                    <tr>
                        {headers}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <div class="grid-footer">
                <label>
                    "Rows per page: "
                    <select on:change=move |ev| {
                        let size = event_target_value(&ev).parse().unwrap_or(PAGE_SIZE_OPTIONS[0]);
                        grid.update(|g| g.set_page_size(size));
                    }>
                        {page_sizes}
                    </select>
                </label>
                <span>{move || current.with(|p| p.range_label())}</span>
                <button
                    disabled=move || current.with(|p| !p.has_prev())
                    on:click=move |_| {
                        let total = current.with(|p| p.total);
                        grid.update(|g| g.prev_page(total));
                    }
                >
                    "‹"
                </button>
                <button
                    disabled=move || current.with(|p| !p.has_next())
                    on:click=move |_| {
                        let total = current.with(|p| p.total);
                        grid.update(|g| g.next_page(total));
                    }
                >
                    "›"
                </button>
            </div>
            <EditDialog<T> dialog=dialog page=page/>
        </div>
    }
}
