//! Edit Dialog Component
//!
//! Modal editor for the selected record. Save sends the whole record,
//! refetches, then closes; cancel drops the edits. Apart from refusing
//! numeric text that does not parse, nothing is validated here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriClient;
use crate::crud::{self, DialogState};
use crate::record::Record;

use super::PageHandle;

fn edit_inputs<T: Record>(dialog: RwSignal<DialogState<T>>) -> impl IntoView {
    T::edit_fields()
        .iter()
        .map(|spec| {
            let field = spec.field;
            view! {
                <label>
                    {spec.label}
                    <input
                        type=spec.input.as_str()
                        class:invalid=move || dialog.with(|d| d.is_rejected(field))
                        prop:value=move || dialog.with(|d| d.field_text(field))
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            dialog.update(|d| d.edit(field, &raw));
                        }
                    />
                </label>
            }
        })
        .collect_view()
}

#[component]
pub fn EditDialog<T: Record>(dialog: RwSignal<DialogState<T>>, page: PageHandle<T>) -> impl IntoView {
    let on_save = move |_| {
        let mut state = dialog.get_untracked();
        let Some(id) = state.selected().map(|record| record.id()) else {
            return;
        };
        spawn_local(async move {
            // The dialog may have moved on to another record meanwhile
            match crud::save(&TauriClient, &mut state, &page).await {
                Ok(()) => dialog.update(|d| d.close_if_editing(id)),
                Err(e) => log::error!("Error updating {}: {}", T::COLLECTION, e),
            }
        });
    };
    let on_cancel = move |_| dialog.update(|d| d.close());

    view! {
        <Show when=move || dialog.with(|d| d.is_open())>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog">
                    <h2>{T::DIALOG_TITLE}</h2>
                    {edit_inputs(dialog)}
                    <div class="dialog-actions">
                        <button type="button" on:click=on_cancel>"Cancel"</button>
                        <button type="button" on:click=on_save>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
