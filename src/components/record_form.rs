//! Record Form Component
//!
//! Create form for one record kind. Validation runs on submit; the
//! first failure is shown above the submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriClient;
use crate::crud::{self, FormState};
use crate::fields::Editable;
use crate::record::Record;

use super::PageHandle;

#[component]
pub fn RecordForm<T: Record>(page: PageHandle<T>) -> impl IntoView {
    let form = RwSignal::new(FormState::<T::Draft>::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(new) = form.try_update(|f| f.check(T::validate)).flatten() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = crud::create::<T>(&TauriClient, &new, &page).await {
                log::error!("Error adding to {}: {}", T::COLLECTION, e);
            }
        });
    };

    let inputs = T::form_fields()
        .iter()
        .map(|spec| {
            let field = spec.field;
            view! {
                <input
                    type=spec.input.as_str()
                    aria-label=spec.label
                    placeholder=spec.placeholder
                    min=spec.min
                    prop:value=move || form.with(|f| f.draft().field_value(field))
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| f.edit(field, &raw));
                    }
                />
            }
        })
        .collect_view();

    view! {
        <form class="record-form" on:submit=on_submit>
            {inputs}
            {move || form.with(|f| f.error()).map(|e| view! {
                <p class="form-error">{e.to_string()}</p>
            })}
            <button type="submit">"Submit"</button>
        </form>
    }
}
