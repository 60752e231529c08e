//! Entity Page Component
//!
//! One CRUD page: heading, create form, and the grid once the first
//! fetch has settled. Generic over the record kind.

use std::marker::PhantomData;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriClient;
use crate::crud::{load, RecordCache, Refetch};
use crate::record::Record;

use super::{RecordForm, RecordGrid};

/// Shared handle to a page's fetched list
pub struct PageHandle<T: Send + Sync + 'static> {
    cache: RwSignal<RecordCache<T>>,
}

impl<T: Send + Sync + 'static> Clone for PageHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PageHandle<T> {}

impl<T: Record> PageHandle<T> {
    pub fn new() -> Self {
        Self { cache: RwSignal::new(RecordCache::default()) }
    }

    pub fn is_loading(&self) -> bool {
        self.cache.with(|cache| cache.is_loading())
    }

    pub fn with_records<U>(&self, f: impl FnOnce(&[T]) -> U) -> U {
        self.cache.with(|cache| f(cache.records()))
    }
}

#[async_trait(?Send)]
impl<T: Record> Refetch for PageHandle<T> {
    async fn refetch(&self) {
        let fetched = load::<T>(&TauriClient).await;
        self.cache.update(|cache| cache.apply_fetch(fetched));
    }
}

#[component]
pub fn EntityPage<T: Record>(#[prop(optional)] _kind: PhantomData<T>) -> impl IntoView {
    let page = PageHandle::<T>::new();

    // Fetch once when the page mounts
    Effect::new(move |_| {
        spawn_local(async move {
            page.refetch().await;
        });
    });

    view! {
        <div class="entity-page">
            <h1>{T::PAGE_TITLE}</h1>
            <RecordForm<T> page=page/>
            <Show
                when=move || !page.is_loading()
                fallback=|| view! { <p>{T::LOADING_TEXT}</p> }
            >
                <RecordGrid<T> page=page/>
            </Show>
        </div>
    }
}
