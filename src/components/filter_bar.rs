use std::rc::Rc;

use leptos::prelude::*;

use crate::models::Filter;

/// The three display-filter buttons. The active one gets an `active` class;
/// selection is reported upward so the choice can be persisted.
#[component]
pub fn FilterBar(
    current: ReadSignal<Filter>,
    on_select: Rc<dyn Fn(Filter) + 'static>,
) -> impl IntoView {
    view! {
        <div class="filter-buttons">
            {Filter::all()
                .into_iter()
                .map(|f| {
                    let cb = on_select.clone();
                    view! {
                        <button
                            class=move || if current.get() == f { "active" } else { "" }
                            on:click=move |_| (cb.as_ref())(f)
                        >
                            {f.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
