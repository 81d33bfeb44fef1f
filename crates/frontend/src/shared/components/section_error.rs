use leptos::prelude::*;
use thaw::*;

/// Shown in place of a section's panels when its content cannot be built.
#[component]
pub fn SectionError(#[prop(into)] message: String) -> impl IntoView {
    log::error!("{}", message);

    view! {
        <div style="width: 100%; margin-bottom: var(--spacing-md);">
            <MessageBar intent=MessageBarIntent::Error>
                <span>{message}</span>
            </MessageBar>
        </div>
    }
}
