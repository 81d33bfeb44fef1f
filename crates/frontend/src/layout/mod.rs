pub mod tabs;

use leptos::prelude::*;

/// Page shell: a single column of numbered sections.
///
/// ```text
/// +------------------------------+
/// |  main#content                |
/// |    section (Skills)          |
/// |    section (Certifications)  |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <main id="content" class="app-main">
                {children()}
            </main>
        </div>
    }
}
