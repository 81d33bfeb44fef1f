use crate::domain::a001_profile::ui::{Certifications, Skills};
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Shell>
                <Skills />
                <Certifications />
            </Shell>
        </ConfigProvider>
    }
}
