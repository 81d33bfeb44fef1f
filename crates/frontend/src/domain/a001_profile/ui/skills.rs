//! "My Technical Profile" section.

use crate::layout::tabs::{default_observers, TabbedPanel};
use crate::shared::components::SectionError;
use crate::shared::icons::icon;
use crate::shared::theme::TabTheme;
use contracts::domain::a001_profile::{load_profile, SkillTile, TabItem};
use leptos::prelude::*;

const SECTION_ID: &str = "skills";

#[component]
pub fn Skills() -> impl IntoView {
    let content = match load_profile() {
        Ok(profile) => view! {
            <TabbedPanel
                section_id=SECTION_ID
                aria_label="Skill tabs"
                items=profile.technical_profile.clone()
                label=|group: &TabItem| group.tab_label().to_string()
                render_panel=|group: TabItem| view! { <SkillPanel tiles=SkillTile::for_item(&group) /> }.into_any()
                theme=TabTheme::grey()
                observers=default_observers(&profile.reveal)
            />
        }
        .into_any(),
        Err(err) => view! { <SectionError message=err.to_string() /> }.into_any(),
    };

    view! {
        <section id=SECTION_ID class="section section--skills">
            <h2 class="numbered-heading">"My Technical Profile"</h2>
            <div class="section__inner">
                {content}
            </div>
        </section>
    }
}

#[component]
fn SkillPanel(tiles: Vec<SkillTile>) -> impl IntoView {
    view! {
        <fieldset class="skills__set">
            <ul>
                {tiles
                    .into_iter()
                    .map(|tile| {
                        if tile.icon.is_fallback() {
                            log::debug!("no icon registered for '{}', using placeholder", tile.label);
                        }
                        view! {
                            <li class="skills__tile">
                                {icon(tile.icon)}
                                <h4>{tile.label}</h4>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </fieldset>
    }
}
