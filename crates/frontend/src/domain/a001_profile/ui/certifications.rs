//! "Professional Certifications" section.

use crate::layout::tabs::{default_observers, TabbedPanel};
use crate::shared::components::SectionError;
use crate::shared::icons::icon;
use crate::shared::theme::TabTheme;
use contracts::domain::a001_profile::{load_profile, CertificationCard};
use contracts::enums::icon_key::IconKey;
use contracts::shared::assets::certificate_catalog;
use contracts::shared::reveal::RevealConfig;
use leptos::prelude::*;

const SECTION_ID: &str = "certifications";

fn load_cards() -> Result<(Vec<CertificationCard>, &'static RevealConfig), String> {
    let profile = load_profile().map_err(|e| e.to_string())?;
    let catalog = certificate_catalog().map_err(|e| e.to_string())?;
    let cards = CertificationCard::build_all(&profile.certifications, catalog)
        .map_err(|e| e.to_string())?;
    Ok((cards, &profile.reveal))
}

#[component]
pub fn Certifications() -> impl IntoView {
    let content = match load_cards() {
        Ok((cards, reveal)) => view! {
            <TabbedPanel
                section_id=SECTION_ID
                aria_label="Certification tabs"
                items=cards
                label=|card: &CertificationCard| card.tab_label().to_string()
                render_panel=|card: CertificationCard| view! { <CertificationPanel card=card /> }.into_any()
                theme=TabTheme::navy()
                observers=default_observers(reveal)
            />
        }
        .into_any(),
        Err(message) => view! { <SectionError message=message /> }.into_any(),
    };

    view! {
        <section id=SECTION_ID class="section section--certifications">
            <h2 class="numbered-heading">"Professional Certifications"</h2>
            <div class="section__inner">
                {content}
            </div>
        </section>
    }
}

// ── Panel ─────────────────────────────────────────────────────────────────────

#[component]
fn CertificationPanel(card: CertificationCard) -> impl IntoView {
    let CertificationCard {
        title,
        image,
        image_alt,
        issuer,
        date_acquired,
        external_link,
        skills,
    } = card;

    // Title links out only when there is somewhere to go.
    let title_view = match external_link.clone() {
        Some(href) => view! {
            <a href=href target="_blank" rel="noreferrer" class="inline-link">{title}</a>
        }
        .into_any(),
        None => view! { <span>{title}</span> }.into_any(),
    };

    view! {
        <img
            class="cert__image"
            src=image.src
            alt=image_alt
            width=image.width.to_string()
            height=image.height.to_string()
            loading="lazy"
        />

        <div class="cert__header">
            <div class="cert__details">
                <h3>{title_view}</h3>
                {issuer.map(|issuer| view! { <h4>{issuer}</h4> })}
                {date_acquired.map(|date| view! { <i>{date}</i> })}
            </div>

            {external_link.map(|href| view! {
                <a href=href target="_blank" rel="noreferrer" class="cert__external" aria-label="External Link">
                    {icon(IconKey::External)}
                </a>
            })}
        </div>

        <ul class="cert__skills">
            {skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
        </ul>
    }
}
