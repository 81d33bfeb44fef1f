use contracts::enums::icon_key::IconKey;
use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ICON_ID: AtomicUsize = AtomicUsize::new(0);

/// Document-unique id for an element inside one icon instance.
fn scoped_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ICON_ID.fetch_add(1, Ordering::Relaxed))
}

/// Fixed graphic for a registry key; [`IconKey::Fallback`] is a neutral placeholder.
pub fn icon(key: IconKey) -> AnyView {
    match key {
        IconKey::External => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="External Link" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
                <polyline points="15 3 21 3 21 9"/>
                <line x1="10" y1="14" x2="21" y2="3"/>
            </svg>
        }.into_any(),
        IconKey::PowerBi => {
            // Gradient ids are global to the document and this icon can render more than once.
            let dark = scoped_id("pbi-dark");
            let mid = scoped_id("pbi-mid");
            let light = scoped_id("pbi-light");
            let fill = |id: &str| format!("url(#{})", id);
            view! {
                <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Power BI" width="40" height="40" viewBox="0 0 40 40">
                    <defs>
                        <linearGradient id=dark.clone() x1="50%" y1="0%" x2="50%" y2="100%">
                            <stop offset="0%" stop-color="#EBBB14"/>
                            <stop offset="100%" stop-color="#B25400"/>
                        </linearGradient>
                        <linearGradient id=mid.clone() x1="50%" y1="0%" x2="50%" y2="100%">
                            <stop offset="0%" stop-color="#F9E583"/>
                            <stop offset="100%" stop-color="#DE9800"/>
                        </linearGradient>
                        <linearGradient id=light.clone() x1="50%" y1="0%" x2="50%" y2="100%">
                            <stop offset="0%" stop-color="#F9E68B"/>
                            <stop offset="100%" stop-color="#F3CD32"/>
                        </linearGradient>
                    </defs>
                    <rect x="24" y="4" width="10" height="32" rx="1.5" fill=fill(&dark)/>
                    <rect x="16" y="12" width="10" height="24" rx="1.5" fill=fill(&mid)/>
                    <rect x="8" y="20" width="10" height="16" rx="1.5" fill=fill(&light)/>
                </svg>
            }
            .into_any()
        }
        IconKey::Python => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Python" width="40" height="40" viewBox="0 0 40 40">
                <path d="M19.8 4c-7.4 0-7 3.2-7 3.2v3.4h7.1v1H10s-4.8-.5-4.8 7c0 7.6 4.2 7.3 4.2 7.3h2.5v-3.5s-.1-4.2 4.1-4.2h7s4 .1 4-3.9V7.8S27.6 4 19.8 4z" fill="#3776AB"/>
                <path d="M20.2 36c7.4 0 7-3.2 7-3.2v-3.4h-7.1v-1H30s4.8.5 4.8-7c0-7.6-4.2-7.3-4.2-7.3h-2.5v3.5s.1 4.2-4.1 4.2h-7s-4-.1-4 3.9v6.5S12.4 36 20.2 36z" fill="#FFD43B"/>
                <circle cx="16" cy="7.6" r="1.2" fill="#fff"/>
                <circle cx="24" cy="32.4" r="1.2" fill="#fff"/>
            </svg>
        }.into_any(),
        IconKey::Sql => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="SQL" width="40" height="40" viewBox="0 0 40 40" fill="none" stroke="#0078D4" stroke-width="2">
                <ellipse cx="20" cy="9" rx="12" ry="4"/>
                <path d="M8 9v22c0 2.2 5.4 4 12 4s12-1.8 12-4V9"/>
                <path d="M8 16c0 2.2 5.4 4 12 4s12-1.8 12-4"/>
                <path d="M8 23.5c0 2.2 5.4 4 12 4s12-1.8 12-4"/>
            </svg>
        }.into_any(),
        IconKey::Aws => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="AWS" width="40" height="40" viewBox="0 0 40 40">
                <text x="20" y="21" text-anchor="middle" font-family="Arial, sans-serif" font-size="13" font-weight="bold" fill="#252F3E">"aws"</text>
                <path d="M7 26c7.5 4.5 18.5 4.5 26 0" fill="none" stroke="#FF9900" stroke-width="2.2" stroke-linecap="round"/>
                <path d="M30 24.5l3.4 1.3-1.2 3.3" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round"/>
            </svg>
        }.into_any(),
        IconKey::Azure => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Azure" width="40" height="40" viewBox="0 0 40 40">
                <path d="M15.5 5h8.2L12.8 34.5H4.6z" fill="#0078D4"/>
                <path d="M25.8 10.5L35.4 34.5H14.6l11.2-4.6-6.1-7.4z" fill="#1490DF"/>
            </svg>
        }.into_any(),
        IconKey::Docker => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Docker" width="40" height="40" viewBox="0 0 40 40">
                <g fill="#2496ED">
                    <rect x="7" y="17" width="4.5" height="4"/>
                    <rect x="12.5" y="17" width="4.5" height="4"/>
                    <rect x="18" y="17" width="4.5" height="4"/>
                    <rect x="23.5" y="17" width="4.5" height="4"/>
                    <rect x="12.5" y="12" width="4.5" height="4"/>
                    <rect x="18" y="12" width="4.5" height="4"/>
                    <rect x="18" y="7" width="4.5" height="4"/>
                    <path d="M3 22.5h30c1.5-1 2.5-2.6 3-4.5 1.2 0 2.3.3 3 .8-1 2-2.6 3-4.3 3.2C32 29 26 33 18 33 9.5 33 4.5 28.5 3 22.5z"/>
                </g>
            </svg>
        }.into_any(),
        IconKey::Git => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Git" width="40" height="40" viewBox="0 0 40 40">
                <path d="M36.3 18.4L21.6 3.7a2.2 2.2 0 0 0-3.1 0l-3 3 3.8 3.8a2.6 2.6 0 0 1 3.3 3.3l3.7 3.7a2.6 2.6 0 1 1-1.6 1.5l-3.4-3.4v9a2.6 2.6 0 1 1-2.1-.1v-9.1a2.6 2.6 0 0 1-1.4-3.4l-3.8-3.8-9.9 9.9a2.2 2.2 0 0 0 0 3.1l14.7 14.7a2.2 2.2 0 0 0 3.1 0l14.6-14.6a2.2 2.2 0 0 0 0-3.1z" fill="#F05032"/>
            </svg>
        }.into_any(),
        IconKey::Rust => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Rust" width="40" height="40" viewBox="0 0 40 40" fill="none" stroke="#000" stroke-width="2">
                <circle cx="20" cy="20" r="13"/>
                <circle cx="20" cy="20" r="16" stroke-dasharray="2 2.2"/>
                <path d="M13 26V14h8a3.5 3.5 0 0 1 0 7h-8m8 0l5 5"/>
            </svg>
        }.into_any(),
        IconKey::Excel => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Excel" width="40" height="40" viewBox="0 0 40 40">
                <rect x="12" y="5" width="24" height="30" rx="2" fill="#21A366"/>
                <rect x="4" y="11" width="18" height="18" rx="2" fill="#107C41"/>
                <path d="M8.5 15.5l9 9m0-9l-9 9" stroke="#fff" stroke-width="2.4" stroke-linecap="round"/>
            </svg>
        }.into_any(),
        IconKey::Tableau => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Tableau" width="40" height="40" viewBox="0 0 40 40" stroke-linecap="round">
                <path d="M20 8v24M8 20h24" stroke="#E97627" stroke-width="3"/>
                <path d="M9 9v8M5 13h8M31 9v8M27 13h8M9 23v8M5 27h8M31 23v8M27 27h8" stroke="#1F447E" stroke-width="2"/>
            </svg>
        }.into_any(),
        IconKey::Spark => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Spark" width="40" height="40" viewBox="0 0 40 40">
                <path d="M20 3l4.4 11.2L36 12.6l-8.6 8 6 10.4-11.4-4.2L20 38l-2-11.2L6.6 31l6-10.4-8.6-8 11.6 1.6z" fill="#E25A1C"/>
            </svg>
        }.into_any(),
        IconKey::Linux => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Linux" width="40" height="40" viewBox="0 0 40 40">
                <ellipse cx="20" cy="22" rx="10" ry="13" fill="#222"/>
                <ellipse cx="20" cy="25" rx="6.5" ry="9" fill="#fff"/>
                <circle cx="17" cy="14" r="1.6" fill="#fff"/>
                <circle cx="23" cy="14" r="1.6" fill="#fff"/>
                <path d="M17 18l3 2 3-2z" fill="#F5B800"/>
                <ellipse cx="13" cy="35" rx="5" ry="2.4" fill="#F5B800"/>
                <ellipse cx="27" cy="35" rx="5" ry="2.4" fill="#F5B800"/>
            </svg>
        }.into_any(),
        IconKey::JavaScript => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" aria-label="JavaScript" width="40" height="40" viewBox="0 0 40 40">
                <rect x="4" y="4" width="32" height="32" fill="#F7DF1E"/>
                <text x="33" y="32" text-anchor="end" font-family="Arial, sans-serif" font-size="14" font-weight="bold" fill="#000">"JS"</text>
            </svg>
        }.into_any(),
        IconKey::Fallback => view! {
            <svg xmlns="http://www.w3.org/2000/svg" role="img" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <rect x="3" y="3" width="18" height="18" rx="2" ry="2"/>
                <path d="M9 9h6v6H9z"/>
            </svg>
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_ids_differ_between_instances() {
        let first = scoped_id("pbi-dark");
        let second = scoped_id("pbi-dark");
        assert_ne!(first, second);
        assert!(first.starts_with("pbi-dark-"));
        assert!(second.starts_with("pbi-dark-"));
    }
}
