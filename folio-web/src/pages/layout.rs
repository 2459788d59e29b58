use crate::config::DOCUMENT_LANG;
use crate::content;
use crate::pages::SiteHead;
use crate::Route;
use dioxus::prelude::*;
use tracing::warn;

fn set_document_lang(lang: &str) {
    let Some(root) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element, leaving lang unset");
        return;
    };
    if let Err(e) = root.set_attribute("lang", lang) {
        warn!("Failed to set document lang: {:?}", e);
    }
}

/// Page shell shared by every route
#[component]
pub fn SiteLayout() -> Element {
    use_hook(|| set_document_lang(DOCUMENT_LANG));

    rsx! {
        if let Ok(portfolio) = content::portfolio() {
            SiteHead { meta: portfolio.meta.clone() }
        }
        div { class: "min-h-screen bg-[#fafafa] dark:bg-black text-zinc-900 dark:text-zinc-50",
            Outlet::<Route> {}
        }
    }
}
