use crate::Route;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    debug!("No page at /{}", path);

    rsx! {
        main { class: "max-w-3xl mx-auto px-5 sm:px-8 pt-32 pb-24 text-center",
            p { class: "text-[11px] uppercase tracking-[0.2em] text-zinc-400 dark:text-zinc-500 font-medium mb-3",
                "404"
            }
            h1 { class: "text-2xl font-semibold tracking-tight mb-4", "Página não encontrada" }
            p { class: "text-sm text-zinc-500 dark:text-zinc-400 mb-8", "/{path}" }
            Link {
                to: Route::Home {},
                class: "text-sm text-zinc-500 dark:text-zinc-400 hover:text-zinc-900 dark:hover:text-zinc-100 transition-colors",
                "Voltar ao início"
            }
        }
    }
}
