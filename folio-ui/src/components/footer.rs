use crate::components::section::{Section, SectionIcon};
use crate::display_types::FooterInfo;
use dioxus::prelude::*;

/// GitHub contribution graph rendered as a single image
#[component]
pub fn ContributionsSection(image_url: String) -> Element {
    rsx! {
        Section {
            label: "Atividade".to_string(),
            title: "Contribuições GitHub".to_string(),
            icon: SectionIcon::Github,
            div { class: "w-full overflow-hidden rounded-2xl border border-zinc-200/60 dark:border-zinc-800/60",
                img {
                    src: "{image_url}",
                    alt: "GitHub Contributions",
                    class: "w-full h-auto",
                }
            }
        }
    }
}

#[component]
pub fn FooterView(footer: FooterInfo) -> Element {
    rsx! {
        footer { class: "pt-16 pb-8 mt-8 border-t border-zinc-200/60 dark:border-zinc-800/60 text-center",
            div { class: "flex flex-col items-center gap-6",
                span { class: "inline-flex items-center justify-center w-16 h-16",
                    img {
                        src: "{footer.logo_url}",
                        alt: "{footer.logo_alt}",
                        class: "w-full h-full object-contain invert-0 dark:invert opacity-90 rounded-2xl",
                    }
                }
                p { class: "text-[15px] text-zinc-600 dark:text-zinc-400 max-w-md leading-relaxed",
                    "{footer.message}"
                }
                p { class: "text-[13px] text-zinc-400 dark:text-zinc-500", "{footer.credit}" }
            }
        }
    }
}
