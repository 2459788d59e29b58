//! Skill pills, soft skills and the technology grid

use crate::components::section::{Section, SectionIcon};
use crate::display_types::TechCategory;
use dioxus::prelude::*;

#[component]
pub fn HardSkillsSection(skills: Vec<String>) -> Element {
    rsx! {
        Section {
            label: "Competências".to_string(),
            title: "Hard Skills".to_string(),
            icon: SectionIcon::Code,
            div { class: "flex flex-wrap gap-2",
                for skill in skills {
                    span {
                        key: "{skill}",
                        class: "inline-flex px-3.5 py-1.5 rounded-full text-[13px] bg-zinc-100 dark:bg-zinc-800/70 text-zinc-600 dark:text-zinc-400 border border-zinc-200/50 dark:border-zinc-700/50",
                        "{skill}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SoftSkillsSection(skills: Vec<String>) -> Element {
    rsx! {
        Section {
            label: "Comportamento".to_string(),
            title: "Soft Skills".to_string(),
            icon: SectionIcon::User,
            ul { class: "text-[15px] text-zinc-600 dark:text-zinc-400 space-y-3",
                for skill in skills {
                    li { key: "{skill}", class: "flex gap-3",
                        span { class: "text-zinc-300 dark:text-zinc-600 mt-1.5", "·" }
                        span { "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TechStackSection(categories: Vec<TechCategory>) -> Element {
    rsx! {
        Section {
            label: "Stack".to_string(),
            title: "Tecnologias e Ferramentas".to_string(),
            icon: SectionIcon::Code,
            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-6 text-[15px]",
                for category in categories {
                    div { key: "{category.title}",
                        h3 { class: "font-medium text-zinc-800 dark:text-zinc-300 mb-2 text-[13px] uppercase tracking-wider",
                            "{category.title}"
                        }
                        div { class: "flex flex-wrap items-center gap-2 mb-2",
                            for logo in category.logos.iter() {
                                img {
                                    key: "{logo.name}",
                                    src: "{logo.url}",
                                    alt: "{logo.name}",
                                    title: "{logo.name}",
                                    class: "w-6 h-6 object-contain opacity-85 dark:opacity-75 shrink-0",
                                }
                            }
                        }
                        p { class: "text-zinc-500 dark:text-zinc-500 leading-relaxed", "{category.text}" }
                    }
                }
            }
        }
    }
}
