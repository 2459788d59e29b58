//! AI project cards

use crate::components::icons::WhatsAppIcon;
use crate::components::section::{BulletList, CardLogo, Section, SectionIcon};
use crate::display_types::Project;
use dioxus::prelude::*;

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        Section {
            label: "Portfólio".to_string(),
            title: "Projetos com IA".to_string(),
            icon: SectionIcon::Sparkles,
            div { class: "space-y-10",
                for project in projects {
                    ProjectCard { key: "{project.title}", project: project.clone() }
                }
            }
        }
    }
}

/// Pure view of one project: optional cover, logo, badges, features and video
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let licensing_href = project.licensing_href();

    rsx! {
        article { class: "group",
            if let Some(cover) = &project.cover {
                a {
                    href: "{cover.href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "block mb-4 rounded-2xl overflow-hidden border border-zinc-200/60 dark:border-zinc-800/60",
                    img {
                        src: "{cover.src}",
                        alt: "",
                        class: "w-full h-auto object-cover",
                    }
                }
            }
            div { class: "flex gap-4",
                CardLogo {
                    src: project.logo.clone(),
                    alt: project.alt.clone(),
                    extra_class: project.logo_class.clone(),
                }
                div { class: "min-w-0",
                    div { class: "flex flex-wrap items-center gap-2 mb-2",
                        h3 { class: "text-lg font-semibold text-zinc-900 dark:text-zinc-50 tracking-tight",
                            "{project.title}"
                        }
                        if let Some(href) = licensing_href {
                            a {
                                href: "{href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "inline-flex items-center gap-1.5 px-3 py-1 pr-1.5 rounded-full text-xs font-medium bg-emerald-500/15 text-emerald-700 dark:bg-emerald-400/20 dark:text-emerald-300 border border-emerald-400/30 dark:border-emerald-500/30 hover:bg-emerald-500/25 dark:hover:bg-emerald-400/30 transition-colors shrink-0",
                                span { "Disponível para licenciamento" }
                                WhatsAppIcon {}
                            }
                        }
                    }
                    p { class: "text-[15px] text-zinc-600 dark:text-zinc-400 leading-relaxed mb-3",
                        "{project.description}"
                    }
                    BulletList {
                        items: project.features.clone(),
                        class: "list-none space-y-1.5 mb-3",
                        item_class: "text-sm text-zinc-500 dark:text-zinc-500",
                    }
                    p { class: "text-[13px] text-zinc-400 dark:text-zinc-500", "{project.tech}" }
                    if let Some(video) = &project.video {
                        div {
                            class: "mt-4 rounded-xl overflow-hidden border border-zinc-200/60 dark:border-zinc-800/60 bg-zinc-100/50 dark:bg-zinc-900/50 w-full",
                            style: "max-width: {video.width}px; aspect-ratio: {video.width} / {video.height};",
                            iframe {
                                src: "{video.src}",
                                class: "w-full h-full",
                                "frameborder": "0",
                                "allowfullscreen": "true",
                                title: "{video.title}",
                            }
                        }
                    }
                }
            }
        }
    }
}
