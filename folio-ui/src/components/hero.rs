//! Page header and professional summary

use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon, MapPinIcon, PhoneIcon};
use crate::components::section::{Section, SectionIcon};
use crate::display_types::{ContactKind, ContactLink, Paragraph, Profile, TextSpan};
use dioxus::prelude::*;

#[component]
pub fn HeroView(profile: Profile) -> Element {
    rsx! {
        header { class: "mb-20",
            div { class: "flex flex-col sm:flex-row gap-8 items-start",
                img {
                    src: "{profile.photo_url}",
                    alt: "{profile.name}",
                    class: "w-28 h-28 rounded-full object-cover shrink-0 ring-2 ring-zinc-200/80 dark:ring-zinc-700/50",
                }
                div { class: "flex flex-col gap-5 min-w-0",
                    div {
                        h1 { class: "text-4xl sm:text-5xl font-semibold tracking-tight text-zinc-900 dark:text-zinc-50 mb-2",
                            "{profile.name}"
                        }
                        p { class: "text-lg text-zinc-500 dark:text-zinc-400 tracking-tight",
                            "{profile.headline}"
                        }
                    }
                    p { class: "text-sm text-zinc-500 dark:text-zinc-400 flex items-center gap-1.5",
                        MapPinIcon { class: "w-3.5 h-3.5 shrink-0" }
                        "{profile.location}"
                    }
                    div { class: "flex flex-wrap gap-x-6 gap-y-1 text-sm",
                        for contact in profile.contacts.iter() {
                            ContactAnchor { key: "{contact.href}", contact: contact.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactAnchor(contact: ContactLink) -> Element {
    let class = "flex items-center gap-2 text-zinc-500 dark:text-zinc-400 hover:text-zinc-900 dark:hover:text-zinc-100 transition-colors";
    let (target, rel) = if contact.kind.is_external() {
        ("_blank", "noopener noreferrer")
    } else {
        ("_self", "")
    };

    rsx! {
        a {
            href: "{contact.href}",
            target,
            rel,
            class,
            match contact.kind {
                ContactKind::Phone => rsx! {
                    PhoneIcon {}
                },
                ContactKind::Email => rsx! {
                    MailIcon {}
                },
                ContactKind::Github => rsx! {
                    GithubIcon {}
                },
                ContactKind::Linkedin => rsx! {
                    LinkedinIcon {}
                },
            }
            "{contact.label}"
        }
    }
}

#[component]
pub fn SummarySection(paragraphs: Vec<Paragraph>) -> Element {
    rsx! {
        Section {
            label: "Perfil".to_string(),
            title: "Resumo Profissional".to_string(),
            icon: SectionIcon::User,
            div { class: "text-[15px] leading-relaxed text-zinc-600 dark:text-zinc-400 space-y-4",
                for (i , paragraph) in paragraphs.iter().enumerate() {
                    p { key: "{i}",
                        for span in paragraph.iter() {
                            match span {
                                TextSpan::Plain(text) => rsx! {
                                    {text.clone()}
                                },
                                TextSpan::Strong { strong } => rsx! {
                                    strong { class: "text-zinc-700 dark:text-zinc-300", "{strong}" }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
