//! Section chrome shared by every block of the page

use crate::components::icons::{
    AwardIcon, BriefcaseIcon, CodeIcon, GithubIcon, GraduationCapIcon, SparklesIcon, UserIcon,
};
use dioxus::prelude::*;

/// Icon shown next to a section title
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionIcon {
    User,
    Code,
    Sparkles,
    Briefcase,
    Github,
    GraduationCap,
    Award,
}

const SECTION_ICON_CLASS: &str = "w-5 h-5 text-zinc-400 dark:text-zinc-500 shrink-0";

/// Bordered page section with a small uppercase label above its title
#[component]
pub fn Section(
    label: String,
    title: String,
    icon: SectionIcon,
    /// The last section on the page has no bottom border
    #[props(default = true)]
    bordered: bool,
    children: Element,
) -> Element {
    let border = if bordered {
        "border-b border-zinc-200/60 dark:border-zinc-800/60"
    } else {
        ""
    };

    rsx! {
        section { class: "py-14 {border}",
            SectionLabel { {label} }
            SectionTitle { icon, {title} }
            {children}
        }
    }
}

#[component]
pub fn SectionLabel(children: Element) -> Element {
    rsx! {
        p { class: "text-[11px] uppercase tracking-[0.2em] text-zinc-400 dark:text-zinc-500 font-medium mb-3",
            {children}
        }
    }
}

#[component]
pub fn SectionTitle(icon: SectionIcon, children: Element) -> Element {
    rsx! {
        h2 { class: "text-2xl font-semibold tracking-tight text-zinc-900 dark:text-zinc-50 flex items-center gap-2.5 mb-6",
            match icon {
                SectionIcon::User => rsx! {
                    UserIcon { class: SECTION_ICON_CLASS }
                },
                SectionIcon::Code => rsx! {
                    CodeIcon { class: SECTION_ICON_CLASS }
                },
                SectionIcon::Sparkles => rsx! {
                    SparklesIcon { class: SECTION_ICON_CLASS }
                },
                SectionIcon::Briefcase => rsx! {
                    BriefcaseIcon { class: SECTION_ICON_CLASS }
                },
                SectionIcon::Github => rsx! {
                    GithubIcon { class: SECTION_ICON_CLASS }
                },
                SectionIcon::GraduationCap => rsx! {
                    GraduationCapIcon { class: SECTION_ICON_CLASS }
                },
                SectionIcon::Award => rsx! {
                    AwardIcon { class: SECTION_ICON_CLASS }
                },
            }
            {children}
        }
    }
}

/// Dot-prefixed list used by projects, jobs and courses
#[component]
pub fn BulletList(
    items: Vec<String>,
    #[props(default = "space-y-1.5")] class: &'static str,
    #[props(default = "text-sm text-zinc-600 dark:text-zinc-400")] item_class: &'static str,
) -> Element {
    rsx! {
        ul { class: "{class}",
            for item in items {
                li { key: "{item}", class: "{item_class} flex gap-2",
                    span { class: "text-zinc-300 dark:text-zinc-600 shrink-0", "·" }
                    {item.clone()}
                }
            }
        }
    }
}

/// Rounded logo next to a card's text
#[component]
pub fn CardLogo(
    src: String,
    #[props(default)] alt: String,
    #[props(default = "w-11 h-11 rounded-xl")] class: &'static str,
    #[props(default)] extra_class: Option<String>,
) -> Element {
    let extra = extra_class.unwrap_or_default();
    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "{class} object-cover shrink-0 {extra}",
        }
    }
}
