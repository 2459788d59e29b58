//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

#[component]
fn LucideSvg(class: &'static str, stroke_width: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// X icon (close)
#[component]
pub fn XIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ChevronLeftIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "m15 18-6-6 6-6" }
        }
    }
}

#[component]
pub fn ChevronRightIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

#[component]
pub fn MailIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            rect {
                x: "2",
                y: "4",
                width: "20",
                height: "16",
                rx: "2",
            }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub fn PhoneIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}

#[component]
pub fn GithubIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        }
    }
}

#[component]
pub fn LinkedinIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect {
                x: "2",
                y: "9",
                width: "4",
                height: "12",
            }
            circle { cx: "4", cy: "4", r: "2" }
        }
    }
}

#[component]
pub fn UserIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn BriefcaseIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
            rect {
                x: "2",
                y: "6",
                width: "20",
                height: "14",
                rx: "2",
            }
        }
    }
}

#[component]
pub fn CodeIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        }
    }
}

#[component]
pub fn GraduationCapIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M22 10v6M2 10l10-5 10 5-10 5z" }
            path { d: "M6 12v5c3 3 9 3 12 0v-5" }
        }
    }
}

#[component]
pub fn MapPinIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn CalendarIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            rect {
                x: "3",
                y: "4",
                width: "18",
                height: "18",
                rx: "2",
            }
            path { d: "M16 2v4" }
            path { d: "M8 2v4" }
            path { d: "M3 10h18" }
        }
    }
}

#[component]
pub fn AwardIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            circle { cx: "12", cy: "8", r: "6" }
            path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
        }
    }
}

#[component]
pub fn SparklesIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "1.5")] stroke_width: &'static str,
) -> Element {
    rsx! {
        LucideSvg { class, stroke_width,
            path { d: "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z" }
            path { d: "M20 3v4" }
            path { d: "M22 5h-4" }
            path { d: "M4 17v2" }
            path { d: "M5 18H3" }
        }
    }
}

/// WhatsApp brand mark (filled, not a Lucide icon)
#[component]
pub fn WhatsAppIcon(#[props(default = "w-3.5 h-3.5")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z" }
        }
    }
}
