//! Events, hackathons and programs, with their photo galleries

use crate::components::section::{CardLogo, Section, SectionIcon};
use crate::display_types::EventEntry;
use dioxus::prelude::*;
use folio_common::{LightboxGroup, THUMBNAIL_ROW_HEIGHT};

#[component]
pub fn EventsSection(
    events: Vec<EventEntry>,
    /// Called with the clicked event's full gallery and the clicked position
    on_open_gallery: EventHandler<LightboxGroup>,
) -> Element {
    rsx! {
        Section {
            label: "Eventos & Programas".to_string(),
            title: "Eventos, Hackathons e Capacitação".to_string(),
            icon: SectionIcon::Award,
            bordered: false,
            div { class: "space-y-6",
                for event in events {
                    EventCard {
                        key: "{event.title}",
                        event: event.clone(),
                        on_open_gallery,
                    }
                }
            }
        }
    }
}

#[component]
pub fn EventCard(event: EventEntry, on_open_gallery: EventHandler<LightboxGroup>) -> Element {
    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "flex gap-4",
                CardLogo { src: event.logo.clone(), class: "w-10 h-10 rounded-lg" }
                div { class: "min-w-0",
                    h3 { class: "font-medium text-zinc-900 dark:text-zinc-50", "{event.title}" }
                    p { class: "text-[13px] text-zinc-500 dark:text-zinc-500 mb-1", "{event.org}" }
                    p { class: "text-sm text-zinc-600 dark:text-zinc-400 leading-relaxed",
                        "{event.description}"
                    }
                }
            }
            if !event.gallery.is_empty() {
                EventGallery { event: event.clone(), on_open_gallery }
            }
        }
    }
}

/// Wrapping row of fixed-height thumbnails, each sized to its aspect ratio
#[component]
fn EventGallery(event: EventEntry, on_open_gallery: EventHandler<LightboxGroup>) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap gap-2 pl-14",
            style: "align-content: flex-start;",
            for (i , image) in event.gallery.images().iter().enumerate() {
                {
                    let width = image.thumbnail_width();
                    let alt = format!("{} — foto {}", event.title, i + 1);
                    let group = event.gallery.group(i, event.title.clone(), event.logo.clone());
                    rsx! {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: "shrink-0 overflow-hidden rounded-xl border border-zinc-200/60 dark:border-zinc-700/60 hover:opacity-90 transition-opacity cursor-pointer focus:outline-none focus:ring-2 focus:ring-zinc-400 dark:focus:ring-zinc-500 focus:ring-offset-2 dark:focus:ring-offset-black",
                            style: "height: {THUMBNAIL_ROW_HEIGHT}px; width: {width}px;",
                            onclick: move |_| on_open_gallery.call(group.clone()),
                            img {
                                src: "{image.src}",
                                alt: "{alt}",
                                class: "h-full w-full object-cover pointer-events-none",
                            }
                        }
                    }
                }
            }
        }
    }
}
