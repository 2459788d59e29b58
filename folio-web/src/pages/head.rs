//! Document head: title, search metadata and social cards

use crate::content::SiteMeta;
use dioxus::prelude::*;

#[component]
pub fn SiteHead(meta: SiteMeta) -> Element {
    let keywords = meta.keywords.join(", ");

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
        document::Meta { name: "keywords", content: "{keywords}" }
        document::Meta { name: "author", content: "{meta.author}" }
        document::Meta { name: "creator", content: "{meta.author}" }
        document::Meta { name: "robots", content: "{meta.robots}" }
        document::Link { rel: "author", href: "{meta.author_url}" }

        document::Meta { property: "og:type", content: "website" }
        document::Meta { property: "og:locale", content: "{meta.locale}" }
        document::Meta { property: "og:title", content: "{meta.title}" }
        document::Meta { property: "og:description", content: "{meta.og_description}" }

        document::Meta { name: "twitter:card", content: "summary_large_image" }
        document::Meta { name: "twitter:title", content: "{meta.title}" }
        document::Meta { name: "twitter:description", content: "{meta.twitter_description}" }
    }
}
