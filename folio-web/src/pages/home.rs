use crate::content;
use dioxus::prelude::*;
use folio_common::LightboxGroup;
use folio_ui::{
    use_lightbox, ContributionsSection, EducationSection, EventsSection, ExperienceSection,
    FooterView, HardSkillsSection, HeroView, PageLightboxOverlay, ProjectsSection,
    SoftSkillsSection, SummarySection, TechStackSection,
};
use tracing::warn;

#[component]
pub fn Home() -> Element {
    let mut lightbox = use_lightbox();

    let portfolio = match content::portfolio() {
        Ok(portfolio) => portfolio,
        Err(e) => return rsx! { ContentErrorView { message: e.to_string() } },
    };

    let open_gallery = move |group: LightboxGroup| {
        let label = group.label.clone();
        if let Err(e) = lightbox.write().open(group) {
            warn!("Not opening gallery for {:?}: {}", label, e);
        }
    };

    rsx! {
        PageLightboxOverlay { lightbox }
        main { class: "max-w-3xl mx-auto px-5 sm:px-8 pt-16 pb-24",
            HeroView { profile: portfolio.profile.clone() }
            SummarySection { paragraphs: portfolio.profile.summary.clone() }
            HardSkillsSection { skills: portfolio.hard_skills.clone() }
            SoftSkillsSection { skills: portfolio.soft_skills.clone() }
            TechStackSection { categories: portfolio.tech.clone() }
            ProjectsSection { projects: portfolio.projects.clone() }
            ExperienceSection { jobs: portfolio.jobs.clone() }
            ContributionsSection { image_url: portfolio.contributions_image.clone() }
            EducationSection { courses: portfolio.education.clone() }
            EventsSection { events: portfolio.events.clone(), on_open_gallery: open_gallery }
            FooterView { footer: portfolio.footer.clone() }
        }
    }
}

#[component]
fn ContentErrorView(message: String) -> Element {
    rsx! {
        main { class: "max-w-3xl mx-auto px-5 sm:px-8 pt-32 pb-24",
            div { class: "rounded-2xl border border-red-300/60 dark:border-red-800/60 bg-red-50 dark:bg-red-950/40 p-6",
                h1 { class: "text-lg font-semibold text-red-700 dark:text-red-300 mb-2",
                    "Conteúdo indisponível"
                }
                p { class: "text-sm text-red-600 dark:text-red-400 font-mono break-words", "{message}" }
            }
        }
    }
}

