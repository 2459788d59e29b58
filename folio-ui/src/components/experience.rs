//! Work history and education

use crate::components::icons::CalendarIcon;
use crate::components::section::{BulletList, CardLogo, Section, SectionIcon};
use crate::display_types::{Course, Job};
use dioxus::prelude::*;

#[component]
fn Period(period: String) -> Element {
    rsx! {
        span { class: "text-[13px] text-zinc-400 dark:text-zinc-500 flex items-center gap-1 shrink-0",
            CalendarIcon { class: "w-3.5 h-3.5" }
            "{period}"
        }
    }
}

#[component]
pub fn ExperienceSection(jobs: Vec<Job>) -> Element {
    rsx! {
        Section {
            label: "Carreira".to_string(),
            title: "Experiência Profissional".to_string(),
            icon: SectionIcon::Briefcase,
            div { class: "space-y-10",
                for job in jobs {
                    // Same company can appear twice with different roles
                    JobCard { key: "{job.company}-{job.period}", job: job.clone() }
                }
            }
        }
    }
}

#[component]
pub fn JobCard(job: Job) -> Element {
    rsx! {
        article { class: "flex gap-4",
            CardLogo {
                src: job.logo.clone(),
                alt: job.company.clone(),
                class: "w-12 h-12 rounded-xl",
            }
            div { class: "min-w-0 flex-1",
                div { class: "flex flex-col sm:flex-row sm:items-baseline sm:justify-between gap-1 mb-2",
                    div {
                        h3 { class: "text-lg font-semibold text-zinc-900 dark:text-zinc-50 tracking-tight",
                            "{job.company}"
                        }
                        p { class: "text-[15px] text-zinc-500 dark:text-zinc-500", "{job.role}" }
                    }
                    Period { period: job.period.clone() }
                }
                if !job.bullets.is_empty() {
                    BulletList { items: job.bullets.clone(), class: "space-y-1.5 mt-2" }
                }
                if let Some(note) = &job.note {
                    p { class: "text-sm text-zinc-500 dark:text-zinc-500 mt-2 italic", "{note}" }
                }
            }
        }
    }
}

#[component]
pub fn EducationSection(courses: Vec<Course>) -> Element {
    rsx! {
        Section {
            label: "Educação".to_string(),
            title: "Formação Acadêmica e Cursos".to_string(),
            icon: SectionIcon::GraduationCap,
            div { class: "space-y-8",
                for course in courses {
                    CourseCard { key: "{course.title}", course: course.clone() }
                }
            }
        }
    }
}

#[component]
pub fn CourseCard(course: Course) -> Element {
    rsx! {
        div { class: "flex gap-4",
            CardLogo { src: course.logo.clone() }
            div { class: "min-w-0 flex-1",
                div { class: "flex flex-col sm:flex-row sm:items-baseline sm:justify-between gap-1 mb-2",
                    h3 { class: "font-semibold text-zinc-900 dark:text-zinc-50 tracking-tight",
                        "{course.title}"
                    }
                    Period { period: course.period.clone() }
                }
                p { class: "text-sm text-zinc-500 dark:text-zinc-500 mb-1",
                    "{course.institution} · {course.hours}"
                }
                p { class: "text-[13px] text-zinc-500 dark:text-zinc-500 mb-2", "Habilidades desenvolvidas" }
                BulletList { items: course.skills.clone(), class: "space-y-1" }
            }
        }
    }
}
