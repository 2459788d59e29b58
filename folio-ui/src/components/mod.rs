//! Shared UI components

pub mod events;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod lightbox;
pub mod projects;
pub mod section;
pub mod skills;

pub use events::{EventCard, EventsSection};
pub use experience::{CourseCard, EducationSection, ExperienceSection, JobCard};
pub use footer::{ContributionsSection, FooterView};
pub use hero::{HeroView, SummarySection};
pub use icons::{
    AwardIcon, BriefcaseIcon, CalendarIcon, ChevronLeftIcon, ChevronRightIcon, CodeIcon,
    GithubIcon, GraduationCapIcon, LinkedinIcon, MailIcon, MapPinIcon, PhoneIcon, SparklesIcon,
    UserIcon, WhatsAppIcon, XIcon,
};
pub use lightbox::{use_lightbox, LightboxView, PageLightbox, PageLightboxOverlay};
pub use projects::{ProjectCard, ProjectsSection};
pub use section::{BulletList, CardLogo, Section, SectionIcon, SectionLabel, SectionTitle};
pub use skills::{HardSkillsSection, SoftSkillsSection, TechStackSection};
