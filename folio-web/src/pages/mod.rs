mod head;
mod home;
mod layout;
mod not_found;

pub use head::SiteHead;
pub use home::Home;
pub use layout::SiteLayout;
pub use not_found::NotFound;
