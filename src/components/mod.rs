mod app;
mod feature_cards;
mod hero;
mod site_footer;
mod site_header;
mod store_section;
mod toast_list;

pub use app::App;
pub use feature_cards::FeatureCards;
pub use hero::Hero;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use store_section::StoreSection;
pub use toast_list::{attach as attach_toasts, TOAST_HOST_ID};
