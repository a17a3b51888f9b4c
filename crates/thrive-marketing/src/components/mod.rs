//! Marketing site components

mod cards;
mod contact_dialog;
mod footer;
mod nav;
mod success_dialog;

pub use cards::*;
pub use contact_dialog::ContactDialog;
pub use footer::Footer;
pub use nav::MarketingNav;
pub use success_dialog::SuccessDialog;
