//! Marketing site pages

mod introduction;

pub use introduction::IntroductionPage;
