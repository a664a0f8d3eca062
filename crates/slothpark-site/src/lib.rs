//! Static marketing content for the Sloth Park page.
//!
//! The page is plain data; [`SiteContent::sloth_park`] builds the one page
//! this application shows. Rendering lives in `slothpark-ui`.

pub mod content;

pub use content::{
    Admission, Asset, Footer, Header, Hours, Operator, SiteContent, Tour, VisitorInfo, Welcome,
};
