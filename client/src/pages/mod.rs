//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and domain rules to `state`/`util`.

pub mod campaign_detail;
pub mod campaign_edit;
pub mod campaigns;
pub mod login;
