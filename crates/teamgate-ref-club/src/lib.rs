//! # teamgate-ref-club
//!
//! Reference scenarios for the teamgate authorization core, played out over
//! a fictional football club.
//!
//! 1. **Coach Session**: role grants plus team and organization scope.
//! 2. **Anonymous Visit**: fail-closed `Unauthorized` for every request.
//! 3. **Elevated Access**: admin and superadmin shortcuts and exclusions.
//! 4. **Family Portal**: own-record and dependent-record capabilities.
//! 5. **Tuned Registry**: a deployment-specific table loaded from TOML.
//!
//! All data is hardcoded and fictional.

pub mod mock_data;
pub mod scenarios;
