// Outreach: cold email and résumé improvement suggestions for a profile/job pair.

pub mod company;
pub mod email;
pub mod handlers;
pub mod improvements;
pub mod skills;
