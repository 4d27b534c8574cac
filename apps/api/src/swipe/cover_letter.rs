use crate::swipe::models::{JobListing, UserProfile};

/// Cover letter template.
/// Replace: {salutation}, {title}, {company}, {skills}, {name}
const COVER_LETTER_TEMPLATE: &str = "Dear {salutation},

I'm excited to apply for {title} at {company}.
My skills in {skills} align well with your needs.

Sincerely,
{name}";

const DEFAULT_SALUTATION: &str = "Hiring Manager";
const DEFAULT_TITLE: &str = "this position";
const DEFAULT_COMPANY: &str = "your company";
const DEFAULT_SIGNATURE: &str = "Applicant";

/// Renders the cover letter sent with an auto-submitted application.
/// Pure: same profile and job always produce the same text.
pub fn generate_cover_letter(profile: &UserProfile, job: &JobListing) -> String {
    let company = non_blank(job.company.as_deref());

    COVER_LETTER_TEMPLATE
        .replace("{salutation}", company.unwrap_or(DEFAULT_SALUTATION))
        .replace("{title}", non_blank(job.title.as_deref()).unwrap_or(DEFAULT_TITLE))
        .replace("{company}", company.unwrap_or(DEFAULT_COMPANY))
        .replace("{skills}", &profile.skills.join(", "))
        .replace("{name}", non_blank(profile.name.as_deref()).unwrap_or(DEFAULT_SIGNATURE))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
