use crate::data_models::SearchResult;

pub const LINKEDIN_HOST: &str = "linkedin.com";
pub const PROFILE_PATH_SEGMENTS: [&str; 3] = ["/company/", "/school/", "/showcase/"];

/// Whether `url` looks like a LinkedIn organization page rather than a post,
/// a personal profile, or some other page on the domain.
pub fn is_probable_company_url(url: &str) -> bool {
    let lowered = url.split('?').next().unwrap_or(url).to_lowercase();
    lowered.contains(LINKEDIN_HOST)
        && PROFILE_PATH_SEGMENTS
            .iter()
            .any(|segment| lowered.contains(segment))
}

fn is_linkedin_url(url: &str) -> bool {
    url.to_lowercase().contains(LINKEDIN_HOST)
}

/// Pick the best LinkedIn URL out of ranked search results.
///
/// Any organization-shaped URL beats every other LinkedIn URL, wherever it
/// ranks. Only when none exists does the first LinkedIn URL of any shape win.
pub fn select_linkedin_url(results: &[SearchResult]) -> Option<String> {
    let urls = || {
        results
            .iter()
            .map(|r| r.url.as_str())
            .filter(|url| !url.is_empty())
    };

    urls()
        .find(|url| is_probable_company_url(url))
        .or_else(|| urls().find(|url| is_linkedin_url(url)))
        .map(str::to_string)
}
