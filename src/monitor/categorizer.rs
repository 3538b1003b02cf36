//! Activity categorization for closed segments.
//!
//! Maps a `(program, window title)` pair to a semantic category label using
//! case-insensitive substring matching over fixed keyword tables, evaluated
//! as a strict ordered decision list: the first rule that matches wins.

/// Semantic category assigned to an activity segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Coding,
    TechnicalResearch,
    Entertainment,
    Email,
    WebBrowsing,
    Chat,
    Music,
    SystemFiles,
    Other,
}

impl ActivityCategory {
    /// Human-readable label stored with each usage record.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Coding => "Coding",
            ActivityCategory::TechnicalResearch => "Technical Research",
            ActivityCategory::Entertainment => "Entertainment",
            ActivityCategory::Email => "Email",
            ActivityCategory::WebBrowsing => "Web Browsing",
            ActivityCategory::Chat => "Chat",
            ActivityCategory::Music => "Music",
            ActivityCategory::SystemFiles => "System/Files",
            ActivityCategory::Other => "Other",
        }
    }
}

// Executable and title keyword tables. Matching is by lowercase substring,
// so "Code.exe" and paths containing "chrome.exe" both hit.
const EDITOR_APPS: [&str; 4] = ["code.exe", "pycharm64.exe", "sublime_text.exe", "notepad++.exe"];
const BROWSER_APPS: [&str; 3] = ["chrome.exe", "firefox.exe", "msedge.exe"];
const RESEARCH_SITES: [&str; 6] = [
    "stack overflow",
    "github",
    "w3schools",
    "python.org",
    "medium.com",
    "docs.microsoft.com",
];
const ENTERTAINMENT_SITES: [&str; 4] = ["youtube.com", "netflix.com", "twitch.tv", "twitter.com"];
const WEBMAIL_SITES: [&str; 2] = ["mail.google.com", "outlook.live.com"];
const CHAT_APPS: [&str; 2] = ["slack.exe", "teams.exe"];
const MAIL_APPS: [&str; 1] = ["outlook.exe"];
const MUSIC_APPS: [&str; 1] = ["spotify.exe"];
const SYSTEM_APPS: [&str; 3] = ["explorer.exe", "powershell.exe", "cmd.exe"];

fn matches_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Categorizes an activity segment from its program name and window title.
///
/// Pure function: no state, no I/O. A missing program or title always maps
/// to [`ActivityCategory::Other`], which is how undetectable windows are
/// recorded.
pub fn categorize(program: Option<&str>, title: Option<&str>) -> ActivityCategory {
    let (Some(program), Some(title)) = (program, title) else {
        return ActivityCategory::Other;
    };

    let program = program.to_lowercase();
    let title = title.to_lowercase();

    if matches_any(&program, &EDITOR_APPS) {
        return ActivityCategory::Coding;
    }

    if matches_any(&program, &BROWSER_APPS) {
        if matches_any(&title, &RESEARCH_SITES) {
            return ActivityCategory::TechnicalResearch;
        }
        if matches_any(&title, &ENTERTAINMENT_SITES) {
            return ActivityCategory::Entertainment;
        }
        if matches_any(&title, &WEBMAIL_SITES) {
            return ActivityCategory::Email;
        }
        return ActivityCategory::WebBrowsing;
    }

    if matches_any(&program, &CHAT_APPS) {
        return ActivityCategory::Chat;
    }
    if matches_any(&program, &MAIL_APPS) {
        return ActivityCategory::Email;
    }
    if matches_any(&program, &MUSIC_APPS) {
        return ActivityCategory::Music;
    }
    if matches_any(&program, &SYSTEM_APPS) {
        return ActivityCategory::SystemFiles;
    }

    ActivityCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_or_title_is_other() {
        assert_eq!(categorize(None, Some("x")), ActivityCategory::Other);
        assert_eq!(categorize(Some("code.exe"), None), ActivityCategory::Other);
        assert_eq!(categorize(None, None), ActivityCategory::Other);
    }

    #[test]
    fn test_code_editors() {
        assert_eq!(
            categorize(Some("code.exe"), Some("main.py")),
            ActivityCategory::Coding
        );
        assert_eq!(
            categorize(Some("pycharm64.exe"), Some("project")),
            ActivityCategory::Coding
        );
    }

    #[test]
    fn test_browser_technical_research() {
        assert_eq!(
            categorize(Some("chrome.exe"), Some("Stack Overflow - question")),
            ActivityCategory::TechnicalResearch
        );
        assert_eq!(
            categorize(Some("firefox.exe"), Some("my repo - GitHub")),
            ActivityCategory::TechnicalResearch
        );
    }

    #[test]
    fn test_browser_entertainment() {
        assert_eq!(
            categorize(Some("chrome.exe"), Some("youtube.com/watch")),
            ActivityCategory::Entertainment
        );
        assert_eq!(
            categorize(Some("msedge.exe"), Some("netflix.com - Home")),
            ActivityCategory::Entertainment
        );
    }

    #[test]
    fn test_browser_webmail() {
        assert_eq!(
            categorize(Some("chrome.exe"), Some("Inbox - mail.google.com")),
            ActivityCategory::Email
        );
    }

    #[test]
    fn test_browser_generic() {
        assert_eq!(
            categorize(Some("chrome.exe"), Some("some news site")),
            ActivityCategory::WebBrowsing
        );
    }

    #[test]
    fn test_research_wins_over_entertainment_in_order() {
        // Title matching both a research and an entertainment keyword takes
        // the earlier rule.
        assert_eq!(
            categorize(Some("chrome.exe"), Some("github youtube.com")),
            ActivityCategory::TechnicalResearch
        );
    }

    #[test]
    fn test_chat_mail_music_system() {
        assert_eq!(
            categorize(Some("slack.exe"), Some("general")),
            ActivityCategory::Chat
        );
        assert_eq!(
            categorize(Some("outlook.exe"), Some("Inbox")),
            ActivityCategory::Email
        );
        assert_eq!(
            categorize(Some("spotify.exe"), Some("anything")),
            ActivityCategory::Music
        );
        assert_eq!(
            categorize(Some("cmd.exe"), Some("C:\\Windows")),
            ActivityCategory::SystemFiles
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            categorize(Some("Spotify.EXE"), Some("Now Playing")),
            ActivityCategory::Music
        );
        assert_eq!(
            categorize(Some("CHROME.exe"), Some("STACK OVERFLOW")),
            ActivityCategory::TechnicalResearch
        );
    }

    #[test]
    fn test_unknown_program_is_other() {
        assert_eq!(
            categorize(Some("unknown.exe"), Some("random")),
            ActivityCategory::Other
        );
    }
}
