//! Coarse device classification from `User-Agent` headers.
//!
//! Parsing is delegated to `woothee`; this module folds its categories and
//! OS names into the labels shown on the result page.

use woothee::parser::Parser;

const UNKNOWN_PLATFORM: &str = "Outro";

/// Device form factor shown in the "devices" breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCategory {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }
}

/// Form factor and platform name derived from a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    pub category: DeviceCategory,
    pub platform: &'static str,
    /// Crawlers and link-preview fetchers.
    pub is_bot: bool,
}

/// Classifies a user agent. Missing or unrecognised agents count as a
/// desktop on platform `Outro`.
pub fn classify_user_agent(user_agent: Option<&str>) -> DeviceInfo {
    let Some(ua) = user_agent.filter(|ua| !ua.trim().is_empty()) else {
        return DeviceInfo {
            category: DeviceCategory::Desktop,
            platform: UNKNOWN_PLATFORM,
            is_bot: false,
        };
    };

    let parsed = Parser::new().parse(ua).unwrap_or_default();
    let platform = platform_label(parsed.os);

    // woothee files every Android device as a smartphone; tablets omit the
    // "Mobile" token.
    let category = match parsed.category {
        "smartphone" | "mobilephone" => {
            if platform == "iPad" || (platform == "Android" && !ua.contains("Mobile")) {
                DeviceCategory::Tablet
            } else {
                DeviceCategory::Mobile
            }
        }
        _ => DeviceCategory::Desktop,
    };

    DeviceInfo {
        category,
        platform,
        is_bot: parsed.category == "crawler",
    }
}

fn platform_label(os: &str) -> &'static str {
    match os {
        "iPad" => "iPad",
        "iPhone" | "iPod" => "iPhone",
        "Android" => "Android",
        "Mac OSX" => "MacOS",
        "Linux" => "Linux",
        os if os.starts_with("Windows") => "Windows",
        _ => UNKNOWN_PLATFORM,
    }
}
