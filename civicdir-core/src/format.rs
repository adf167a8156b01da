//! Locale-aware date/time rendering.
//!
//! Month names and day periods come from the locale data shipped with chrono;
//! the field order and hour cycle come from a small per-locale style table.

use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;

use crate::error::{CivicdirError, CivicdirResult};

/// Environment variables consulted for the time locale, in priority order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// strftime patterns for one family of locales.
#[derive(Debug, PartialEq)]
struct Styles {
    medium_date: &'static str,
    short_time: &'static str,
    separator: &'static str,
}

const US_STYLES: Styles = Styles {
    medium_date: "%b %-d, %Y",
    short_time: "%-I:%M %p",
    separator: ", ",
};

const DAY_MONTH_12H_STYLES: Styles = Styles {
    medium_date: "%-d %b %Y",
    short_time: "%-I:%M %p",
    separator: ", ",
};

const DAY_MONTH_STYLES: Styles = Styles {
    medium_date: "%-d %b %Y",
    short_time: "%H:%M",
    separator: ", ",
};

const DOTTED_STYLES: Styles = Styles {
    medium_date: "%d.%m.%Y",
    short_time: "%H:%M",
    separator: ", ",
};

const EAST_ASIAN_STYLES: Styles = Styles {
    medium_date: "%Y/%m/%d",
    short_time: "%H:%M",
    separator: " ",
};

const KOREAN_STYLES: Styles = Styles {
    medium_date: "%Y. %-m. %-d.",
    short_time: "%p %-I:%M",
    separator: " ",
};

fn styles_for(locale_name: &str) -> &'static Styles {
    match locale_name {
        "en_US" | "en_PH" => return &US_STYLES,
        "en_AU" | "en_NZ" | "en_IN" => return &DAY_MONTH_12H_STYLES,
        _ => {}
    }

    let language = locale_name.split('_').next().unwrap_or(locale_name);
    match language {
        "de" | "fi" | "nb" | "ru" | "pl" | "cs" | "tr" => &DOTTED_STYLES,
        "ja" | "zh" => &EAST_ASIAN_STYLES,
        "ko" => &KOREAN_STYLES,
        _ => &DAY_MONTH_STYLES,
    }
}

/// Renders instants in a fixed locale and timezone.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale_name: String,
    locale: Locale,
    timezone: Tz,
}

impl DateFormatter {
    /// Build a formatter for a locale name such as `en_US` or `de_DE.UTF-8`.
    pub fn new(locale_name: &str, timezone: Tz) -> CivicdirResult<Self> {
        let (locale_name, locale) = resolve_locale(locale_name)?;

        Ok(DateFormatter {
            locale_name,
            locale,
            timezone,
        })
    }

    /// The formatter for this process: locale from the environment, timezone
    /// from the operating system. Unresolvable values fall back to POSIX/UTC.
    pub fn system() -> Self {
        let raw = pick_locale_name(LOCALE_ENV_VARS.iter().map(|var| std::env::var(var).ok()));

        let (locale_name, locale) = raw
            .as_deref()
            .and_then(|name| match resolve_locale(name) {
                Ok(resolved) => Some(resolved),
                Err(e) => {
                    tracing::debug!(error = %e, "falling back to POSIX locale");
                    None
                }
            })
            .unwrap_or_else(|| ("POSIX".to_string(), Locale::POSIX));

        DateFormatter {
            locale_name,
            locale,
            timezone: system_timezone(),
        }
    }

    /// Apply optional overrides on top of [`DateFormatter::system`].
    pub fn from_settings(locale: Option<&str>, timezone: Option<&str>) -> CivicdirResult<Self> {
        let timezone = match timezone {
            Some(name) => resolve_timezone(name)?,
            None => system_timezone(),
        };

        match locale {
            Some(name) => Self::new(name, timezone),
            None => Ok(DateFormatter {
                timezone,
                ..Self::system()
            }),
        }
    }

    pub fn locale_name(&self) -> &str {
        &self.locale_name
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Medium date followed by short time, e.g. "Mar 20, 2025, 3:00 PM" in en_US.
    pub fn medium_date_short_time(&self, instant: &DateTime<Utc>) -> String {
        let styles = styles_for(&self.locale_name);
        format!(
            "{}{}{}",
            self.render(instant, styles.medium_date),
            styles.separator,
            self.render(instant, styles.short_time)
        )
    }

    /// Time of day only, e.g. "3:00 PM" in en_US or "15:00" in de_DE.
    pub fn short_time(&self, instant: &DateTime<Utc>) -> String {
        self.render(instant, styles_for(&self.locale_name).short_time)
    }

    /// Medium date only, used for day headings.
    pub fn medium_date(&self, instant: &DateTime<Utc>) -> String {
        self.render(instant, styles_for(&self.locale_name).medium_date)
    }

    fn render(&self, instant: &DateTime<Utc>, pattern: &str) -> String {
        instant
            .with_timezone(&self.timezone)
            .format_localized(pattern, self.locale)
            .to_string()
    }
}

/// First non-empty value among the candidates, normalized.
fn pick_locale_name<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|raw| normalize_locale_name(&raw))
}

/// Strip encoding and modifier suffixes: `de_DE.UTF-8@euro` -> `de_DE`.
fn normalize_locale_name(raw: &str) -> Option<String> {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");

    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some("POSIX".to_string()),
        _ => Some(base),
    }
}

fn resolve_locale(raw: &str) -> CivicdirResult<(String, Locale)> {
    let name =
        normalize_locale_name(raw).ok_or_else(|| CivicdirError::UnknownLocale(raw.to_string()))?;

    let locale = Locale::try_from(name.as_str())
        .map_err(|_| CivicdirError::UnknownLocale(raw.to_string()))?;

    Ok((name, locale))
}

fn resolve_timezone(name: &str) -> CivicdirResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| CivicdirError::UnknownTimezone(name.to_string()))
}

fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => resolve_timezone(&name).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "falling back to UTC");
            Tz::UTC
        }),
        Err(e) => {
            tracing::debug!(error = %e, "could not determine system timezone, using UTC");
            Tz::UTC
        }
    }
}
