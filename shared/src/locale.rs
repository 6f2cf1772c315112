//! Locale handling for URLs of the form `/<locale>/rest/of/path?query#fragment`.

use crate::types::Locale;

/// Active locale encoded by the first path segment of `url`.
///
/// Total over all inputs: only an exact `en` segment selects English, anything
/// else (including `ar`, an unknown segment or no segment at all) is Arabic.
pub fn locale_of(url: &str) -> Locale {
    let path = url.split('?').next().unwrap_or_default();
    let path = path.split('#').next().unwrap_or_default();

    match path.split('/').nth(1).and_then(Locale::from_segment) {
        Some(Locale::En) => Locale::En,
        _ => Locale::Ar,
    }
}

/// Rewrite `url` so its first path segment names the locale opposite to
/// `current`, keeping the rest of the path and everything after the first `?`.
///
/// A path without a locale segment is treated as already being on `current`,
/// so the segment is inserted before it is flipped. Returns the new URL and
/// the locale it points to.
pub fn switch_locale_url(url: &str, current: Locale) -> (String, Locale) {
    let (path, suffix) = match url.split_once('?') {
        Some((path, suffix)) => (path, Some(suffix)),
        None => (url, None),
    };

    let mut parts: Vec<&str> = path.split('/').collect();

    // "/" has no segments beyond the root.
    if parts.len() == 2 && parts[1].is_empty() {
        parts.pop();
    }

    if parts.get(1).and_then(|s| Locale::from_segment(s)).is_none() {
        parts.insert(1, current.as_str());
    }

    let target = current.opposite();
    parts[1] = target.as_str();

    let mut next = parts.join("/");
    if next.is_empty() {
        next.push('/');
    }

    match suffix {
        Some(suffix) if !suffix.is_empty() => (format!("{}?{}", next, suffix), target),
        _ => (next, target),
    }
}
