#![forbid(unsafe_code)]

//! The five URL-driven inputs: `temp`, `money`, `w1`, `w2`, `w3`.
//!
//! The query string is read first. Some hosts route through the fragment
//! instead, so when there is no query the fragment is read as one.

use url::{Url, form_urlencoded};

use crate::clamp::Percentage;
use crate::surface::{SLOT_COUNT, SlotIndex, WordSlot};

/// Access to the current location's query and fragment.
pub trait LocationSource {
    /// Query component, with or without the leading `?`.
    fn query(&self) -> Option<String>;
    /// Fragment component, with or without the leading `#`.
    fn fragment(&self) -> Option<String>;
}

/// A location fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
    query: Option<String>,
    fragment: Option<String>,
}

impl StaticLocation {
    #[must_use]
    pub fn new(query: Option<&str>, fragment: Option<&str>) -> Self {
        Self {
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        }
    }

    /// Split an absolute URL or a bare `?query#fragment` string.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        match parse_href(href) {
            Some(url) => Self::new(url.query(), url.fragment()),
            None => Self::default(),
        }
    }

    /// Replace the location, e.g. after a host navigation.
    pub fn set_href(&mut self, href: &str) {
        *self = Self::from_href(href);
    }
}

impl LocationSource for StaticLocation {
    fn query(&self) -> Option<String> {
        self.query.clone()
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }
}

fn parse_href(href: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(href) {
        return Some(url);
    }
    let base = Url::parse("http://localhost/").ok()?;
    base.join(href).ok()
}

/// One read of the URL inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudParams {
    pub temp: Percentage,
    pub money: Percentage,
    pub words: [WordSlot; SLOT_COUNT],
}

impl HudParams {
    /// Read from a location. Never fails; absent fields take defaults.
    #[must_use]
    pub fn from_location(location: &dyn LocationSource) -> Self {
        let query = location.query();
        let query = query
            .as_deref()
            .map(|q| q.strip_prefix('?').unwrap_or(q))
            .filter(|q| !q.is_empty());
        match query {
            Some(q) => Self::from_query(q),
            None => {
                let fragment = location.fragment().unwrap_or_default();
                let fragment = fragment.strip_prefix('#').unwrap_or(&fragment);
                Self::from_query(fragment.strip_prefix('?').unwrap_or(fragment))
            }
        }
    }

    #[must_use]
    pub fn from_href(href: &str) -> Self {
        Self::from_location(&StaticLocation::from_href(href))
    }

    /// Parse a form-encoded query (no leading `?`). First occurrence wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut temp = None;
        let mut money = None;
        let mut words: [Option<String>; SLOT_COUNT] = Default::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let target = match &*key {
                "temp" => &mut temp,
                "money" => &mut money,
                "w1" => &mut words[0],
                "w2" => &mut words[1],
                "w3" => &mut words[2],
                _ => continue,
            };
            if target.is_none() {
                *target = Some(value.into_owned());
            }
        }
        Self {
            temp: Percentage::clamp(temp.as_deref()),
            money: Percentage::clamp(money.as_deref()),
            words: SlotIndex::ALL.map(|slot| WordSlot::new(words[slot.get()].as_deref().unwrap_or(""))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_five_fields() {
        let p = HudParams::from_query("temp=40&money=75&w1=Go&w2=Left&w3=Right");
        assert_eq!(p.temp.get(), 40);
        assert_eq!(p.money.get(), 75);
        assert_eq!(p.words.clone().map(|w| w.as_str().to_string()), ["Go", "Left", "Right"]);
    }

    #[test]
    fn clamps_and_trims() {
        let p = HudParams::from_href("?temp=150&money=-5&w1=Hi&w2=&w3=%20");
        assert_eq!(p.temp.get(), 100);
        assert_eq!(p.money.get(), 0);
        assert_eq!(p.words[0].as_str(), "Hi");
        assert!(p.words[1].is_blank());
        assert!(p.words[2].is_blank());
    }

    #[test]
    fn decodes_plus_and_percent_escapes() {
        let p = HudParams::from_query("w1=Hello+there&w2=caf%C3%A9");
        assert_eq!(p.words[0].as_str(), "Hello there");
        assert_eq!(p.words[1].as_str(), "café");
    }

    #[test]
    fn falls_back_to_fragment_without_query() {
        let p = HudParams::from_href("file:///hud/base.html#temp=12&w3=Run");
        assert_eq!(p.temp.get(), 12);
        assert_eq!(p.words[2].as_str(), "Run");

        let p = HudParams::from_href("#?money=9");
        assert_eq!(p.money.get(), 9);
    }

    #[test]
    fn query_wins_over_fragment() {
        let p = HudParams::from_href("http://x/?temp=1#temp=99");
        assert_eq!(p.temp.get(), 1);
    }

    #[test]
    fn empty_query_uses_fragment() {
        let loc = StaticLocation::new(Some("?"), Some("#temp=5"));
        assert_eq!(HudParams::from_location(&loc).temp.get(), 5);
    }

    #[test]
    fn first_occurrence_wins_and_unknown_keys_ignored() {
        let p = HudParams::from_query("temp=3&temp=80&color=red&w1=a&w1=b");
        assert_eq!(p.temp.get(), 3);
        assert_eq!(p.words[0].as_str(), "a");
    }

    #[test]
    fn infinity_words_in_the_url_are_zero() {
        let p = HudParams::from_href("?temp=inf&money=Infinity");
        assert_eq!(p.temp, Percentage::ZERO);
        assert_eq!(p.money, Percentage::ZERO);
        assert_eq!(HudParams::from_query("temp=NaN").temp, Percentage::ZERO);
    }

    #[test]
    fn nothing_at_all_is_defaults() {
        assert_eq!(HudParams::from_href(""), HudParams::default());
        assert_eq!(HudParams::from_location(&StaticLocation::default()), HudParams::default());
    }
}
