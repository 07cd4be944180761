#![forbid(unsafe_code)]

//! Helpers for programs that drive the overlay from outside the page.
//!
//! A controller either navigates the overlay page to a URL carrying the
//! inputs ([`overlay_url`]) or evaluates a small script against the global
//! entry point ([`HostCommand::to_script`]), e.g. over a DevTools connection.

use url::Url;

use crate::clamp::Percentage;
use crate::surface::{SLOT_COUNT, SlotIndex};

/// Query parameter used to defeat page caching on navigation.
pub const CACHE_BUST_PARAM: &str = "t";

/// Add the word-slot parameters (and an optional cache-busting stamp) to the
/// overlay page URL. Existing query pairs on `base` are kept.
#[must_use]
pub fn overlay_url(base: &Url, words: [&str; SLOT_COUNT], cache_bust: Option<u64>) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for slot in SlotIndex::ALL {
            pairs.append_pair(slot.param_name(), words[slot.get()]);
        }
        if let Some(stamp) = cache_bust {
            pairs.append_pair(CACHE_BUST_PARAM, &stamp.to_string());
        }
    }
    url
}

/// A mutation to run against the overlay's global entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Evaluates to whether the entry point is installed.
    Ready,
    SetMeters { temp: Percentage, money: Percentage },
    SetTemp(Percentage),
    SetMoney(Percentage),
    SetWords([String; SLOT_COUNT]),
    Refresh,
}

impl HostCommand {
    #[must_use]
    pub fn set_words(words: [&str; SLOT_COUNT]) -> Self {
        Self::SetWords(words.map(str::to_string))
    }

    /// A JavaScript expression that is a no-op when the overlay is missing.
    #[must_use]
    pub fn to_script(&self, global_name: &str) -> String {
        let g = global_name;
        match self {
            Self::Ready => format!("typeof window.{g} !== 'undefined';"),
            Self::SetMeters { temp, money } => {
                format!("window.{g} && {g}.set({}, {});", temp.get(), money.get())
            }
            Self::SetTemp(pct) => format!("window.{g} && {g}.setTemp({});", pct.get()),
            Self::SetMoney(pct) => format!("window.{g} && {g}.setMoney({});", pct.get()),
            Self::SetWords(words) => {
                let args: Vec<String> = words.iter().map(|w| js_string(w)).collect();
                format!("window.{g} && {g}.setWords([{}]);", args.join(","))
            }
            Self::Refresh => format!("window.{g} && {g}.refresh();"),
        }
    }
}

/// JSON string literals are valid JavaScript string literals.
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
