#![forbid(unsafe_code)]

//! End-to-end tests for the HUD pipeline on a headless surface.
//!
//! URL in, rendered meters and word slots out, through the same `Hud` the
//! browser binding uses.

use jellyhud_core::headless::SlotState;
use jellyhud_core::host::{HostCommand, overlay_url};
use jellyhud_core::scale::{MoneyScale, TempScale};
use jellyhud_core::{
    HeadlessSurface, Hud, HudConfig, HudParams, InitOutcome, Meter, Palette, Percentage, Rgb,
    StaticLocation, StaticTheme,
};
use pretty_assertions::assert_eq;
use tracing::Level;
use url::Url;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
}

fn themed_hud(href: &str) -> Hud<HeadlessSurface, StaticLocation> {
    init_tracing();
    let config = HudConfig::default();
    let theme = StaticTheme::new()
        .with("--body", "#1e3a5f")
        .with("--tent", "rgb(240, 200, 160)");
    let palette = Palette::resolve(&theme, &config);
    Hud::new(
        HeadlessSurface::new(),
        StaticLocation::from_href(href),
        palette,
        config.layout(),
    )
}

#[test]
fn url_inputs_are_clamped_and_trimmed() {
    let mut hud = themed_hud("?temp=150&money=-5&w1=Hi&w2=&w3=%20");
    assert_eq!(hud.init(), InitOutcome::Created);

    let surface = hud.surface();
    assert_eq!(surface.meter(Meter::Temp).map(|m| m.pct), Some(Percentage::FULL));
    assert_eq!(surface.meter(Meter::Money).map(|m| m.pct), Some(Percentage::ZERO));
    assert_eq!(
        surface.slot(0),
        Some(&SlotState {
            text: "Hi".to_string(),
            visible: true
        })
    );
    assert_eq!(surface.slot(1).map(|s| s.visible), Some(false));
    assert_eq!(surface.slot(2).map(|s| s.visible), Some(false));
}

#[test]
fn bar_colors_follow_the_palette() {
    let mut hud = themed_hud("?temp=0&money=100");
    hud.init();
    let palette = *hud.palette();

    assert_eq!(palette.body, Rgb::new(0x1e, 0x3a, 0x5f));
    assert_eq!(hud.surface().meter(Meter::Temp).map(|m| m.fill), Some(palette.cool));
    assert_eq!(hud.surface().meter(Meter::Money).map(|m| m.fill), Some(palette.ok));

    hud.set(100, 0);
    assert_eq!(hud.surface().meter(Meter::Temp).map(|m| m.fill), Some(palette.hot));
    assert_eq!(hud.surface().meter(Meter::Money).map(|m| m.fill), Some(palette.hot));
}

#[test]
fn double_init_builds_one_surface() {
    let mut hud = themed_hud("?temp=20");
    hud.init();
    hud.set_temp(90);
    assert_eq!(hud.init(), InitOutcome::AlreadyPresent);
    assert_eq!(hud.surface().create_calls(), 1);
    // A second init re-applies the URL, like the first.
    assert_eq!(hud.surface().meter(Meter::Temp).map(|m| m.pct.get()), Some(20));
}

#[test]
fn set_words_with_one_entry_clears_the_rest() {
    let mut hud = themed_hud("?w1=one&w2=two&w3=three");
    hud.init();
    hud.set_words(["A"]);
    assert_eq!(hud.surface().slot_text(0), Some("A"));
    assert_eq!(hud.surface().slot_text(1), None);
    assert_eq!(hud.surface().slot_text(2), None);
}

#[test]
fn fragment_routed_hosts_work() {
    let mut hud = themed_hud("file:///srv/jellies/base.html#temp=64&money=12&w2=Wait");
    hud.init();
    assert_eq!(hud.surface().meter(Meter::Temp).map(|m| m.pct.get()), Some(64));
    assert_eq!(hud.surface().meter(Meter::Money).map(|m| m.pct.get()), Some(12));
    assert_eq!(hud.surface().slot_text(1), Some("Wait"));
}

#[test]
fn host_url_round_trips_through_params() {
    let base = Url::parse("file:///srv/jellies/base.html").unwrap();
    let url = overlay_url(&base, ["Pleasure", "", "Restart"], Some(42));
    let params = HudParams::from_href(url.as_str());
    assert_eq!(params.words[0].as_str(), "Pleasure");
    assert!(params.words[1].is_blank());
    assert_eq!(params.words[2].as_str(), "Restart");
    assert_eq!(params.temp, Percentage::ZERO);
}

#[test]
fn host_scales_feed_the_mutation_api() {
    let temp = TempScale::default().to_percentage(22);
    let money = MoneyScale::default().to_percentage(3);
    let cmd = HostCommand::SetMeters { temp, money };
    assert_eq!(
        cmd.to_script("JellyHUD"),
        "window.JellyHUD && JellyHUD.set(41, 60);"
    );

    let mut hud = themed_hud("");
    hud.init();
    hud.set(temp, money);
    assert_eq!(hud.surface().meter(Meter::Temp).map(|m| m.pct.get()), Some(41));
    assert_eq!(hud.surface().meter(Meter::Money).map(|m| m.pct.get()), Some(60));
}
