use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mhw_sharpness_core::WeaponCategory;

pub(crate) fn run_categories() {
    log::info!("Weapon categories:");
    log::info!("");

    for category in WeaponCategory::all() {
        log::info!(
            "  {} [{}]",
            category
                .short_name()
                .if_supports_color(Stdout, |t| t.bold()),
            category
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    Aliases: {}", category.aliases().join(", "));
        log::info!("    Listing page: {}", category.listing_page());
    }
}
