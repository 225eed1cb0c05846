use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub const RESPONSE_CLOSE: &str = "close";
pub const RESPONSE_AGAIN: &str = "again";

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some("Instructions"),
        Some(
            "Reveal two cards per turn.\n\
Matching symbols stay face up, different ones flip back.\n\
Find every pair in as few moves as you can.",
        ),
    );
    dialog.add_response("ok", "Got it");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Memory Match")
        .application_icon("io.github.MemoryMatch")
        .version(env!("CARGO_PKG_VERSION"))
        .comments("Flip cards and find the pairs.")
        .build();
    dialog.add_legal_section("Memory Match", None, gtk::License::MitX11, None);
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_victory_dialog(
    parent: Option<&adw::ApplicationWindow>,
    final_moves: u32,
) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some("Well done!"),
        Some(&format!("You found every pair in {final_moves} moves.")),
    );
    dialog.add_response(RESPONSE_CLOSE, "Close");
    dialog.add_response(RESPONSE_AGAIN, "Play Again");
    dialog.set_response_appearance(RESPONSE_AGAIN, adw::ResponseAppearance::Suggested);
    dialog.set_default_response(Some(RESPONSE_AGAIN));
    dialog.set_close_response(RESPONSE_CLOSE);
    dialog.present(parent);
    dialog
}
