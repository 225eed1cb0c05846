use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Once;

use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use log::debug;

use super::board::{build_board_view, refresh_board};
use super::dialogs::{
    RESPONSE_AGAIN, show_about_dialog, show_instructions_dialog, show_victory_dialog,
};
use super::scheduler::GlibScheduler;
use super::state::UiState;
use crate::game::{GameController, GameEvent};

const APP_ID: &str = "io.github.MemoryMatch";

fn on_game_event(state: &Weak<RefCell<UiState>>, event: &GameEvent) {
    let Some(state) = state.upgrade() else {
        return;
    };
    match event {
        GameEvent::RoundReset => {
            let dialog = state.borrow_mut().victory_dialog.take();
            if let Some(dialog) = dialog {
                dialog.force_close();
            }
            refresh_board(&state);
        }
        GameEvent::StateChanged => refresh_board(&state),
        GameEvent::Victory { final_moves } => show_victory(&state, *final_moves),
        GameEvent::VictoryDismissed => {
            state.borrow_mut().victory_dialog = None;
        }
    }
}

fn show_victory(state: &Rc<RefCell<UiState>>, final_moves: u32) {
    let (window, controller) = {
        let st = state.borrow();
        (st.window.clone(), st.controller.clone())
    };
    debug!("showing victory dialog after {final_moves} moves");

    let dialog = show_victory_dialog(window.as_ref(), final_moves);
    dialog.connect_response(None, move |_, response| {
        if response == RESPONSE_AGAIN {
            controller.start_new_round();
        } else {
            controller.close_victory();
        }
    });
    state.borrow_mut().victory_dialog = Some(dialog);
}

fn restart_game(state: &Rc<RefCell<UiState>>) {
    let controller = state.borrow().controller.clone();
    controller.start_new_round();
}

pub fn run() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        load_css();

        let controller = GameController::with_defaults(Rc::new(GlibScheduler));
        let state = Rc::new(RefCell::new(UiState::new(controller.clone())));
        let state_events = Rc::downgrade(&state);
        controller.subscribe(Rc::new(move |event: &GameEvent| {
            on_game_event(&state_events, event)
        }));

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_instructions_dialog(&app);
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_about_dialog(&app);
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let app = app.clone();
            move |_, _| app.quit()
        });
        app.add_action(&quit_action);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        let title_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        title_box.set_valign(gtk::Align::Center);
        title_box.set_halign(gtk::Align::Center);
        title_box.set_hexpand(true);

        let title_main = gtk::Label::builder()
            .label("Memory Match")
            .halign(gtk::Align::Center)
            .css_classes(vec!["game-title-main"])
            .build();

        let title_subtitle = gtk::Label::builder()
            .label("")
            .halign(gtk::Align::Center)
            .css_classes(vec!["game-title-subtitle", "caption"])
            .build();

        title_box.append(&title_main);
        title_box.append(&title_subtitle);

        let header = adw::HeaderBar::builder().title_widget(&title_box).build();
        header.add_css_class("app-header");
        header.add_css_class("flat");

        let menu_model = gio::Menu::new();
        menu_model.append(Some("Instructions"), Some("app.instructions"));
        menu_model.append(Some("About Memory Match"), Some("app.about"));
        menu_model.append(Some("Quit"), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();

        let restart_button = gtk::Button::builder()
            .icon_name("view-refresh-symbolic")
            .build();
        restart_button.set_tooltip_text(Some("New Game"));
        restart_button.connect_clicked({
            let state = state.clone();
            move |_| {
                restart_game(&state);
            }
        });
        let end_box = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        end_box.append(&restart_button);
        end_box.append(&menu_button);
        header.pack_end(&end_box);

        state.borrow_mut().title_subtitle = Some(title_subtitle);
        let board_view = build_board_view(&state);

        let toolbar = adw::ToolbarView::new();
        toolbar.set_hexpand(true);
        toolbar.set_vexpand(true);
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&board_view));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title("Memory Match")
            .icon_name(APP_ID)
            .default_width(720)
            .default_height(760)
            .content(&toolbar)
            .build();
        win.set_size_request(360, 480);
        win.add_css_class("app-window");

        state.borrow_mut().window = Some(win.clone());

        controller.start_new_round();
        win.present();
    });

    app.run()
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        gio::resources_register_include!("memory-match.gresource")
            .expect("failed to register embedded resources");
    });

    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource("/io/github/MemoryMatch/style.css");
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
