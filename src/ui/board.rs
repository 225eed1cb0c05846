use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::pango;
use gtk4::prelude::*;

use super::hud::update_subtitle;
use super::state::UiState;

pub const CONTENT_MARGIN: i32 = 12;
pub const TILE_GAP: i32 = 6;

const HIDDEN_FACE: &str = "?";

pub(super) fn redraw_button_child(button: &gtk::Button) {
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}

/// Pulls a fresh board view from the controller and restyles every card.
pub(super) fn refresh_board(state: &Rc<RefCell<UiState>>) {
    let mut st = state.borrow_mut();
    let views = st.controller.board_view();
    st.views = views;

    for (button, view) in st.grid_buttons.iter().zip(st.views.iter()) {
        button.remove_css_class("active");
        button.remove_css_class("matched");
        if view.matched {
            button.add_css_class("matched");
        } else if view.face_up {
            button.add_css_class("active");
        }
        redraw_button_child(button);
    }
    update_subtitle(&st);
}

fn draw_card(area: &gtk::DrawingArea, cr: &cairo::Context, width: i32, height: i32, text: &str, is_hidden: bool) {
    let min_dim = width.min(height) as f64;
    let font_size = if is_hidden {
        min_dim * 0.34
    } else {
        min_dim * 0.40
    };

    cr.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    if is_hidden {
        font_desc.set_family("Cantarell, Noto Sans, sans");
        font_desc.set_weight(pango::Weight::Bold);
    } else {
        font_desc.set_family("Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans");
    }
    font_desc.set_size((font_size * pango::SCALE as f64) as i32);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    #[allow(deprecated)]
    let fg = area.style_context().color();
    cr.set_source_rgba(
        fg.red() as f64,
        fg.green() as f64,
        fg.blue() as f64,
        fg.alpha() as f64,
    );

    let (text_width, text_height) = layout.pixel_size();
    cr.move_to(
        (width as f64 - text_width as f64) / 2.0,
        (height as f64 - text_height as f64) / 2.0,
    );

    pangocairo::functions::show_layout(cr, &layout);
}

pub(super) fn build_board_grid(state: &Rc<RefCell<UiState>>) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class("memory-board");
    grid.set_row_spacing(TILE_GAP as u32);
    grid.set_column_spacing(TILE_GAP as u32);
    grid.set_halign(gtk::Align::Fill);
    grid.set_valign(gtk::Align::Fill);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let (grid_cols, total_cards, controller) = {
        let st = state.borrow();
        (
            st.grid_cols,
            st.controller.config().symbols.len() * 2,
            st.controller.clone(),
        )
    };

    let mut buttons = Vec::with_capacity(total_cards);

    for index in 0..total_cards {
        let aspect_frame = gtk::AspectFrame::builder()
            .ratio(1.0)
            .obey_child(false)
            .halign(gtk::Align::Fill)
            .valign(gtk::Align::Fill)
            .hexpand(true)
            .vexpand(true)
            .build();

        let button = gtk::Button::builder()
            .css_classes(vec!["memory-card"])
            .build();
        button.set_hexpand(true);
        button.set_vexpand(true);

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();
        drawing_area.add_css_class("memory-card-label");

        let state_draw = Rc::downgrade(state);
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let Some(state) = state_draw.upgrade() else {
                return;
            };
            let st = state.borrow();
            let Some(view) = st.view_at(index) else {
                return;
            };
            match &view.symbol {
                Some(symbol) if view.face_up => draw_card(area, cr, width, height, symbol, false),
                _ => draw_card(area, cr, width, height, HIDDEN_FACE, true),
            }
        });

        button.set_child(Some(&drawing_area));

        // The card under a slot changes every round, so look the id up on click.
        let controller = controller.clone();
        let state_click = Rc::downgrade(state);
        button.connect_clicked(move |_| {
            let Some(state) = state_click.upgrade() else {
                return;
            };
            let card_id = state.borrow().view_at(index).map(|view| view.id);
            if let Some(card_id) = card_id {
                controller.request_reveal(card_id);
            }
        });

        aspect_frame.set_child(Some(&button));

        let x = index as i32 % grid_cols;
        let y = index as i32 / grid_cols;
        grid.attach(&aspect_frame, x, y, 1, 1);
        buttons.push(button);
    }

    state.borrow_mut().grid_buttons = buttons;

    grid
}

pub(super) fn build_board_view(state: &Rc<RefCell<UiState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.add_css_class("game-root");

    let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    content.set_hexpand(true);
    content.set_vexpand(true);
    content.set_margin_top(CONTENT_MARGIN);
    content.set_margin_bottom(CONTENT_MARGIN);
    content.set_margin_start(CONTENT_MARGIN);
    content.set_margin_end(CONTENT_MARGIN);

    let board_grid = build_board_grid(state);

    let board_card = gtk::Box::new(gtk::Orientation::Vertical, 0);
    board_card.set_halign(gtk::Align::Fill);
    board_card.set_valign(gtk::Align::Fill);
    board_card.set_hexpand(true);
    board_card.set_vexpand(true);
    board_card.add_css_class("memory-card-container");

    board_card.connect_closure(
        "notify::width",
        false,
        glib::closure_local!(move |card: gtk::Box, _: glib::ParamSpec| {
            if card.width() < 500 {
                card.add_css_class("compact");
            } else {
                card.remove_css_class("compact");
            }
        }),
    );

    let (grid_cols, grid_rows) = {
        let st = state.borrow();
        (st.grid_cols as f32, st.grid_rows as f32)
    };
    let grid_ratio = if grid_rows > 0.0 { grid_cols / grid_rows } else { 1.0 };
    let grid_frame = gtk::AspectFrame::new(0.5, 0.5, grid_ratio, false);
    grid_frame.set_halign(gtk::Align::Fill);
    grid_frame.set_valign(gtk::Align::Fill);
    grid_frame.set_hexpand(true);
    grid_frame.set_vexpand(true);
    grid_frame.set_child(Some(&board_grid));
    board_card.append(&grid_frame);

    content.append(&board_card);
    root.append(&content);

    state.borrow_mut().board_container = Some(board_card);

    root
}
