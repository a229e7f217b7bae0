//! Terminal rendering against ratatui's `TestBackend`.

use ratatui::{Terminal, backend::TestBackend};
use rootswitch_app::{RootId, Routes, ScreenRenderer};
use rootswitch_tui::{KeyInput, Navigator, SharedNavigator, TerminalRenderer, ui};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 16;

fn mounted(root: RootId) -> SharedNavigator {
    let routes = Routes::new("test");
    let navigator = Navigator::shared();
    let mut renderer = TerminalRenderer::new(&routes, navigator.clone()).unwrap();
    renderer.render_root(root, &routes.layout(root)).unwrap();
    navigator
}

/// Draw `navigator` once and return the screen contents as text.
fn draw(navigator: &Navigator) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, navigator)).unwrap();
    terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn unmounted_shows_placeholder() {
    let screen = draw(&Navigator::new());

    assert!(screen.contains("Starting..."));
    assert!(screen.contains("starting"));
}

#[test]
fn login_root_shows_title_and_button() {
    let screen = draw(&mounted(RootId::Login).borrow());

    assert!(screen.contains("Welcome"));
    assert!(screen.contains("Username"));
    assert!(screen.contains("[ Continue ]"));
    assert!(!screen.contains("Home"));
}

#[test]
fn login_form_echoes_input_and_banner() {
    let navigator = mounted(RootId::Login);
    navigator.borrow_mut().handle_key(KeyInput::Char('a'));
    navigator.borrow_mut().handle_key(KeyInput::Char('d'));
    navigator.borrow_mut().handle_key(KeyInput::Char('a'));
    navigator.borrow_mut().show_failure("login failed: nope");

    let screen = draw(&navigator.borrow());

    assert!(screen.contains("ada"));
    assert!(screen.contains("login failed: nope"));
}

#[test]
fn password_is_masked() {
    let navigator = mounted(RootId::Login);
    navigator.borrow_mut().handle_key(KeyInput::Tab);
    for c in "hunter2".chars() {
        navigator.borrow_mut().handle_key(KeyInput::Char(c));
    }

    let screen = draw(&navigator.borrow());

    assert!(screen.contains("Password"));
    assert!(screen.contains("*******"));
    assert!(!screen.contains("hunter2"));
}

#[test]
fn pending_login_replaces_button() {
    let navigator = mounted(RootId::Login);
    navigator.borrow_mut().handle_key(KeyInput::Enter);

    let screen = draw(&navigator.borrow());

    assert!(screen.contains("Logging in..."));
    assert!(!screen.contains("[ Continue ]"));
}

#[test]
fn after_login_shows_home_tab_first() {
    let screen = draw(&mounted(RootId::AfterLogin).borrow());

    assert!(screen.contains("Hey"));
    assert!(screen.contains("HOME"));
    assert!(screen.contains("Home"));
    assert!(screen.contains("Search"));
    assert!(!screen.contains("SEARCH"));
}

#[test]
fn switching_tabs_shows_search() {
    let navigator = mounted(RootId::AfterLogin);
    navigator.borrow_mut().handle_key(KeyInput::Tab);

    let screen = draw(&navigator.borrow());

    assert!(screen.contains("SEARCH"));
    assert!(!screen.contains("HOME"));
}
