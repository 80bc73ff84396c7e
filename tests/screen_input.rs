use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use mvp_counter::config::UiConfig;
use mvp_counter::counter::{Counter, Presenter, ViewError};
use mvp_counter::ui::focus::{Button, FocusIntent};
use mvp_counter::ui::events::AppEvent;
use mvp_counter::ui::input::{key_action, mouse_action, ScreenAction};
use mvp_counter::ui::runtime::handle_event;
use mvp_counter::ui::{CounterLabel, CounterScreen};
use std::sync::mpsc::RecvError;

fn wired_screen() -> CounterScreen {
    let label = CounterLabel::new();
    let presenter = Presenter::new(Counter::new(), label.clone());
    let mut screen = CounterScreen::new(label, UiConfig::default());
    screen.set_presenter(Box::new(presenter)).unwrap();
    screen.on_resize(60, 24);
    screen
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn quit_keys() {
    assert_eq!(key_action(key(KeyCode::Char('q'))), ScreenAction::Quit);
    assert_eq!(key_action(key(KeyCode::Esc)), ScreenAction::Quit);
    assert_eq!(
        key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ScreenAction::Quit
    );
}

#[test]
fn shortcut_keys_press_buttons() {
    assert_eq!(key_action(key(KeyCode::Char('+'))), ScreenAction::Press(Button::Increment));
    assert_eq!(key_action(key(KeyCode::Char('i'))), ScreenAction::Press(Button::Increment));
    assert_eq!(key_action(key(KeyCode::Char('r'))), ScreenAction::Press(Button::Reset));
    assert_eq!(key_action(key(KeyCode::Enter)), ScreenAction::PressFocused);
    assert_eq!(key_action(key(KeyCode::Char(' '))), ScreenAction::PressFocused);
}

#[test]
fn navigation_keys_move_focus() {
    assert_eq!(key_action(key(KeyCode::Tab)), ScreenAction::Focus(FocusIntent::Next));
    assert_eq!(key_action(key(KeyCode::BackTab)), ScreenAction::Focus(FocusIntent::Previous));
    assert_eq!(key_action(key(KeyCode::Up)), ScreenAction::Focus(FocusIntent::Previous));
    assert_eq!(key_action(key(KeyCode::Down)), ScreenAction::Focus(FocusIntent::Next));
}

#[test]
fn key_release_is_ignored() {
    let release = KeyEvent {
        code: KeyCode::Char('+'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(key_action(release), ScreenAction::None);
}

#[test]
fn only_left_click_becomes_click() {
    let down = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 7,
        row: 9,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(mouse_action(down), ScreenAction::Click { column: 7, row: 9 });

    let moved = MouseEvent {
        kind: MouseEventKind::Moved,
        ..down
    };
    assert_eq!(mouse_action(moved), ScreenAction::None);
}

#[test]
fn wired_screen_shows_initial_zero() {
    let screen = wired_screen();
    assert!(screen.is_wired());
    assert_eq!(screen.count(), 0);
    assert_eq!(screen.label_text(), "Counter: 0");
}

#[test]
fn press_focused_follows_focus() {
    let mut screen = wired_screen();
    screen.apply(ScreenAction::PressFocused).unwrap();
    screen.apply(ScreenAction::PressFocused).unwrap();
    assert_eq!(screen.count(), 2);

    screen.apply(ScreenAction::Focus(FocusIntent::Next)).unwrap();
    screen.apply(ScreenAction::PressFocused).unwrap();
    assert_eq!(screen.count(), 0);
}

#[test]
fn click_on_button_presses_and_focuses_it() {
    let mut screen = wired_screen();
    let layout = screen.layout();

    let inc = layout.increment;
    screen
        .apply(ScreenAction::Click { column: inc.x + 2, row: inc.y + 1 })
        .unwrap();
    assert_eq!(screen.count(), 1);

    let reset = layout.reset;
    screen
        .apply(ScreenAction::Click { column: reset.x + 2, row: reset.y + 1 })
        .unwrap();
    assert_eq!(screen.count(), 0);
    assert!(screen.focus().is_focused(Button::Reset));
}

#[test]
fn click_outside_buttons_does_nothing() {
    let mut screen = wired_screen();
    screen.apply(ScreenAction::Click { column: 0, row: 0 }).unwrap();
    assert_eq!(screen.count(), 0);
    assert!(screen.focus().is_focused(Button::Increment));
}

#[test]
fn quit_sets_flag() {
    let mut screen = wired_screen();
    assert!(!screen.should_quit());
    screen.apply(ScreenAction::Quit).unwrap();
    assert!(screen.should_quit());
}

#[test]
fn unwired_screen_fails_fast_on_intent() {
    let mut screen = CounterScreen::new(CounterLabel::new(), UiConfig::default());
    assert!(!screen.is_wired());
    assert_eq!(screen.press(Button::Increment), Err(ViewError::PresenterMissing));
    assert_eq!(
        screen.apply(ScreenAction::Press(Button::Reset)),
        Err(ViewError::PresenterMissing)
    );
}

#[test]
fn unwired_screen_refuses_to_show() {
    let screen = CounterScreen::new(CounterLabel::new(), UiConfig::default());
    let err = screen.show().unwrap_err();
    assert_eq!(
        err.downcast_ref::<ViewError>(),
        Some(&ViewError::PresenterMissing)
    );
}

#[test]
fn runtime_applies_key_events() {
    let mut screen = wired_screen();
    handle_event(&mut screen, Ok(AppEvent::Key(key(KeyCode::Char('+'))))).unwrap();
    handle_event(&mut screen, Ok(AppEvent::Key(key(KeyCode::Char('+'))))).unwrap();
    assert_eq!(screen.count(), 2);
}

#[test]
fn runtime_resize_event_updates_hit_area() {
    let mut screen = CounterScreen::new(CounterLabel::new(), UiConfig::default());
    handle_event(&mut screen, Ok(AppEvent::Resize(80, 30))).unwrap();
    assert_eq!(screen.layout().increment.width, 17);
}

#[test]
fn runtime_fails_when_reader_disconnects() {
    let mut screen = wired_screen();
    let err = handle_event(&mut screen, Err(RecvError)).unwrap_err();
    assert_eq!(err.to_string(), "terminal event reader stopped");
}

#[test]
fn runtime_surfaces_reader_io_errors() {
    let mut screen = wired_screen();
    let event = AppEvent::InputError("read failed: device gone".to_string());
    assert!(format!("{event:?}").contains("InputError"));

    let err = handle_event(&mut screen, Ok(event)).unwrap_err();
    assert_eq!(err.to_string(), "terminal input failed: read failed: device gone");
}
