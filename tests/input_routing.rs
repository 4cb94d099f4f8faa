use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pitchdeck::deck::{
    InputEvent, InputRouter, ManualClock, NavCommand, Point, PointerRelease, Presentation,
    SectionStore,
};
use pitchdeck::models::Section;
use std::rc::Rc;

fn deck(count: usize) -> Presentation {
    let sections = (0..count)
        .map(|i| Section::new(format!("s{}", i), format!("Section {}", i)))
        .collect();
    Presentation::new(
        SectionStore::new(sections).unwrap(),
        Rc::new(ManualClock::new()),
        false,
    )
}

fn swipe(router: &mut InputRouter, presentation: &mut Presentation, dx: f64, dy: f64) -> bool {
    let start = Point::new(400.0, 300.0);
    router.dispatch(InputEvent::TouchStart(start), presentation.navigation_mut());
    router.dispatch(
        InputEvent::TouchEnd(Point::new(start.x + dx, start.y + dy)),
        presentation.navigation_mut(),
    )
}

#[test]
fn test_horizontal_swipe_left_goes_forward() {
    let mut presentation = deck(13);
    let mut router = InputRouter::default();

    assert!(swipe(&mut router, &mut presentation, -150.0, 10.0));
    assert_eq!(presentation.current_index(), 1);

    assert!(swipe(&mut router, &mut presentation, 150.0, -10.0));
    assert_eq!(presentation.current_index(), 0);
}

#[test]
fn test_short_or_vertical_swipe_does_nothing() {
    let mut presentation = deck(13);
    let mut router = InputRouter::default();

    assert!(!swipe(&mut router, &mut presentation, 40.0, 60.0));
    assert!(!swipe(&mut router, &mut presentation, -100.0, 0.0));
    assert!(!swipe(&mut router, &mut presentation, -150.0, 200.0));
    assert_eq!(presentation.current_index(), 0);
}

#[test]
fn test_touch_end_without_start_is_ignored() {
    let mut router = InputRouter::default();
    assert_eq!(router.route(InputEvent::TouchEnd(Point::new(0.0, 0.0))), None);
}

#[test]
fn test_every_key_press_navigates_once() {
    let mut presentation = deck(13);
    let mut router = InputRouter::default();
    let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);

    for _ in 0..20 {
        router.dispatch(InputEvent::Key(right), presentation.navigation_mut());
    }
    assert_eq!(presentation.current_index(), 12);

    let home = KeyEvent::new(KeyCode::Home, KeyModifiers::NONE);
    router.dispatch(InputEvent::Key(home), presentation.navigation_mut());
    assert_eq!(presentation.current_index(), 0);
}

#[test]
fn test_nav_click_jumps_to_section() {
    let mut presentation = deck(13);
    let mut router = InputRouter::default();

    assert_eq!(router.route(InputEvent::NavClick(7)), Some(NavCommand::GoTo(7)));
    router.dispatch(InputEvent::NavClick(7), presentation.navigation_mut());
    assert_eq!(presentation.current_index(), 7);

    // out of range clicks route but do not move
    router.dispatch(InputEvent::NavClick(30), presentation.navigation_mut());
    assert_eq!(presentation.current_index(), 7);
}

#[test]
fn test_terminal_drag_swipes_and_tap_clicks() {
    let mut presentation = deck(13);
    let mut router = InputRouter::new(100.0).with_cell_size(10.0, 20.0);

    router.press(50, 12);
    let release = router.release(38, 12);
    assert_eq!(release, PointerRelease::Swipe(NavCommand::Next));
    if let PointerRelease::Swipe(command) = release {
        presentation.apply(command);
    }
    assert_eq!(presentation.current_index(), 1);

    router.press(50, 12);
    assert_eq!(router.release(50, 12), PointerRelease::Click { column: 50, row: 12 });

    // a release whose press was dropped is neither
    router.press(50, 12);
    router.cancel_pointer();
    assert_eq!(router.release(30, 12), PointerRelease::Ignored);
    assert_eq!(presentation.current_index(), 1);
}
